use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use mapplot_core::{LineStyle, StyleError};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Cannot read settings file '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid line style: {0}")]
    Style(#[from] StyleError),

    #[error("Setting '{field}' must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Appearance of the plot. Every field may be omitted in a settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    pub width: u32,
    pub height: u32,
    /// Line format string, e.g. `":k"`.
    pub style: String,
    pub line_width: f64,
    pub x_label: String,
    pub y_label: String,
    pub equal_axes: bool,
    pub title: Option<String>,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            style: ":k".to_string(),
            line_width: 1.5,
            x_label: "x [m]".to_string(),
            y_label: "y [m]".to_string(),
            equal_axes: true,
            title: None,
        }
    }
}

impl PlotSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&text)?;
        log::info!("Loaded plot settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("width", self.width as f64),
            ("height", self.height as f64),
            ("line_width", self.line_width),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(SettingsError::NotPositive { field, value });
            }
        }
        self.line_style()?;
        Ok(())
    }

    pub fn line_style(&self) -> Result<LineStyle, StyleError> {
        LineStyle::parse(&self.style)
    }
}
