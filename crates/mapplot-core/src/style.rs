use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Empty line format string")]
    Empty,

    #[error("Unrecognized character '{ch}' in line format '{format}'")]
    UnknownCharacter { ch: char, format: String },

    #[error("Line format '{0}' specifies more than one line pattern")]
    DuplicatePattern(String),

    #[error("Line format '{0}' specifies more than one color")]
    DuplicateColor(String),
}

const COLOR_CODES: [char; 8] = ['b', 'g', 'r', 'c', 'm', 'y', 'k', 'w'];

/// RGB color of a plotted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LineColor {
    pub const BLACK: LineColor = LineColor { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Single-letter color codes: `b g r c m y k w`.
    pub fn from_code(code: char) -> Option<Self> {
        let color = match code {
            'b' => Self::new(0, 0, 255),
            'g' => Self::new(0, 128, 0),
            'r' => Self::new(255, 0, 0),
            'c' => Self::new(0, 191, 191),
            'm' => Self::new(191, 0, 191),
            'y' => Self::new(191, 191, 0),
            'k' => Self::BLACK,
            'w' => Self::new(255, 255, 255),
            _ => return None,
        };
        Some(color)
    }

    /// `#rrggbb` form, as used in SVG attributes.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for LineColor {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Stroke pattern of a plotted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinePattern {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LinePattern {
    /// On/off dash lengths in multiples of the line width. Empty for solid lines.
    pub fn dash_ratios(&self) -> &'static [f64] {
        match self {
            LinePattern::Solid => &[],
            LinePattern::Dashed => &[3.7, 1.6],
            LinePattern::Dotted => &[1.0, 1.65],
            LinePattern::DashDot => &[6.4, 1.6, 1.0, 1.6],
        }
    }

    /// Dash lengths in pixels for a stroke of the given width.
    pub fn dash_array(&self, line_width: f64) -> Vec<f64> {
        self.dash_ratios().iter().map(|r| r * line_width).collect()
    }

    fn code(&self) -> &'static str {
        match self {
            LinePattern::Solid => "-",
            LinePattern::Dashed => "--",
            LinePattern::Dotted => ":",
            LinePattern::DashDot => "-.",
        }
    }
}

/// Color and pattern of a plotted line, written as a short format string
/// such as `":k"` (dotted black) or `"--r"` (dashed red).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: LineColor,
    pub pattern: LinePattern,
}

impl LineStyle {
    pub fn new(color: LineColor, pattern: LinePattern) -> Self {
        Self { color, pattern }
    }

    pub fn parse(format: &str) -> Result<Self, StyleError> {
        if format.is_empty() {
            return Err(StyleError::Empty);
        }

        let mut pattern = None;
        let mut color = None;
        let mut rest = format;

        while let Some(ch) = rest.chars().next() {
            let (found, len) = if rest.starts_with("--") {
                (Some(LinePattern::Dashed), 2)
            } else if rest.starts_with("-.") {
                (Some(LinePattern::DashDot), 2)
            } else if ch == '-' {
                (Some(LinePattern::Solid), 1)
            } else if ch == ':' {
                (Some(LinePattern::Dotted), 1)
            } else {
                (None, ch.len_utf8())
            };

            match found {
                Some(p) => {
                    if pattern.replace(p).is_some() {
                        return Err(StyleError::DuplicatePattern(format.to_string()));
                    }
                }
                None => {
                    let c = LineColor::from_code(ch).ok_or_else(|| StyleError::UnknownCharacter {
                        ch,
                        format: format.to_string(),
                    })?;
                    if color.replace(c).is_some() {
                        return Err(StyleError::DuplicateColor(format.to_string()));
                    }
                }
            }
            rest = &rest[len..];
        }

        Ok(Self {
            color: color.unwrap_or_default(),
            pattern: pattern.unwrap_or(LinePattern::Solid),
        })
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(LineColor::BLACK, LinePattern::Dotted)
    }
}

impl FromStr for LineStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = COLOR_CODES
            .iter()
            .find(|&&ch| LineColor::from_code(ch) == Some(self.color))
            .map(|ch| ch.to_string())
            .unwrap_or_else(|| self.color.to_hex());
        write!(f, "{}{}", self.pattern.code(), color)
    }
}
