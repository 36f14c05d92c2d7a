//! `plot-map`: load a road map dump and plot its polylines.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use mapplot_core::LineStyle;
use mapplot_io::{load_map, PlotSettings};
use mapplot_renderer::{file_backend, Backend, FigureOptions, Renderer};

/// Where the map dump is written next to the plotting tools.
pub const DEFAULT_MAP_PATH: &str = "../map.json";

#[derive(Parser, Debug, Clone)]
#[command(name = "plot-map")]
#[command(about = "Plot the polylines of a road map JSON dump")]
pub struct Cli {
    /// Map dump to plot
    #[arg(default_value = DEFAULT_MAP_PATH)]
    pub map: PathBuf,

    /// Write the plot to an .svg or .png file instead of opening a window
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON file with plot settings
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Line format, e.g. ":k" or "--r"
    #[arg(long, allow_hyphen_values = true)]
    pub style: Option<LineStyle>,

    /// Figure title
    #[arg(long)]
    pub title: Option<String>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    /// Settings from `--settings` (or defaults) with command-line overrides applied.
    pub fn plot_settings(&self) -> anyhow::Result<PlotSettings> {
        let mut settings = match &self.settings {
            Some(path) => PlotSettings::load(path)?,
            None => PlotSettings::default(),
        };

        if let Some(style) = self.style {
            settings.style = style.to_string();
        }
        if let Some(title) = &self.title {
            settings.title = Some(title.clone());
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }

        settings.validate().context("invalid plot settings")?;
        Ok(settings)
    }
}

pub fn figure_options(settings: &PlotSettings) -> anyhow::Result<FigureOptions> {
    Ok(FigureOptions {
        width: settings.width,
        height: settings.height,
        style: settings.line_style()?,
        line_width: settings.line_width,
        x_label: settings.x_label.clone(),
        y_label: settings.y_label.clone(),
        equal_axes: settings.equal_axes,
        title: settings.title.clone(),
    })
}

fn backend_for(cli: &Cli) -> anyhow::Result<Box<dyn Backend>> {
    if let Some(path) = &cli.output {
        return Ok(file_backend(path)?);
    }
    window_backend(cli)
}

#[cfg(feature = "viewer")]
fn window_backend(cli: &Cli) -> anyhow::Result<Box<dyn Backend>> {
    Ok(Box::new(mapplot_renderer::WindowBackend::new(format!(
        "plot-map: {}",
        cli.map.display()
    ))))
}

#[cfg(not(feature = "viewer"))]
fn window_backend(_cli: &Cli) -> anyhow::Result<Box<dyn Backend>> {
    anyhow::bail!("built without the `viewer` feature; pass --output to write the plot to a file")
}

/// Load the map, plot it and present the plot. Returns once the window is
/// closed or the output file is written.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = cli.plot_settings()?;
    let renderer = Renderer::new(figure_options(&settings)?);
    let mut backend = backend_for(cli)?;

    let doc = load_map(&cli.map)?;
    if doc.is_empty() {
        log::warn!("{} contains no polylines", cli.map.display());
    }

    let figure = renderer
        .render(&doc, backend.as_mut())
        .with_context(|| format!("cannot plot {}", cli.map.display()))?;
    log::debug!("Presented {} lines", figure.line_count());
    Ok(())
}

/// Turn the outcome of [`run`] into the process exit code, writing a failure
/// as a single `error: ...` line to `stderr`.
pub fn report(result: anyhow::Result<()>, stderr: &mut dyn Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            // Nothing left to report to if stderr itself is gone.
            let _ = writeln!(stderr, "error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
