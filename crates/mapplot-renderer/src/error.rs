use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::extract::RenderError;

/// Failures while turning a finished figure into pixels, files or a window.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Generated SVG could not be parsed: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("Cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Cannot write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported output format for '{}' (expected .svg or .png)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Plot window failed: {0}")]
    Window(String),
}

/// Any failure of [`Renderer::render`](crate::Renderer::render).
#[derive(Error, Debug)]
pub enum PlotError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
