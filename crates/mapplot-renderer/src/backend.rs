use std::fs;
use std::path::{Path, PathBuf};

use crate::error::OutputError;
use crate::figure::Figure;
use crate::raster::{encode_png, rasterize};
use crate::svg_plot::render_svg;

/// Destination a finished figure is presented on.
pub trait Backend {
    fn present(&mut self, figure: &Figure) -> Result<(), OutputError>;
}

/// Writes the figure as an SVG file.
#[derive(Debug, Clone)]
pub struct SvgFileBackend {
    path: PathBuf,
}

impl SvgFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Backend for SvgFileBackend {
    fn present(&mut self, figure: &Figure) -> Result<(), OutputError> {
        write_file(&self.path, render_svg(figure).as_bytes())
    }
}

/// Writes the figure as a PNG file.
#[derive(Debug, Clone)]
pub struct PngFileBackend {
    path: PathBuf,
}

impl PngFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Backend for PngFileBackend {
    fn present(&mut self, figure: &Figure) -> Result<(), OutputError> {
        let pixmap = rasterize(&render_svg(figure))?;
        write_file(&self.path, &encode_png(&pixmap)?)
    }
}

/// Pick a file backend from the extension of `path` (`.svg` or `.png`).
pub fn file_backend(path: &Path) -> Result<Box<dyn Backend>, OutputError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => Ok(Box::new(SvgFileBackend::new(path))),
        Some("png") => Ok(Box::new(PngFileBackend::new(path))),
        _ => Err(OutputError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), OutputError> {
    fs::write(path, bytes).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Plot written to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
