//! # mapplot Renderer
//!
//! Turns a loaded map document into a plot: every polyline becomes one
//! dotted line on a shared figure with equally scaled, metric axes. The
//! figure is rendered to SVG and then written to a file or shown in a window
//! that blocks until it is closed.
//!
//! The window needs the `viewer` feature (on by default).

pub mod backend;
pub mod error;
pub mod extract;
pub mod figure;
pub mod raster;
pub mod renderer;
pub mod svg_plot;
pub mod ticks;
#[cfg(feature = "viewer")]
pub mod viewer;
pub mod viewport;

pub use backend::{file_backend, Backend, PngFileBackend, SvgFileBackend};
pub use error::{OutputError, PlotError};
pub use extract::{extract_polylines, Axis, RenderError};
pub use figure::{Figure, FigureOptions, PlotLine};
pub use renderer::Renderer;
pub use svg_plot::render_svg;
#[cfg(feature = "viewer")]
pub use viewer::WindowBackend;
pub use viewport::Viewport;
