//! # mapplot Core
//!
//! Data model shared by the map plotter: the loaded map document, the typed
//! polylines extracted from it, bounding boxes, and line styles.

pub mod geometry;
pub mod document;
pub mod style;

pub use document::MapDocument;
pub use geometry::{BBox, Point, Polyline};
pub use style::{LineColor, LinePattern, LineStyle, StyleError};
