//! # mapplot I/O
//!
//! Readers for the map dump consumed by the plotter and for the optional
//! JSON plot settings file.

pub mod loader;
pub mod settings;

pub use loader::{load_map, LoadError, MapLoader};
pub use settings::{PlotSettings, SettingsError};
