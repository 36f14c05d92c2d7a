//! Native plot window.

use minifb::{Key, Window, WindowOptions};

use crate::backend::Backend;
use crate::error::OutputError;
use crate::figure::Figure;
use crate::raster::{rasterize, to_rgb_words};
use crate::svg_plot::render_svg;

const REFRESH_FPS: usize = 30;

/// Shows the figure in a window and blocks until the user closes it
/// (or presses Escape).
#[derive(Debug, Clone)]
pub struct WindowBackend {
    title: String,
}

impl WindowBackend {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for WindowBackend {
    fn default() -> Self {
        Self::new("Figure 1")
    }
}

impl Backend for WindowBackend {
    fn present(&mut self, figure: &Figure) -> Result<(), OutputError> {
        let pixmap = rasterize(&render_svg(figure))?;
        let width = pixmap.width() as usize;
        let height = pixmap.height() as usize;
        let buffer = to_rgb_words(&pixmap);

        let mut window = Window::new(&self.title, width, height, WindowOptions::default())
            .map_err(|e| OutputError::Window(e.to_string()))?;
        window.set_target_fps(REFRESH_FPS);
        log::info!("Plot window '{}' open, close it to exit", self.title);

        while window.is_open() && !window.is_key_down(Key::Escape) {
            window
                .update_with_buffer(&buffer, width, height)
                .map_err(|e| OutputError::Window(e.to_string()))?;
        }

        log::info!("Plot window closed");
        Ok(())
    }
}
