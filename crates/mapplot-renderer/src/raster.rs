//! Rasterization of rendered SVG plots.

use resvg::{tiny_skia, usvg};

use crate::error::OutputError;

/// Rasterize an SVG document onto a white pixmap of its own size.
///
/// System fonts are loaded so tick and axis labels come out as text. Without
/// any installed fonts the labels are skipped.
pub fn rasterize(svg: &str) -> Result<tiny_skia::Pixmap, OutputError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)?;
    let size = tree.size().to_int_size();
    let mut pixmap =
        tiny_skia::Pixmap::new(size.width(), size.height()).ok_or(OutputError::Pixmap {
            width: size.width(),
            height: size.height(),
        })?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    log::debug!("Rasterized plot to {}x{} pixels", size.width(), size.height());
    Ok(pixmap)
}

/// Encode a pixmap as PNG bytes.
pub fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, OutputError> {
    pixmap
        .encode_png()
        .map_err(|e| OutputError::Encode(e.to_string()))
}

/// Pack pixmap pixels as `0x00RRGGBB` words, row by row.
///
/// The pixmap is opaque (it is filled white before drawing), so premultiplied
/// channels equal straight ones.
pub fn to_rgb_words(pixmap: &tiny_skia::Pixmap) -> Vec<u32> {
    pixmap
        .data()
        .chunks_exact(4)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect()
}
