use serde::{Deserialize, Serialize};

use mapplot_core::{BBox, Point};

/// Fraction of the data extent left free around the data on each side.
pub const DATA_MARGIN: f64 = 0.05;

/// Smallest data extent (meters) an axis is fitted to.
pub const MIN_EXTENT: f64 = 1.0;

/// Maps map coordinates (y up) onto the pixel rectangle of the plot area
/// (y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Center X in map coordinates.
    pub center_x: f64,
    /// Center Y in map coordinates.
    pub center_y: f64,
    /// Pixels per meter along x.
    pub zoom_x: f64,
    /// Pixels per meter along y.
    pub zoom_y: f64,
    /// Left edge of the plot area in pixels.
    pub area_left: f64,
    /// Top edge of the plot area in pixels.
    pub area_top: f64,
    /// Plot area width in pixels.
    pub area_width: f64,
    /// Plot area height in pixels.
    pub area_height: f64,
}

impl Viewport {
    pub fn new(area_left: f64, area_top: f64, area_width: f64, area_height: f64) -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            zoom_x: 1.0,
            zoom_y: 1.0,
            area_left,
            area_top,
            area_width,
            area_height,
        }
    }

    /// Zoom to fit a bounding box, keeping a margin around it.
    ///
    /// With `equal_axes` both axes share the smaller of the two scales, so one
    /// meter has the same length on screen in x and y. An axis with less than
    /// [`MIN_EXTENT`] of data is fitted to [`MIN_EXTENT`] around its center.
    /// Scales stay finite and positive for any finite box.
    pub fn fit_bbox(&mut self, bbox: &BBox, equal_axes: bool) {
        let center = bbox.center();
        self.center_x = center.x;
        self.center_y = center.y;

        let grow = 1.0 + 2.0 * DATA_MARGIN;
        let half_w = bbox.half_width().max(MIN_EXTENT / 2.0);
        let half_h = bbox.half_height().max(MIN_EXTENT / 2.0);
        let zoom_x = self.area_width / 2.0 / half_w / grow;
        let zoom_y = self.area_height / 2.0 / half_h / grow;
        if equal_axes {
            let zoom = zoom_x.min(zoom_y);
            self.zoom_x = zoom;
            self.zoom_y = zoom;
        } else {
            self.zoom_x = zoom_x;
            self.zoom_y = zoom_y;
        }
    }

    /// Convert a map X coordinate to a screen coordinate.
    pub fn map_to_screen_x(&self, x: f64) -> f64 {
        (x - self.center_x) * self.zoom_x + self.area_left + self.area_width / 2.0
    }

    /// Convert a map Y coordinate to a screen coordinate.
    pub fn map_to_screen_y(&self, y: f64) -> f64 {
        self.area_top + self.area_height / 2.0 - (y - self.center_y) * self.zoom_y
    }

    pub fn map_to_screen(&self, p: Point) -> (f64, f64) {
        (self.map_to_screen_x(p.x), self.map_to_screen_y(p.y))
    }

    /// The part of the map covered by the plot area, clamped to finite values.
    pub fn visible_bounds(&self) -> BBox {
        let half_w = self.area_width / 2.0 / self.zoom_x;
        let half_h = self.area_height / 2.0 / self.zoom_y;
        BBox::new(
            Point::new(
                (self.center_x - half_w).max(f64::MIN),
                (self.center_y - half_h).max(f64::MIN),
            ),
            Point::new(
                (self.center_x + half_w).min(f64::MAX),
                (self.center_y + half_h).min(f64::MAX),
            ),
        )
    }
}
