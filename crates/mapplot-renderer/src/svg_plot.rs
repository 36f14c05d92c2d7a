//! SVG rendering of a [`Figure`].
//!
//! ## Layout
//! The canvas is split into a plot area framed by a black rectangle and the
//! margins around it, which hold tick labels, the axis labels and the
//! optional title:
//!
//! ```text
//! +---------------------------------+
//! |              title              |
//! |      +-----------------------+  |
//! |  y   |                       |  |
//! | lbl  |       plot area       |  |
//! |      +-----------------------+  |
//! |              x label            |
//! +---------------------------------+
//! ```

use svg::node::element::path::Data;
use svg::node::element::{Group, Line, Path, Rectangle, Text};
use svg::Document;

use mapplot_core::{BBox, Point};

use crate::figure::{Figure, PlotLine};
use crate::ticks::ticks;
use crate::viewport::Viewport;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TITLE_HEIGHT: f64 = 30.0;
const TICK_LENGTH: f64 = 5.0;
const FONT_FAMILY: &str = "sans-serif";
const FONT_SIZE: f64 = 12.0;

/// Fitted viewport of the figure's plot area.
///
/// An empty figure shows the unit square.
pub fn plot_viewport(figure: &Figure) -> Viewport {
    let top = MARGIN_TOP + if figure.title.is_some() { TITLE_HEIGHT } else { 0.0 };
    let width = (figure.width as f64 - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let height = (figure.height as f64 - top - MARGIN_BOTTOM).max(1.0);

    let mut viewport = Viewport::new(MARGIN_LEFT, top, width, height);
    let bounds = figure
        .data_bounds()
        .unwrap_or_else(|| BBox::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)));
    viewport.fit_bbox(&bounds, figure.equal_axes);
    viewport
}

/// Render the figure as a standalone SVG document.
pub fn render_svg(figure: &Figure) -> String {
    let viewport = plot_viewport(figure);
    let width = figure.width as f64;
    let height = figure.height as f64;

    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
        .add(
            Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("fill", "white"),
        );

    let mut lines = Group::new().set("fill", "none");
    let mut drawn = 0;
    for line in &figure.lines {
        if let Some(path) = line_path(line, &viewport) {
            lines = lines.add(path);
            drawn += 1;
        }
    }
    log::debug!(
        "SVG plot: {} of {} lines have visible segments",
        drawn,
        figure.line_count()
    );

    document = document
        .add(lines)
        .add(frame(&viewport))
        .add(axes(&viewport))
        .add(axis_labels(figure, &viewport));

    if let Some(title) = &figure.title {
        document = document.add(
            text(title.clone(), width / 2.0, MARGIN_TOP + FONT_SIZE)
                .set("text-anchor", "middle")
                .set("font-size", FONT_SIZE + 4.0),
        );
    }

    document.to_string()
}

/// Path of one plotted line. Lines with fewer than two points leave no mark.
fn line_path(line: &PlotLine, viewport: &Viewport) -> Option<Path> {
    if line.len() < 2 {
        return None;
    }

    let mut points = line.points().map(|p| viewport.map_to_screen(p));
    let mut data = Data::new().move_to(points.next()?);
    for p in points {
        data = data.line_to(p);
    }

    let mut path = Path::new()
        .set("d", data)
        .set("stroke", line.style.color.to_hex())
        .set("stroke-width", line.line_width);

    let dashes = line.style.pattern.dash_array(line.line_width);
    if !dashes.is_empty() {
        let dasharray = dashes
            .iter()
            .map(|d| format!("{:.2}", d))
            .collect::<Vec<_>>()
            .join(",");
        path = path.set("stroke-dasharray", dasharray);
    }
    Some(path)
}

fn frame(viewport: &Viewport) -> Rectangle {
    Rectangle::new()
        .set("x", viewport.area_left)
        .set("y", viewport.area_top)
        .set("width", viewport.area_width)
        .set("height", viewport.area_height)
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 1)
}

fn axes(viewport: &Viewport) -> Group {
    let visible = viewport.visible_bounds();
    let bottom = viewport.area_top + viewport.area_height;
    let left = viewport.area_left;

    let mut group = Group::new()
        .set("stroke", "black")
        .set("stroke-width", 1)
        .set("font-family", FONT_FAMILY)
        .set("font-size", FONT_SIZE);

    for tick in ticks(visible.min.x, visible.max.x) {
        let x = viewport.map_to_screen_x(tick.value);
        group = group
            .add(tick_mark(x, bottom, x, bottom + TICK_LENGTH))
            .add(
                text(tick.label, x, bottom + TICK_LENGTH + FONT_SIZE + 2.0)
                    .set("text-anchor", "middle")
                    .set("stroke", "none"),
            );
    }

    for tick in ticks(visible.min.y, visible.max.y) {
        let y = viewport.map_to_screen_y(tick.value);
        group = group
            .add(tick_mark(left - TICK_LENGTH, y, left, y))
            .add(
                text(tick.label, left - TICK_LENGTH - 3.0, y + FONT_SIZE / 3.0)
                    .set("text-anchor", "end")
                    .set("stroke", "none"),
            );
    }

    group
}

fn axis_labels(figure: &Figure, viewport: &Viewport) -> Group {
    let center_x = viewport.area_left + viewport.area_width / 2.0;
    let center_y = viewport.area_top + viewport.area_height / 2.0;
    let label_x = 20.0;

    Group::new()
        .set("font-family", FONT_FAMILY)
        .set("font-size", FONT_SIZE + 2.0)
        .set("text-anchor", "middle")
        .add(text(
            figure.x_label.clone(),
            center_x,
            figure.height as f64 - 15.0,
        ))
        .add(
            text(figure.y_label.clone(), label_x, center_y).set(
                "transform",
                format!("rotate(-90 {} {})", label_x, center_y),
            ),
        )
}

fn tick_mark(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
}

fn text(content: String, x: f64, y: f64) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("font-family", FONT_FAMILY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::FigureOptions;
    use mapplot_core::{LineStyle, Polyline};

    fn figure(lines: &[&[(f64, f64)]]) -> Figure {
        let mut fig = Figure::new(&FigureOptions::default());
        for points in lines {
            let polyline: Polyline = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
            fig.plot(PlotLine::from_polyline(&polyline, LineStyle::default(), 1.5));
        }
        fig
    }

    #[test]
    fn test_svg_has_labels_and_dotted_path() {
        let svg = render_svg(&figure(&[&[(0.0, 0.0), (1.0, 1.0)]]));
        assert!(svg.contains("x [m]"));
        assert!(svg.contains("y [m]"));
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(svg.contains("stroke-dasharray=\"1.50,"));
        assert!(svg.contains("stroke=\"#000000\""));
    }

    #[test]
    fn test_empty_lines_leave_no_path() {
        let svg = render_svg(&figure(&[&[], &[(0.0, 0.0), (2.0, 0.0)], &[(5.0, 5.0)]]));
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn test_empty_figure_still_has_axes() {
        let svg = render_svg(&figure(&[]));
        assert_eq!(svg.matches("<path").count(), 0);
        assert!(svg.contains("x [m]"));
        assert!(svg.matches("<line").count() > 2);
    }

    #[test]
    fn test_title_rendered() {
        let mut fig = figure(&[&[(0.0, 0.0), (1.0, 0.0)]]);
        fig.title = Some("CircleR100".to_string());
        let svg = render_svg(&fig);
        assert!(svg.contains("CircleR100"));
    }

    #[test]
    fn test_viewport_keeps_data_inside_plot_area() {
        let fig = figure(&[&[(-100.0, -100.0), (100.0, 100.0)], &[(0.0, 50.0), (20.0, -80.0)]]);
        let vp = plot_viewport(&fig);
        for line in &fig.lines {
            for p in line.points() {
                let (sx, sy) = vp.map_to_screen(p);
                assert!(sx >= vp.area_left && sx <= vp.area_left + vp.area_width);
                assert!(sy >= vp.area_top && sy <= vp.area_top + vp.area_height);
            }
        }
        assert_eq!(vp.zoom_x, vp.zoom_y);
    }

    #[test]
    fn test_extreme_coordinates_render_finite_svg() {
        let svg = render_svg(&figure(&[&[(-1e308, -1e308), (1e308, 1e308)]]));
        assert_eq!(svg.matches("<path").count(), 1);
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn test_far_offset_labels_stay_short() {
        let svg = render_svg(&figure(&[&[(1e20, 0.0), (1e20 + 2e5, 1.0)]]));
        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("100000000000000049152"));
    }
}
