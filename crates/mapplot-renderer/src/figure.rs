use serde::{Deserialize, Serialize};

use mapplot_core::{BBox, LineStyle, Point, Polyline};

/// A single drawn line: the x and y coordinate sequences of one polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotLine {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub style: LineStyle,
    /// Stroke width in pixels.
    pub line_width: f64,
}

impl PlotLine {
    pub fn from_polyline(polyline: &Polyline, style: LineStyle, line_width: f64) -> Self {
        Self {
            xs: polyline.xs(),
            ys: polyline.ys(),
            style,
            line_width,
        }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| Point::new(x, y))
    }

    pub fn bbox(&self) -> Option<BBox> {
        BBox::from_points(&self.points().collect::<Vec<_>>())
    }
}

/// How a figure is laid out and labelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureOptions {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    pub style: LineStyle,
    pub line_width: f64,
    pub x_label: String,
    pub y_label: String,
    /// Use one scale for both axes.
    pub equal_axes: bool,
    pub title: Option<String>,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            style: LineStyle::default(),
            line_width: 1.5,
            x_label: "x [m]".to_string(),
            y_label: "y [m]".to_string(),
            equal_axes: true,
            title: None,
        }
    }
}

/// The shared canvas all polylines are drawn on before it is presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub lines: Vec<PlotLine>,
    pub width: u32,
    pub height: u32,
    pub x_label: String,
    pub y_label: String,
    pub equal_axes: bool,
    pub title: Option<String>,
}

impl Figure {
    pub fn new(options: &FigureOptions) -> Self {
        Self {
            lines: Vec::new(),
            width: options.width,
            height: options.height,
            x_label: options.x_label.clone(),
            y_label: options.y_label.clone(),
            equal_axes: options.equal_axes,
            title: options.title.clone(),
        }
    }

    /// Append a line. Empty lines are kept so the line count matches the input.
    pub fn plot(&mut self, line: PlotLine) {
        self.lines.push(line);
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Union of the bounding boxes of all non-empty lines.
    pub fn data_bounds(&self) -> Option<BBox> {
        self.lines
            .iter()
            .filter_map(PlotLine::bbox)
            .reduce(|a, b| a.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(points: &[(f64, f64)]) -> PlotLine {
        let polyline: Polyline = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        PlotLine::from_polyline(&polyline, LineStyle::default(), 1.0)
    }

    #[test]
    fn test_figure_defaults() {
        let fig = Figure::new(&FigureOptions::default());
        assert_eq!(fig.line_count(), 0);
        assert_eq!(fig.x_label, "x [m]");
        assert_eq!(fig.y_label, "y [m]");
        assert!(fig.equal_axes);
        assert!(fig.data_bounds().is_none());
    }

    #[test]
    fn test_data_bounds_skip_empty_lines() {
        let mut fig = Figure::new(&FigureOptions::default());
        fig.plot(line(&[(0.0, 0.0), (1.0, 2.0)]));
        fig.plot(line(&[]));
        fig.plot(line(&[(-3.0, 1.0)]));

        assert_eq!(fig.line_count(), 3);
        let b = fig.data_bounds().unwrap();
        assert_eq!(b.min, Point::new(-3.0, 0.0));
        assert_eq!(b.max, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_plot_line_points_pair_up() {
        let l = line(&[(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(l.len(), 2);
        assert_eq!(
            l.points().collect::<Vec<_>>(),
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
        );
    }
}
