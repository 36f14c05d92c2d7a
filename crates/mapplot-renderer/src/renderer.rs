use mapplot_core::MapDocument;

use crate::backend::Backend;
use crate::error::PlotError;
use crate::extract::{extract_polylines, RenderError};
use crate::figure::{Figure, FigureOptions, PlotLine};

/// Draws every polyline of a map document onto one figure and presents it.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: FigureOptions,
}

impl Renderer {
    pub fn new(options: FigureOptions) -> Self {
        Self { options }
    }

    /// Build the figure: one line per polyline, in document order.
    ///
    /// Every entry is extracted before the first line is added, so an error
    /// leaves no half-drawn figure behind.
    pub fn build_figure(&self, doc: &MapDocument) -> Result<Figure, RenderError> {
        let polylines = extract_polylines(doc)?;

        let mut figure = Figure::new(&self.options);
        for polyline in &polylines {
            figure.plot(PlotLine::from_polyline(
                polyline,
                self.options.style,
                self.options.line_width,
            ));
        }

        let points: usize = polylines.iter().map(|p| p.len()).sum();
        log::info!(
            "Plotting {} polylines ({} points)",
            figure.line_count(),
            points
        );
        Ok(figure)
    }

    /// Build the figure and hand it to `backend`. Returns the presented figure.
    pub fn render(
        &self,
        doc: &MapDocument,
        backend: &mut dyn Backend,
    ) -> Result<Figure, PlotError> {
        let figure = self.build_figure(doc)?;
        backend.present(&figure)?;
        Ok(figure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OutputError;
    use crate::extract::Axis;
    use mapplot_core::{LinePattern, LineStyle};
    use serde_json::json;

    /// Records every figure it is asked to present.
    #[derive(Default)]
    struct RecordingBackend {
        presented: Vec<Figure>,
    }

    impl Backend for RecordingBackend {
        fn present(&mut self, figure: &Figure) -> Result<(), OutputError> {
            self.presented.push(figure.clone());
            Ok(())
        }
    }

    struct FailingBackend;

    impl Backend for FailingBackend {
        fn present(&mut self, _figure: &Figure) -> Result<(), OutputError> {
            Err(OutputError::Window("no display".to_string()))
        }
    }

    fn doc(value: serde_json::Value) -> MapDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_end_to_end_single_line() {
        let d = doc(json!({"data":[{"points":[{"x":0,"y":0},{"x":1,"y":1}]}]}));
        let mut backend = RecordingBackend::default();

        let figure = Renderer::default().render(&d, &mut backend).unwrap();

        assert_eq!(backend.presented.len(), 1);
        assert_eq!(backend.presented[0], figure);
        assert_eq!(figure.line_count(), 1);
        assert_eq!(figure.lines[0].xs, vec![0.0, 1.0]);
        assert_eq!(figure.lines[0].ys, vec![0.0, 1.0]);
        assert_eq!(figure.lines[0].style, LineStyle::default());
        assert_eq!(figure.x_label, "x [m]");
        assert_eq!(figure.y_label, "y [m]");
        assert!(figure.equal_axes);
    }

    #[test]
    fn test_line_count_and_lengths_follow_document() {
        let d = doc(json!({"data":[
            {"points":[{"x":3,"y":1},{"x":2,"y":2},{"x":1,"y":3}]},
            {"points":[]},
            {"points":[{"x":0.5,"y":-0.5}]},
            {"points":[{"x":9,"y":9},{"x":8,"y":8}]}
        ]}));

        let figure = Renderer::default().build_figure(&d).unwrap();

        let lengths: Vec<usize> = figure.lines.iter().map(|l| l.len()).collect();
        assert_eq!(lengths, vec![3, 0, 1, 2]);
        assert_eq!(figure.lines[0].xs, vec![3.0, 2.0, 1.0]);
        assert_eq!(figure.lines[3].ys, vec![9.0, 8.0]);
        for line in &figure.lines {
            assert_eq!(line.xs.len(), line.ys.len());
        }
    }

    #[test]
    fn test_bad_point_presents_nothing() {
        let d = doc(json!({"data":[
            {"points":[{"x":0,"y":0},{"x":1,"y":1}]},
            {"points":[{"y":2}]}
        ]}));
        let mut backend = RecordingBackend::default();

        let err = Renderer::default().render(&d, &mut backend).unwrap_err();

        assert!(matches!(
            err,
            PlotError::Render(RenderError::InvalidCoordinate {
                polyline: 1,
                point: 0,
                axis: Axis::X
            })
        ));
        assert!(backend.presented.is_empty());
    }

    #[test]
    fn test_backend_failure_propagates() {
        let d = doc(json!({"data":[]}));
        let err = Renderer::default().render(&d, &mut FailingBackend).unwrap_err();
        assert!(matches!(err, PlotError::Output(OutputError::Window(_))));
    }

    #[test]
    fn test_options_flow_into_figure() {
        let options = FigureOptions {
            style: LineStyle::parse("--b").unwrap(),
            line_width: 3.0,
            title: Some("LaneSections".to_string()),
            equal_axes: false,
            ..FigureOptions::default()
        };
        let d = doc(json!({"data":[{"points":[{"x":0,"y":0},{"x":1,"y":0}]}]}));

        let figure = Renderer::new(options).build_figure(&d).unwrap();

        assert_eq!(figure.lines[0].style.pattern, LinePattern::Dashed);
        assert_eq!(figure.lines[0].line_width, 3.0);
        assert_eq!(figure.title.as_deref(), Some("LaneSections"));
        assert!(!figure.equal_axes);
    }
}
