//! Conversion of raw map entries into typed polylines.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use mapplot_core::{MapDocument, Point, Polyline};

/// Coordinate axis of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn key(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Polyline {polyline} is not a JSON object")]
    PolylineNotAnObject { polyline: usize },

    #[error("Polyline {polyline} has no 'points' array")]
    MissingPoints { polyline: usize },

    #[error("Point {point} of polyline {polyline} is not a JSON object")]
    PointNotAnObject { polyline: usize, point: usize },

    #[error("Point {point} of polyline {polyline} has no numeric '{axis}' coordinate")]
    InvalidCoordinate {
        polyline: usize,
        point: usize,
        axis: Axis,
    },
}

/// Turn every entry of `doc` into a [`Polyline`], in document order.
///
/// Fails on the first entry or point that does not have the expected shape,
/// so nothing is drawn for a document with a bad point anywhere in it.
pub fn extract_polylines(doc: &MapDocument) -> Result<Vec<Polyline>, RenderError> {
    doc.entries()
        .enumerate()
        .map(|(index, entry)| extract_polyline(index, entry))
        .collect()
}

fn extract_polyline(polyline: usize, entry: &Value) -> Result<Polyline, RenderError> {
    let entry = entry
        .as_object()
        .ok_or(RenderError::PolylineNotAnObject { polyline })?;
    let points = entry
        .get("points")
        .and_then(Value::as_array)
        .ok_or(RenderError::MissingPoints { polyline })?;

    points
        .iter()
        .enumerate()
        .map(|(point, value)| {
            let obj = value
                .as_object()
                .ok_or(RenderError::PointNotAnObject { polyline, point })?;
            let coord = |axis: Axis| {
                obj.get(axis.key())
                    .and_then(Value::as_f64)
                    .ok_or(RenderError::InvalidCoordinate {
                        polyline,
                        point,
                        axis,
                    })
            };
            Ok(Point::new(coord(Axis::X)?, coord(Axis::Y)?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> MapDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_extract_keeps_order_and_counts() {
        let d = doc(json!({"data": [
            {"points": [{"x": 0, "y": 0}, {"x": 1, "y": 1}]},
            {"points": []},
            {"points": [{"x": -2.5, "y": 4.0}, {"x": 3.0, "y": 1e3}, {"x": 7, "y": -1}]}
        ]}));

        let lines = extract_polylines(&d).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].xs(), vec![0.0, 1.0]);
        assert_eq!(lines[0].ys(), vec![0.0, 1.0]);
        assert!(lines[1].is_empty());
        assert_eq!(lines[2].xs(), vec![-2.5, 3.0, 7.0]);
        assert_eq!(lines[2].ys(), vec![4.0, 1000.0, -1.0]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let d = doc(json!({"data": [{"id": "lane-1", "points": [{"x": 1, "y": 2, "s": 0.0}]}]}));
        let lines = extract_polylines(&d).unwrap();
        assert_eq!(lines[0].points, vec![Point::new(1.0, 2.0)]);
    }

    #[test]
    fn test_missing_y_is_render_error() {
        let d = doc(json!({"data": [
            {"points": [{"x": 0, "y": 0}]},
            {"points": [{"x": 0, "y": 0}, {"x": 1}]}
        ]}));
        assert_eq!(
            extract_polylines(&d).unwrap_err(),
            RenderError::InvalidCoordinate {
                polyline: 1,
                point: 1,
                axis: Axis::Y
            }
        );
    }

    #[test]
    fn test_non_numeric_x_is_render_error() {
        let d = doc(json!({"data": [{"points": [{"x": "1.0", "y": 0}]}]}));
        let err = extract_polylines(&d).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidCoordinate {
                polyline: 0,
                point: 0,
                axis: Axis::X
            }
        );
        assert_eq!(
            err.to_string(),
            "Point 0 of polyline 0 has no numeric 'x' coordinate"
        );
    }

    #[test]
    fn test_null_coordinate_is_render_error() {
        let d = doc(json!({"data": [{"points": [{"x": 1, "y": null}]}]}));
        assert!(matches!(
            extract_polylines(&d),
            Err(RenderError::InvalidCoordinate { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn test_missing_points_key() {
        let d = doc(json!({"data": [{"pts": []}]}));
        assert_eq!(
            extract_polylines(&d).unwrap_err(),
            RenderError::MissingPoints { polyline: 0 }
        );
    }

    #[test]
    fn test_shape_errors() {
        let d = doc(json!({"data": [[1, 2]]}));
        assert_eq!(
            extract_polylines(&d).unwrap_err(),
            RenderError::PolylineNotAnObject { polyline: 0 }
        );

        let d = doc(json!({"data": [{"points": [[1, 2]]}]}));
        assert_eq!(
            extract_polylines(&d).unwrap_err(),
            RenderError::PointNotAnObject {
                polyline: 0,
                point: 0
            }
        );
    }

    #[test]
    fn test_empty_document() {
        let d = doc(json!({"data": []}));
        assert!(extract_polylines(&d).unwrap().is_empty());
    }
}
