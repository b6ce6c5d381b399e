//! Shape records: the contract between the drawing surface and the exporters
//!
//! Each variant carries its own fields. Exporters match on the variant
//! exhaustively, so a new formline primitive (ovoid, U-form, split-U) does
//! not compile until both the SVG and the PDF path know how to draw it.

use serde::{Deserialize, Serialize};

use crate::error::ExportResult;

/// Default fill: cedar red
pub const DEFAULT_FILL: &str = "#c0392b";
/// Default outline: charcoal
pub const DEFAULT_STROKE: &str = "#1a1a1a";
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// A filled, outlined circle in canvas space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub cx: f64,
    pub cy: f64,
    /// Stored as drawn. Renderers clamp to a minimum at draw time.
    pub r: f64,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl CircleShape {
    /// Radius used when rendering, never below `min_radius`
    pub fn render_radius(&self, min_radius: f64) -> f64 {
        self.r.max(min_radius)
    }
}

/// One drawn primitive, tagged by `type` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeRecord {
    Circle(CircleShape),
    /// A discriminator this build does not know. Exporters skip it.
    #[serde(other)]
    Unknown,
}

impl ShapeRecord {
    pub fn circle(
        cx: f64,
        cy: f64,
        r: f64,
        fill: impl Into<String>,
        stroke: impl Into<String>,
        stroke_width: f64,
    ) -> Self {
        ShapeRecord::Circle(CircleShape {
            cx,
            cy,
            r,
            fill: fill.into(),
            stroke: stroke.into(),
            stroke_width,
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ShapeRecord::Circle(_) => "circle",
            ShapeRecord::Unknown => "unknown",
        }
    }

    /// Decode a JSON array of shape records as handed over by the drawing surface
    pub fn list_from_json(json: &str) -> ExportResult<Vec<ShapeRecord>> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_tagged_circle() {
        let json = r##"[{"type": "circle", "cx": 200, "cy": 300.5, "r": 50,
            "fill": "#c0392b", "stroke": "#1a1a1a", "stroke_width": 3}]"##;
        let shapes = ShapeRecord::list_from_json(json).unwrap();
        assert_eq!(
            shapes,
            vec![ShapeRecord::circle(
                200.0,
                300.5,
                50.0,
                "#c0392b",
                "#1a1a1a",
                3.0
            )]
        );
    }

    #[test]
    fn unknown_type_decodes_to_catch_all() {
        let json = r##"[
            {"type": "ovoid", "cx": 10, "cy": 20},
            {"type": "circle", "cx": 1, "cy": 2, "r": 3,
             "fill": "#ffffff", "stroke": "#000000", "stroke_width": 1}
        ]"##;
        let shapes = ShapeRecord::list_from_json(json).unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0], ShapeRecord::Unknown);
        assert_eq!(shapes[1].kind(), "circle");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ShapeRecord::list_from_json(r#"[{"type": "circle"}]"#).is_err());
    }

    #[test]
    fn circle_serializes_with_type_tag() {
        let value =
            serde_json::to_value(ShapeRecord::circle(1.0, 2.0, 3.0, "#aaaaaa", "#bbbbbb", 4.0))
                .unwrap();
        assert_eq!(value["type"], "circle");
        assert_eq!(value["stroke_width"], 4.0);
    }

    #[test]
    fn render_radius_clamps_without_touching_record() {
        let circle = CircleShape {
            cx: 0.0,
            cy: 0.0,
            r: 0.3,
            fill: DEFAULT_FILL.into(),
            stroke: DEFAULT_STROKE.into(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        };
        assert_eq!(circle.render_radius(1.0), 1.0);
        assert_eq!(circle.r, 0.3);
    }
}
