//! Export configuration

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};
use crate::types::{Color, PageSize};

/// Warm off-white, like birch bark
pub const BACKGROUND_COLOR: &str = "#fdf6e3";

/// Settings shared by the SVG and PDF exporters.
///
/// Missing JSON fields fall back to the studio defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Background fill as `#rrggbb`, painted beneath every shape
    pub background: String,
    /// PDF page size in points
    pub page_size: PageSize,
    /// Smallest radius drawn, in canvas units
    pub min_radius: f64,
    /// Thinnest PDF outline, in points
    pub min_pdf_stroke_width: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            background: BACKGROUND_COLOR.to_string(),
            page_size: PageSize::LETTER_LANDSCAPE,
            min_radius: 1.0,
            min_pdf_stroke_width: 0.5,
        }
    }
}

impl ExportOptions {
    pub fn from_json_str(json: &str) -> ExportResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject settings that would produce an empty, inverted or non-finite page.
    ///
    /// The page must have finite positive dimensions; the radius and stroke
    /// floors must be finite and not negative.
    pub fn validate(&self) -> ExportResult<()> {
        let PageSize { width, height } = self.page_size;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ExportError::Config(format!(
                "page_size must be finite and positive, got {}x{}",
                width, height
            )));
        }
        if !(self.min_radius.is_finite() && self.min_radius >= 0.0) {
            return Err(ExportError::Config(format!(
                "min_radius must be finite and non-negative, got {}",
                self.min_radius
            )));
        }
        if !(self.min_pdf_stroke_width.is_finite() && self.min_pdf_stroke_width >= 0.0) {
            return Err(ExportError::Config(format!(
                "min_pdf_stroke_width must be finite and non-negative, got {}",
                self.min_pdf_stroke_width
            )));
        }
        Ok(())
    }

    pub fn background_color(&self) -> ExportResult<Color> {
        Color::from_hex(&self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(options: ExportOptions, field: &str) {
        match options.validate() {
            Err(ExportError::Config(message)) => assert!(message.contains(field), "{message}"),
            other => panic!("expected Config error for {field}, got {other:?}"),
        }
    }

    #[test]
    fn defaults_match_studio() {
        let options = ExportOptions::default();
        assert_eq!(options.background, "#fdf6e3");
        assert_eq!(options.page_size, PageSize::new(792.0, 612.0));
        assert_eq!(options.min_radius, 1.0);
        assert_eq!(options.min_pdf_stroke_width, 0.5);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let options = ExportOptions::from_json_str(r##"{"background": "#ffffff"}"##).unwrap();
        assert_eq!(options.background, "#ffffff");
        assert_eq!(options.page_size, PageSize::LETTER_LANDSCAPE);
        assert_eq!(options.background_color().unwrap(), Color::white());
    }

    #[test]
    fn page_size_from_json() {
        let options =
            ExportOptions::from_json_str(r#"{"page_size": {"width": 612, "height": 792}}"#)
                .unwrap();
        assert_eq!(options.page_size, PageSize::new(612.0, 792.0));
    }

    #[test]
    fn bad_json_is_config_error() {
        assert!(matches!(
            ExportOptions::from_json_str("{not json"),
            Err(ExportError::Config(_))
        ));
    }

    #[test]
    fn defaults_are_valid() {
        assert!(ExportOptions::default().validate().is_ok());
    }

    #[test]
    fn zero_floors_are_valid() {
        let options = ExportOptions {
            min_radius: 0.0,
            min_pdf_stroke_width: 0.0,
            ..ExportOptions::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn degenerate_page_sizes_are_rejected() {
        for (width, height) in [
            (0.0, 612.0),
            (792.0, 0.0),
            (-792.0, 612.0),
            (792.0, -5.0),
            (f64::NAN, 612.0),
            (792.0, f64::INFINITY),
        ] {
            rejected(
                ExportOptions {
                    page_size: PageSize::new(width, height),
                    ..ExportOptions::default()
                },
                "page_size",
            );
        }
    }

    #[test]
    fn bad_min_radius_is_rejected() {
        for min_radius in [-3.0, f64::NAN, f64::INFINITY] {
            rejected(
                ExportOptions {
                    min_radius,
                    ..ExportOptions::default()
                },
                "min_radius",
            );
        }
    }

    #[test]
    fn bad_stroke_floor_is_rejected() {
        for min_pdf_stroke_width in [-0.5, f64::NAN, f64::NEG_INFINITY] {
            rejected(
                ExportOptions {
                    min_pdf_stroke_width,
                    ..ExportOptions::default()
                },
                "min_pdf_stroke_width",
            );
        }
    }

    #[test]
    fn json_with_degenerate_page_is_rejected() {
        let result = ExportOptions::from_json_str(
            r#"{"page_size": {"width": 0, "height": -5}, "min_radius": -3}"#,
        );
        assert!(matches!(result, Err(ExportError::Config(m)) if m.contains("page_size")));
    }
}
