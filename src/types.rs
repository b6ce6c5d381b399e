//! Type definitions shared by both exporters

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};

/// Point in either canvas or page space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Drawing surface size in pixel units, origin top-left, y pointing down.
///
/// Fixed for a drawing session. Both dimensions are finite and positive;
/// the PDF exporter divides by them to fit the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    width: f64,
    height: f64,
}

impl Canvas {
    /// Canvas size of the studio window
    pub const REFERENCE: Canvas = Canvas {
        width: 800.0,
        height: 600.0,
    };

    pub fn new(width: f64, height: f64) -> ExportResult<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ExportError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Physical page size in points (1/72 inch)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// US Letter, landscape: 11in x 8.5in
    pub const LETTER_LANDSCAPE: PageSize = PageSize {
        width: 792.0,
        height: 612.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::LETTER_LANDSCAPE
    }
}

/// Color with normalized components (0.0-1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Parse `#rrggbb` (the leading `#` is optional) into normalized components.
    pub fn from_hex(hex: &str) -> ExportResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ExportError::InvalidColor(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| ExportError::InvalidColor(hex.to_string()))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0 }
    }

    pub fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0 }
    }
}
