//! Canvas-to-page coordinate mapping for PDF output

use crate::types::{Canvas, PageSize, Point};

/// Uniform fit of the canvas onto a page.
///
/// Canvas space is y-down with a top-left origin; PDF page space is y-up with
/// a bottom-left origin. The canvas is scaled without distortion and anchored
/// to the top-left of the page, no centering offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFit {
    pub scale: f64,
    pub page: PageSize,
}

impl PageFit {
    pub fn new(canvas: Canvas, page: PageSize) -> Self {
        let scale = (page.width / canvas.width()).min(page.height / canvas.height());
        Self { scale, page }
    }

    /// Map a canvas point to page space (scale, then flip y)
    pub fn to_page(&self, point: Point) -> Point {
        Point::new(point.x * self.scale, self.page.height - point.y * self.scale)
    }

    pub fn scale_length(&self, length: f64) -> f64 {
        length * self.scale
    }

    /// Scaled stroke width, never thinner than `floor`
    pub fn stroke_width(&self, width: f64, floor: f64) -> f64 {
        self.scale_length(width).max(floor)
    }
}
