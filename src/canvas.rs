//! Pen-style drawing surface over pdf-writer content streams
//!
//! PDF content is a stateful pen: colors and line width stay set until the
//! next change. `PageSurface` hides that behind whole-shape calls so the
//! exporter never depends on what the previous shape left in the pen.

use pdf_writer::Content;

use crate::types::{Color, Point};

/// Control point offset for a quarter-circle cubic bezier
const KAPPA: f64 = 0.552_284_75;

/// Page-space drawing operations used by the PDF exporter
pub trait PageSurface {
    /// Fill the rectangle `(0, 0, width, height)` without an outline
    fn fill_page(&mut self, width: f64, height: f64, color: Color);

    /// Fill and outline a circle, setting every pen property first
    fn draw_circle(
        &mut self,
        center: Point,
        radius: f64,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    );
}

/// Single-page canvas wrapper for pdf-writer
pub struct PdfCanvas {
    content: Content,
}

impl PdfCanvas {
    pub fn new() -> Self {
        Self {
            content: Content::new(),
        }
    }

    /// Finish the content stream
    pub fn finish(self) -> Vec<u8> {
        self.content.finish()
    }

    // ===== Pen =====

    pub fn set_fill_color(&mut self, color: Color) {
        self.content
            .set_fill_rgb(color.r as f32, color.g as f32, color.b as f32);
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.content
            .set_stroke_rgb(color.r as f32, color.g as f32, color.b as f32);
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.content.set_line_width(width as f32);
    }

    // ===== Paths =====

    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.content
            .rect(x as f32, y as f32, width as f32, height as f32);
        self.content.fill_nonzero();
    }

    /// Circle approximated by four cubic bezier arcs, filled then stroked
    pub fn fill_stroke_circle(&mut self, cx: f64, cy: f64, r: f64) {
        let c = r * KAPPA;

        self.content.move_to((cx + r) as f32, cy as f32);
        // Right to top
        self.content.cubic_to(
            (cx + r) as f32,
            (cy + c) as f32,
            (cx + c) as f32,
            (cy + r) as f32,
            cx as f32,
            (cy + r) as f32,
        );
        // Top to left
        self.content.cubic_to(
            (cx - c) as f32,
            (cy + r) as f32,
            (cx - r) as f32,
            (cy + c) as f32,
            (cx - r) as f32,
            cy as f32,
        );
        // Left to bottom
        self.content.cubic_to(
            (cx - r) as f32,
            (cy - c) as f32,
            (cx - c) as f32,
            (cy - r) as f32,
            cx as f32,
            (cy - r) as f32,
        );
        // Bottom to right
        self.content.cubic_to(
            (cx + c) as f32,
            (cy - r) as f32,
            (cx + r) as f32,
            (cy - c) as f32,
            (cx + r) as f32,
            cy as f32,
        );
        self.content.close_path();
        self.content.fill_nonzero_and_stroke();
    }
}

impl Default for PdfCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSurface for PdfCanvas {
    fn fill_page(&mut self, width: f64, height: f64, color: Color) {
        self.set_fill_color(color);
        self.fill_rect(0.0, 0.0, width, height);
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: f64,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    ) {
        self.set_fill_color(fill);
        self.set_stroke_color(stroke);
        self.set_line_width(stroke_width);
        self.fill_stroke_circle(center.x, center.y, radius);
    }
}
