//! Drawing session state
//!
//! Owns the ordered shape collection for the lifetime of a drawing. The
//! interactive surface feeds it press/release positions; exporters borrow a
//! read-only slice, so the collection cannot change while an export runs.
//! A session is not meant to be shared across threads without a lock held
//! for the whole export.

use std::path::Path;

use log::debug;

use crate::error::ExportResult;
use crate::options::ExportOptions;
use crate::pdf_export::export_pdf_with;
use crate::shapes::{
    CircleShape, ShapeRecord, DEFAULT_FILL, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH,
};
use crate::svg_writer::export_svg_with;
use crate::types::{Canvas, Point};

/// Drags shorter than this are accidental clicks
pub const MIN_GESTURE_RADIUS: f64 = 2.0;

/// Stroke width range offered by the toolbar
pub const STROKE_WIDTH_RANGE: (f64, f64) = (1.0, 20.0);

#[derive(Debug, Clone)]
pub struct DrawingSession {
    canvas: Canvas,
    shapes: Vec<ShapeRecord>,
    fill: String,
    stroke: String,
    stroke_width: f64,
    drag_start: Option<Point>,
    options: ExportOptions,
}

impl DrawingSession {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            shapes: Vec::new(),
            fill: DEFAULT_FILL.to_string(),
            stroke: DEFAULT_STROKE.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            drag_start: None,
            options: ExportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn shapes(&self) -> &[ShapeRecord] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    // ===== Style =====

    /// Color picker output, stored as given and parsed at export time
    pub fn set_fill(&mut self, color: impl Into<String>) {
        self.fill = color.into();
    }

    pub fn set_stroke(&mut self, color: impl Into<String>) {
        self.stroke = color.into();
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        let (min, max) = STROKE_WIDTH_RANGE;
        self.stroke_width = width.clamp(min, max);
    }

    pub fn fill(&self) -> &str {
        &self.fill
    }

    pub fn stroke(&self) -> &str {
        &self.stroke
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    // ===== Gestures =====

    pub fn begin_drag(&mut self, at: Point) {
        self.drag_start = Some(at);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_start.is_some()
    }

    /// Circle the current drag would commit, for the preview ring
    pub fn drag_preview(&self, at: Point) -> Option<CircleShape> {
        self.drag_start.map(|start| self.circle_from(start, at))
    }

    /// End the drag and record a circle centered on the press point.
    ///
    /// Returns the recorded shape, or `None` when no drag was active or the
    /// radius is below [`MIN_GESTURE_RADIUS`].
    pub fn finish_drag(&mut self, at: Point) -> Option<&ShapeRecord> {
        let start = self.drag_start.take()?;
        let circle = self.circle_from(start, at);
        if circle.r < MIN_GESTURE_RADIUS {
            debug!("Ignoring click at ({}, {})", start.x, start.y);
            return None;
        }

        debug!(
            "Circle at ({:.0}, {:.0}) radius {:.1}, {} shapes",
            circle.cx,
            circle.cy,
            circle.r,
            self.shapes.len() + 1
        );
        self.shapes.push(ShapeRecord::Circle(circle));
        self.shapes.last()
    }

    pub fn cancel_drag(&mut self) {
        self.drag_start = None;
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.drag_start = None;
    }

    fn circle_from(&self, start: Point, end: Point) -> CircleShape {
        CircleShape {
            cx: start.x,
            cy: start.y,
            r: start.distance_to(end),
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
            stroke_width: self.stroke_width,
        }
    }

    // ===== Export =====

    pub fn export_svg(&self, path: impl AsRef<Path>) -> ExportResult<()> {
        export_svg_with(&self.shapes, self.canvas, path, &self.options)
    }

    pub fn export_pdf(&self, path: impl AsRef<Path>) -> ExportResult<()> {
        export_pdf_with(&self.shapes, self.canvas, path, &self.options)
    }
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(Canvas::REFERENCE)
    }
}
