//! Formline drawing studio export core
//!
//! Shape records produced by the interactive canvas and two independent
//! renderers that reproduce them: a 1:1 SVG document and a single-page,
//! Letter-landscape PDF.

mod canvas;
mod error;
mod geometry;
mod io_utils;
mod options;
mod pdf_export;
mod session;
mod shapes;
mod svg_writer;
mod types;

pub use canvas::{PageSurface, PdfCanvas};
pub use error::{ExportError, ExportResult};
pub use geometry::PageFit;
pub use options::ExportOptions;
pub use pdf_export::{draw_shapes, export_pdf, export_pdf_with, render_pdf};
pub use session::{DrawingSession, MIN_GESTURE_RADIUS};
pub use shapes::{CircleShape, ShapeRecord};
pub use svg_writer::{export_svg, export_svg_with, render_svg};
pub use types::{Canvas, Color, PageSize, Point};
