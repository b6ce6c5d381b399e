//! PDF exporter
//!
//! Draws the shape list natively with pdf-writer onto one page. The canvas is
//! scaled to fit the page while preserving aspect ratio, and flipped
//! vertically because PDF's origin is the bottom-left corner.

use std::path::Path;

use log::{debug, info};
use pdf_writer::{Finish, Pdf, Rect as PdfRect, Ref, TextStr};

use crate::canvas::{PageSurface, PdfCanvas};
use crate::error::ExportResult;
use crate::geometry::PageFit;
use crate::io_utils::write_output;
use crate::options::ExportOptions;
use crate::shapes::ShapeRecord;
use crate::types::{Canvas, Color, Point};

const PRODUCER: &str = "formline_export";

/// Render `shapes` and write a single-page PDF to `path` using default options.
pub fn export_pdf(
    shapes: &[ShapeRecord],
    canvas_width: f64,
    canvas_height: f64,
    path: impl AsRef<Path>,
) -> ExportResult<()> {
    let canvas = Canvas::new(canvas_width, canvas_height)?;
    export_pdf_with(shapes, canvas, path, &ExportOptions::default())
}

pub fn export_pdf_with(
    shapes: &[ShapeRecord],
    canvas: Canvas,
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> ExportResult<()> {
    let path = path.as_ref();
    let bytes = render_pdf(shapes, canvas, options)?;
    write_output(path, &bytes)?;
    info!("PDF saved to: {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Build the complete PDF document in memory.
pub fn render_pdf(
    shapes: &[ShapeRecord],
    canvas: Canvas,
    options: &ExportOptions,
) -> ExportResult<Vec<u8>> {
    options.validate()?;
    let fit = PageFit::new(canvas, options.page_size);
    debug!(
        "Rendering {} shapes to PDF: canvas {}x{}, page {}x{} pt, scale {:.4}",
        shapes.len(),
        canvas.width(),
        canvas.height(),
        fit.page.width,
        fit.page.height,
        fit.scale
    );

    let mut page_canvas = PdfCanvas::new();
    draw_shapes(&mut page_canvas, shapes, &fit, options)?;
    let content_bytes = page_canvas.finish();

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let content_id = Ref::new(4);
    let info_id = Ref::new(5);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(PdfRect::new(
        0.0,
        0.0,
        fit.page.width as f32,
        fit.page.height as f32,
    ));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.finish();

    pdf.stream(content_id, &content_bytes);
    pdf.document_info(info_id).producer(TextStr(PRODUCER));

    Ok(pdf.finish())
}

/// Paint the background and every known shape, in order, onto `surface`.
///
/// Colors are parsed before anything is drawn for a shape, so a malformed
/// color aborts the export with an error.
pub fn draw_shapes<S: PageSurface>(
    surface: &mut S,
    shapes: &[ShapeRecord],
    fit: &PageFit,
    options: &ExportOptions,
) -> ExportResult<()> {
    surface.fill_page(fit.page.width, fit.page.height, options.background_color()?);

    for (index, shape) in shapes.iter().enumerate() {
        match shape {
            ShapeRecord::Circle(circle) => {
                let fill = Color::from_hex(&circle.fill)?;
                let stroke = Color::from_hex(&circle.stroke)?;

                // Clamp in canvas units, then scale
                let radius = fit.scale_length(circle.render_radius(options.min_radius));
                let center = fit.to_page(Point::new(circle.cx, circle.cy));
                let stroke_width =
                    fit.stroke_width(circle.stroke_width, options.min_pdf_stroke_width);

                surface.draw_circle(center, radius, fill, stroke, stroke_width);
            }
            ShapeRecord::Unknown => {
                debug!("Skipping unknown shape at index {}", index);
            }
        }
    }

    Ok(())
}
