//! SVG exporter
//!
//! SVG user units equal canvas pixels and both spaces are y-down, so shapes
//! are written with their canvas coordinates unchanged.

use std::path::Path;

use log::{debug, info};
use svg::node::element::{Circle, Rectangle};
use svg::Document;

use crate::error::ExportResult;
use crate::io_utils::write_output;
use crate::options::ExportOptions;
use crate::shapes::{CircleShape, ShapeRecord};
use crate::types::Canvas;

/// Write `shapes` as an SVG document to `path` using default options.
pub fn export_svg(
    shapes: &[ShapeRecord],
    canvas_width: f64,
    canvas_height: f64,
    path: impl AsRef<Path>,
) -> ExportResult<()> {
    let canvas = Canvas::new(canvas_width, canvas_height)?;
    export_svg_with(shapes, canvas, path, &ExportOptions::default())
}

pub fn export_svg_with(
    shapes: &[ShapeRecord],
    canvas: Canvas,
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> ExportResult<()> {
    let path = path.as_ref();
    let document = render_svg(shapes, canvas, options)?;
    write_output(path, document.as_bytes())?;
    info!("SVG saved to: {} ({} bytes)", path.display(), document.len());
    Ok(())
}

/// Build the SVG document text: background rectangle, then one element per shape.
///
/// Colors are copied into presentation attributes as given.
pub fn render_svg(
    shapes: &[ShapeRecord],
    canvas: Canvas,
    options: &ExportOptions,
) -> ExportResult<String> {
    options.validate()?;
    let (width, height) = (canvas.width(), canvas.height());

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", options.background.as_str());

    let mut document = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
        .add(background);

    let mut written = 0usize;
    for (index, shape) in shapes.iter().enumerate() {
        match shape {
            ShapeRecord::Circle(circle) => {
                document = document.add(circle_element(circle, options.min_radius));
                written += 1;
            }
            ShapeRecord::Unknown => {
                debug!("Skipping unknown shape at index {}", index);
            }
        }
    }

    debug!(
        "Rendered SVG {}x{} with {} of {} shapes",
        width,
        height,
        written,
        shapes.len()
    );

    Ok(document.to_string())
}

fn circle_element(circle: &CircleShape, min_radius: f64) -> Circle {
    Circle::new()
        .set("cx", circle.cx)
        .set("cy", circle.cy)
        .set("r", circle.render_radius(min_radius))
        .set("fill", circle.fill.as_str())
        .set("stroke", circle.stroke.as_str())
        .set("stroke-width", circle.stroke_width)
}
