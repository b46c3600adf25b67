//! SVG page layout and document rendering.

use std::fmt::Write as _;
use std::path::Path;

use cavalier_contours::{
    core::math::Vector2,
    polyline::{PlineSource, Polyline},
};
use log::info;
use svg::{
    node::element::{Group, Polygon, Text},
    Document,
};

use crate::{
    error::Error,
    pipeline::{self, OperationOutcome},
    slot::SlotShapes,
};

const OUTLINE_STYLE: &str = "fill:none;stroke:black;stroke-width:0.2";
const TEXT_STYLE: &str = "fill:black;font-size:1.3mm;";
const RECTANGLE_FILL: &str = "fill:red;fill-opacity:0.5;";
const LEFT_CIRCLE_FILL: &str = "fill:blue;fill-opacity:0.5;";
const RIGHT_CIRCLE_FILL: &str = "fill:green;fill-opacity:0.5;";
const RESULT_FILL: &str = "fill:grey;fill-opacity:0.5;";

/// Fixed page geometry in millimeter units.
#[derive(Debug, Clone, Copy)]
pub struct PageLayout {
    /// Page width.
    pub page_width: f64,
    /// Page height.
    pub page_height: f64,
    /// X position of the slot center.
    pub slot_x: f64,
    /// X position of the row labels.
    pub text_x: f64,
    /// Y position of the input shape band (also the slot center y).
    pub start_y: f64,
    /// Vertical distance between operation rows.
    pub row_step: f64,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width: 100.0,
            page_height: 150.0,
            slot_x: 30.0,
            text_x: 60.0,
            start_y: 15.0,
            row_step: 25.0,
        }
    }
}

impl PageLayout {
    /// Center point the slot geometry is built around.
    pub fn slot_center(&self) -> Vector2<f64> {
        Vector2::new(self.slot_x, self.start_y)
    }
}

/// Everything the presentation layer needs to draw one page; consumed
/// exactly once by [render_document].
pub struct RenderJob<'a> {
    pub shapes: &'a SlotShapes,
    pub outcomes: &'a [OperationOutcome],
    pub layout: PageLayout,
}

/// Builds the SVG document: the overlaid input contours in the top band and
/// one labeled, vertically offset row per non-empty operation result.
///
/// Rows with an empty or failed outcome draw nothing (the console report
/// carries the explicit message) and never affect later rows; the document
/// is assembled fully in memory so the artifact cannot be truncated halfway
/// through a row.
pub fn render_document(job: RenderJob<'_>) -> Document {
    let layout = &job.layout;
    let mut document = Document::new()
        .set("width", format!("{}mm", layout.page_width))
        .set("height", format!("{}mm", layout.page_height))
        .set("viewBox", (0.0, 0.0, layout.page_width, layout.page_height));

    document = document.add(label(layout.text_x, layout.start_y, "Contours"));
    document = document.add(filled_polygon(&job.shapes.rectangle, RECTANGLE_FILL));
    document = document.add(filled_polygon(&job.shapes.left_circle, LEFT_CIRCLE_FILL));
    if let Some(right_circle) = &job.shapes.right_circle {
        document = document.add(filled_polygon(right_circle, RIGHT_CIRCLE_FILL));
    }

    for (row, outcome) in job.outcomes.iter().enumerate() {
        let composite = match &outcome.result {
            Ok(composite) if !pipeline::is_empty(composite) => composite,
            _ => continue,
        };

        let offset = (row as f64 + 1.0) * layout.row_step;
        document = document.add(label(
            layout.text_x,
            layout.start_y + offset,
            outcome.op.name(),
        ));
        for contour in pipeline::contours(composite) {
            if contour.vertex_count() == 0 {
                continue;
            }
            let translated = Group::new()
                .set("transform", format!("translate(0,{offset})"))
                .add(filled_polygon(contour, RESULT_FILL));
            document = document.add(translated);
        }
    }

    document
}

/// Writes the document to `path`. Failure to create or write the output
/// artifact is fatal to the run.
pub fn save_document(path: &Path, document: &Document) -> Result<(), Error> {
    svg::save(path, document).map_err(|source| Error::SvgWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote SVG artifact to {}", path.display());

    Ok(())
}

fn label(x: f64, y: f64, content: &str) -> Text {
    Text::new(content)
        .set("x", x)
        .set("y", y)
        .set("style", TEXT_STYLE)
}

fn filled_polygon(contour: &Polyline<f64>, fill: &str) -> Polygon {
    Polygon::new()
        .set("points", polygon_points(contour))
        .set("style", format!("{OUTLINE_STYLE};{fill}"))
}

/// Coordinate list with the renderer's 3-decimal precision.
fn polygon_points(contour: &Polyline<f64>) -> String {
    let mut points = String::new();
    for (i, vertex) in contour.iter_vertexes().enumerate() {
        if i > 0 {
            points.push(' ');
        }
        let _ = write!(points, "{:.3},{:.3}", vertex.x, vertex.y);
    }

    points
}
