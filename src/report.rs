//! Console report of input contours and operation results.
//!
//! The report is assembled as a string so reruns with the same configuration
//! produce byte-identical output.

use std::fmt::Write as _;

use cavalier_contours::polyline::{PlineSource, Polyline};

use crate::{
    pipeline::{self, OperationOutcome},
    slot::SlotShapes,
};

/// Formats the point list of a single contour.
pub fn contour_points(contour: &Polyline<f64>) -> String {
    let mut out = String::new();
    for (i, vertex) in contour.iter_vertexes().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "({}, {})", vertex.x, vertex.y);
    }

    out
}

/// Report section listing every input contour.
pub fn input_shapes_report(shapes: &SlotShapes) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n-- Rectangle Contour --");
    let _ = writeln!(out, "{}", contour_points(&shapes.rectangle));
    let _ = writeln!(out, "\n-- Left Circle Contour --");
    let _ = writeln!(out, "{}", contour_points(&shapes.left_circle));
    if let Some(right_circle) = &shapes.right_circle {
        let _ = writeln!(out, "\n-- Right Circle Contour --");
        let _ = writeln!(out, "{}", contour_points(right_circle));
    }

    out
}

/// Report section listing each operation's result structure, one line per
/// contour, or the explicit failed-or-empty line when an operation produced
/// no contours.
pub fn outcomes_report(outcomes: &[OperationOutcome]) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        let _ = writeln!(out, "\n== {} Polygon ==", outcome.op);
        match &outcome.result {
            Ok(composite) if !pipeline::is_empty(composite) => {
                for contour in pipeline::contours(composite) {
                    let _ = writeln!(out, "{}", contour_points(contour));
                }
            }
            _ => {
                let _ = writeln!(
                    out,
                    "{} operation failed OR the result was empty...",
                    outcome.op
                );
            }
        }
    }

    out
}
