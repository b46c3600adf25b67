//! Builds a rounded slot from a rectangle and one or two polygonal circle
//! approximations, folds the four boolean set operations (Union,
//! Intersection, Difference, XOR) across the shapes with the
//! [`cavalier_contours`] engine, and renders the inputs plus each result to
//! a single SVG page.
//!
//! The pipeline is strictly sequential: configuration validation, shape
//! assembly, one left-to-right fold per operation, console report, SVG
//! write. Each operation's fold is independent of the others; they are
//! evaluated in the fixed [pipeline::Operation::ALL] order the page rows
//! depend on.

pub mod circle;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod slot;

use std::path::Path;

use log::error;

pub use crate::config::SlotConfig;
pub use crate::error::Error;
pub use crate::pipeline::{Operation, OperationOutcome};
pub use crate::render::{PageLayout, RenderJob};
pub use crate::slot::SlotShapes;

/// Runs the whole pipeline: build the slot shapes, fold every boolean
/// operation across them, print the console report, and write the SVG
/// artifact to `output`.
///
/// Configuration and output errors abort immediately. Engine failures are
/// isolated per operation so every remaining row still renders and the
/// artifact is always written; once the run is otherwise complete they are
/// re-raised as a fatal [Error::OperationsFailed].
pub fn run(config: &SlotConfig, output: &Path) -> Result<(), Error> {
    let layout = PageLayout::default();
    let shapes = SlotShapes::build(config, layout.slot_center())?;
    print!("{}", report::input_shapes_report(&shapes));

    let outcomes = pipeline::run_operations(&shapes);
    print!("{}", report::outcomes_report(&outcomes));
    for outcome in &outcomes {
        if let Err(err) = &outcome.result {
            error!("{} operation failed: {err}", outcome.op);
        }
    }

    let document = render::render_document(RenderJob {
        shapes: &shapes,
        outcomes: &outcomes,
        layout,
    });
    render::save_document(output, &document)?;

    let failed = outcomes
        .iter()
        .filter(|outcome| outcome.result.is_err())
        .count();
    if failed > 0 {
        return Err(Error::OperationsFailed { failed });
    }

    Ok(())
}
