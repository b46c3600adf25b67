//! Error types covering configuration, engine, and output failures.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::pipeline::Operation;

/// All failure modes of a slot construction and composition run.
///
/// Empty boolean results are deliberately not represented here: an operation
/// producing zero contours is a valid outcome, distinct from the engine
/// failing on that operation.
#[derive(Debug, Error)]
pub enum Error {
    /// A segment count of zero cannot form a polygon.
    #[error("segment count must be at least 1")]
    SegmentCount,
    /// The circle radius must be positive.
    #[error("circle radius must be positive (got {0})")]
    Radius(f64),
    /// The slot width must be positive.
    #[error("slot width must be positive (got {0})")]
    Width(f64),
    /// The rectangle span (`width - radius`) collapses to zero or negative.
    #[error("circle radius ({radius}) must be less than the slot width ({width})")]
    RadiusExceedsWidth { radius: f64, width: f64 },
    /// The boolean engine rejected an operand or signalled an internal
    /// failure; isolated to the named operation's row.
    #[error("boolean engine failed during {op}: {reason}")]
    Engine { op: Operation, reason: String },
    /// The SVG artifact could not be created or written.
    #[error("unable to write SVG output '{}': {source}", .path.display())]
    SvgWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// One or more operations failed during an otherwise completed run.
    #[error("{failed} boolean operation(s) failed")]
    OperationsFailed { failed: usize },
}
