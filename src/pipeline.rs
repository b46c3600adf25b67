//! Boolean operation pipeline folding over the slot contours.

use std::{fmt, iter};

use cavalier_contours::{
    polyline::{BooleanOp, PlineSource, Polyline},
    shape_algorithms::Shape,
};
use log::debug;

use crate::{error::Error, slot::SlotShapes};

/// Boolean set operation applied across the slot contours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Set union of the enclosed areas.
    Union,
    /// Set intersection of the enclosed areas.
    Intersection,
    /// Area of the first operand minus the second.
    Difference,
    /// Symmetric difference of the enclosed areas.
    Xor,
}

impl Operation {
    /// Fixed order the pipeline evaluates operations in and the page
    /// presents them in. Difference and XOR are order sensitive, so this
    /// order (together with the rectangle-first fold in [fold_operation]) is
    /// part of the contract, not an accident of iteration.
    pub const ALL: [Operation; 4] = [
        Operation::Union,
        Operation::Intersection,
        Operation::Difference,
        Operation::Xor,
    ];

    /// Label used for row headings and the console report.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Union => "Union",
            Operation::Intersection => "Intersection",
            Operation::Difference => "Difference",
            Operation::Xor => "XOR",
        }
    }

    /// Corresponding engine operation.
    pub fn engine_op(self) -> BooleanOp {
        match self {
            Operation::Union => BooleanOp::Or,
            Operation::Intersection => BooleanOp::And,
            Operation::Difference => BooleanOp::Not,
            Operation::Xor => BooleanOp::Xor,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of folding one operation over the slot contours.
///
/// An empty shape is a valid success (nothing to draw for that row),
/// distinct from an engine failure carried in `Err`.
pub struct OperationOutcome {
    pub op: Operation,
    pub result: Result<Shape<f64>, Error>,
}

/// Runs every operation in [Operation::ALL] order.
///
/// Failures are isolated to their outcome so the remaining operations still
/// run and render.
pub fn run_operations(shapes: &SlotShapes) -> Vec<OperationOutcome> {
    Operation::ALL
        .iter()
        .map(|&op| {
            let result = fold_operation(op, shapes);
            if let Ok(composite) = &result {
                debug!("{} produced {} contour(s)", op, contour_count(composite));
            }
            OperationOutcome { op, result }
        })
        .collect()
}

/// Folds `op` left to right over the ordered contour list: rectangle, left
/// circle, then the right circle when present.
///
/// A disabled right circle is excluded from the fold entirely; it never
/// participates as an empty stand-in operand.
pub fn fold_operation(op: Operation, shapes: &SlotShapes) -> Result<Shape<f64>, Error> {
    let mut composite = Shape::from_plines(iter::once(shapes.rectangle.clone()));
    composite = combine(composite, op, &shapes.left_circle)?;
    if let Some(right_circle) = &shapes.right_circle {
        composite = combine(composite, op, right_circle)?;
    }

    Ok(composite)
}

/// Applies one engine call: `composite op operand`.
///
/// The operand is checked against the engine's input contract (closed, at
/// least 3 vertexes) and wrapped in a fresh shape built from a clone, so
/// input contours are never mutated or shared with the engine. An empty
/// `composite` is resolved here instead of being handed to the engine: the
/// empty set is the identity for Union/XOR but absorbing for
/// Intersection/Difference, so it cannot be treated as a uniform no-op
/// operand.
pub fn combine(
    composite: Shape<f64>,
    op: Operation,
    operand: &Polyline<f64>,
) -> Result<Shape<f64>, Error> {
    if !operand.is_closed() || operand.vertex_count() < 3 {
        return Err(Error::Engine {
            op,
            reason: format!(
                "operand contour must be closed with at least 3 vertexes (closed: {}, vertexes: {})",
                operand.is_closed(),
                operand.vertex_count()
            ),
        });
    }

    if is_empty(&composite) {
        let resolved = match op {
            Operation::Union | Operation::Xor => {
                Shape::from_plines(iter::once(operand.clone()))
            }
            Operation::Intersection | Operation::Difference => Shape::empty(),
        };
        return Ok(resolved);
    }

    let operand = Shape::from_plines(iter::once(operand.clone()));
    Ok(composite.boolean(&operand, op.engine_op()))
}

/// True when the composite holds no contours at all.
pub fn is_empty(composite: &Shape<f64>) -> bool {
    composite.ccw_plines.is_empty() && composite.cw_plines.is_empty()
}

/// Number of contours in the composite (boundaries plus holes).
pub fn contour_count(composite: &Shape<f64>) -> usize {
    composite.ccw_plines.len() + composite.cw_plines.len()
}

/// Iterates all contours of the composite, boundaries first, then holes.
pub fn contours(composite: &Shape<f64>) -> impl Iterator<Item = &Polyline<f64>> {
    composite
        .ccw_plines
        .iter()
        .chain(composite.cw_plines.iter())
        .map(|indexed| &indexed.polyline)
}
