mod test_utils;

use std::iter;

use cavalier_contours::{
    assert_fuzzy_eq,
    core::{math::Vector2, traits::FuzzyEq},
    polyline::{PlineSource, PlineSourceMut, Polyline},
    shape_algorithms::Shape,
};
use slotclip::{
    circle::circle_contour,
    config::SlotConfig,
    error::Error,
    pipeline::{self, combine, run_operations, Operation},
    slot::SlotShapes,
};
use test_utils::{composite_area, composite_extents};

fn single(contour: &Polyline<f64>) -> Shape<f64> {
    Shape::from_plines(iter::once(contour.clone()))
}

fn default_shapes() -> SlotShapes {
    SlotShapes::build(&SlotConfig::default(), Vector2::new(30.0, 15.0))
        .expect("default config is valid")
}

#[test]
fn xor_with_self_is_empty() {
    let circle = circle_contour(Vector2::new(0.0, 0.0), 5.0, 4);
    let result = combine(single(&circle), Operation::Xor, &circle).unwrap();
    assert!(pipeline::is_empty(&result));
}

#[test]
fn intersection_of_disjoint_circles_is_empty() {
    // centers 20 apart, radius 5 => no overlap
    let left = circle_contour(Vector2::new(0.0, 0.0), 5.0, 4);
    let right = circle_contour(Vector2::new(20.0, 0.0), 5.0, 4);
    let result = combine(single(&left), Operation::Intersection, &right).unwrap();
    assert!(pipeline::is_empty(&result));
}

#[test]
fn union_of_disjoint_shapes_keeps_both_areas() {
    let left = circle_contour(Vector2::new(0.0, 0.0), 5.0, 4);
    let right = circle_contour(Vector2::new(20.0, 0.0), 5.0, 4);
    let result = combine(single(&left), Operation::Union, &right).unwrap();

    assert_eq!(pipeline::contour_count(&result), 2);
    assert_fuzzy_eq!(
        composite_area(&result),
        left.area().abs() + right.area().abs(),
        1e-9
    );
}

#[test]
fn difference_of_disjoint_shapes_keeps_first_area() {
    let left = circle_contour(Vector2::new(0.0, 0.0), 5.0, 4);
    let right = circle_contour(Vector2::new(20.0, 0.0), 5.0, 4);
    let result = combine(single(&left), Operation::Difference, &right).unwrap();

    assert_eq!(pipeline::contour_count(&result), 1);
    assert_fuzzy_eq!(composite_area(&result), left.area().abs(), 1e-9);
}

#[test]
fn empty_composite_resolves_per_operation() {
    let circle = circle_contour(Vector2::new(0.0, 0.0), 5.0, 4);

    // identity operand for union and xor
    for op in [Operation::Union, Operation::Xor] {
        let result = combine(Shape::empty(), op, &circle).unwrap();
        assert_eq!(pipeline::contour_count(&result), 1);
        assert_fuzzy_eq!(composite_area(&result), circle.area().abs(), 1e-9);
    }

    // absorbing for intersection and difference
    for op in [Operation::Intersection, Operation::Difference] {
        let result = combine(Shape::empty(), op, &circle).unwrap();
        assert!(pipeline::is_empty(&result));
    }
}

#[test]
fn open_operand_rejected_as_engine_failure() {
    let shapes = default_shapes();
    let mut open = Polyline::new();
    open.add(0.0, 0.0, 0.0);
    open.add(10.0, 0.0, 0.0);
    open.add(10.0, 10.0, 0.0);

    let result = combine(single(&shapes.rectangle), Operation::Union, &open);
    assert!(matches!(
        result,
        Err(Error::Engine {
            op: Operation::Union,
            ..
        })
    ));
}

#[test]
fn operations_run_in_fixed_order() {
    let outcomes = run_operations(&default_shapes());
    let order: Vec<Operation> = outcomes.iter().map(|outcome| outcome.op).collect();
    assert_eq!(
        order,
        [
            Operation::Union,
            Operation::Intersection,
            Operation::Difference,
            Operation::Xor
        ]
    );
}

#[test]
fn slot_union_yields_single_enclosing_contour() {
    // segments=1, radius=8, no right circle: the 4 vertex circle is tangent
    // to the rectangle's short edge, so the union encloses both shapes in
    // one contour
    let shapes = default_shapes();
    let outcomes = run_operations(&shapes);

    let union = outcomes[0].result.as_ref().expect("union succeeds");
    assert!(!pipeline::is_empty(union));
    assert_eq!(pipeline::contour_count(union), 1);

    // strictly larger than the rectangle alone, since the left half of the
    // circle pokes out of it
    let rectangle_area = shapes.rectangle.area().abs();
    assert!(composite_area(union) > rectangle_area);
}

#[test]
fn slot_difference_consumes_both_end_caps() {
    // segments=4, radius=5, right circle enabled: the rectangle loses a
    // half circle at each short edge but keeps its tangent corners
    let config = SlotConfig {
        segments: 4,
        radius: 5.0,
        add_right_circle: true,
        ..Default::default()
    };
    let shapes = SlotShapes::build(&config, Vector2::new(30.0, 15.0)).unwrap();
    let outcomes = run_operations(&shapes);

    let difference = outcomes[2].result.as_ref().expect("difference succeeds");
    assert!(!pipeline::is_empty(difference));

    let rectangle_extents = shapes.rectangle.extents().unwrap();
    let result_extents = composite_extents(difference);
    let eps = 1e-9;
    assert!(result_extents.min_x >= rectangle_extents.min_x - eps);
    assert!(result_extents.min_y >= rectangle_extents.min_y - eps);
    assert!(result_extents.max_x <= rectangle_extents.max_x + eps);
    assert!(result_extents.max_y <= rectangle_extents.max_y + eps);

    let rectangle_area = shapes.rectangle.area().abs();
    let result_area = composite_area(difference);
    assert!(result_area > 0.0);
    assert!(result_area < rectangle_area);
}

#[test]
fn fold_uses_two_operands_without_right_circle() {
    // difference with only the left circle must keep the area the right
    // circle would otherwise have removed
    let two_operands = SlotConfig {
        segments: 4,
        radius: 5.0,
        ..Default::default()
    };
    let three_operands = SlotConfig {
        add_right_circle: true,
        ..two_operands.clone()
    };
    let center = Vector2::new(30.0, 15.0);

    let shapes2 = SlotShapes::build(&two_operands, center).unwrap();
    let shapes3 = SlotShapes::build(&three_operands, center).unwrap();

    let diff2 = pipeline::fold_operation(Operation::Difference, &shapes2).unwrap();
    let diff3 = pipeline::fold_operation(Operation::Difference, &shapes3).unwrap();
    assert!(composite_area(&diff2) > composite_area(&diff3));
}
