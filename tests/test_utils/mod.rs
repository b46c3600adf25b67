use cavalier_contours::{
    core::traits::FuzzyEq,
    polyline::PlineSource,
    shape_algorithms::Shape,
};
use static_aabb2d_index::AABB;

/// Fuzzy compare AABB values.
#[allow(dead_code)]
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Net enclosed area of a composite result (boundary areas minus hole
/// areas), independent of contour direction.
#[allow(dead_code)]
pub fn composite_area(composite: &Shape<f64>) -> f64 {
    let boundaries: f64 = composite
        .ccw_plines
        .iter()
        .map(|indexed| indexed.polyline.area().abs())
        .sum();
    let holes: f64 = composite
        .cw_plines
        .iter()
        .map(|indexed| indexed.polyline.area().abs())
        .sum();

    boundaries - holes
}

/// Bounding extents over all contours of a composite result.
#[allow(dead_code)]
pub fn composite_extents(composite: &Shape<f64>) -> AABB<f64> {
    let mut extents: Option<AABB<f64>> = None;
    for indexed in composite.ccw_plines.iter().chain(composite.cw_plines.iter()) {
        let e = indexed
            .polyline
            .extents()
            .expect("contour has extents");
        extents = Some(match extents {
            None => e,
            Some(acc) => AABB::new(
                acc.min_x.min(e.min_x),
                acc.min_y.min(e.min_y),
                acc.max_x.max(e.max_x),
                acc.max_y.max(e.max_y),
            ),
        });
    }

    extents.expect("composite has at least one contour")
}
