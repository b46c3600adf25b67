//! Circle approximation as a closed polygon contour.

use std::f64::consts::PI;

use cavalier_contours::{
    core::math::Vector2,
    polyline::{PlineCreation, PlineSourceMut, Polyline},
};

/// Builds a closed contour approximating the circle at `center` with the
/// given `radius`.
///
/// `segments` is the number of segments per quarter circle, so the returned
/// polyline always has exactly `4 * segments` vertexes. The contour starts
/// at the topmost point of the circle (minimum y in page coordinates, where
/// y grows downward) and proceeds with increasing x first. Every vertex lies
/// exactly on the circle, so the result is a regular inscribed polygon with
/// radial deviation bounded by `radius * (1 - cos(PI / (4 * segments)))`,
/// decreasing monotonically as `segments` grows.
///
/// Identical inputs produce bit-identical vertexes. Zero `segments` and
/// non-positive `radius` are rejected by configuration validation before
/// this function is reached.
pub fn circle_contour(center: Vector2<f64>, radius: f64, segments: u32) -> Polyline<f64> {
    debug_assert!(segments >= 1, "segments must be at least 1");
    debug_assert!(radius > 0.0, "radius must be positive");

    let vertex_count = 4 * segments as usize;
    let step = PI / (2.0 * f64::from(segments));
    let mut contour = Polyline::with_capacity(vertex_count, true);
    for j in 0..vertex_count {
        let angle = step * j as f64;
        contour.add(
            center.x + radius * angle.sin(),
            center.y - radius * angle.cos(),
            0.0,
        );
    }

    contour
}
