//! Slot geometry assembly from a validated configuration.

use cavalier_contours::{
    core::math::Vector2,
    polyline::{PlineCreation, PlineSourceMut, Polyline},
};

use crate::{circle::circle_contour, config::SlotConfig, error::Error};

/// The named input contours of the slot, in pipeline fold order: rectangle
/// first, then the left circle, then the optional right circle.
///
/// Each role maps to exactly one contour fixed at construction time; nothing
/// mutates them afterwards. A disabled right circle is `None`, never an
/// empty placeholder.
#[derive(Debug, Clone)]
pub struct SlotShapes {
    /// Connecting rectangle between the circle centers.
    pub rectangle: Polyline<f64>,
    /// Circle at the left end of the slot.
    pub left_circle: Polyline<f64>,
    /// Optional circle at the right end of the slot.
    pub right_circle: Option<Polyline<f64>>,
}

impl SlotShapes {
    /// Builds the slot contours around `center`.
    ///
    /// The circle centers sit `(width - radius) / 2` to each side of
    /// `center`, and the rectangle half-height equals the radius so its long
    /// edges meet the circles tangentially. Corners are inserted top-left,
    /// top-right, bottom-right, bottom-left, giving the same traversal
    /// direction (counter-clockwise by signed area) as the circle contours.
    ///
    /// The configuration is validated before any contour is constructed.
    pub fn build(config: &SlotConfig, center: Vector2<f64>) -> Result<Self, Error> {
        config.validate()?;

        let half_span = (config.width - config.radius) / 2.0;
        let left = Vector2::new(center.x - half_span, center.y);
        let right = Vector2::new(center.x + half_span, center.y);

        let mut rectangle = Polyline::with_capacity(4, true);
        rectangle.add(left.x, left.y - config.radius, 0.0);
        rectangle.add(right.x, right.y - config.radius, 0.0);
        rectangle.add(right.x, right.y + config.radius, 0.0);
        rectangle.add(left.x, left.y + config.radius, 0.0);

        let left_circle = circle_contour(left, config.radius, config.segments);
        let right_circle = config
            .add_right_circle
            .then(|| circle_contour(right, config.radius, config.segments));

        Ok(Self {
            rectangle,
            left_circle,
            right_circle,
        })
    }
}
