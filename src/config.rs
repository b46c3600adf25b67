//! Run configuration for slot construction.

use crate::error::Error;

/// Configuration for building the slot shapes, immutable for the run once
/// validated.
#[derive(Debug, Clone)]
pub struct SlotConfig {
    /// Number of segments per quarter circle used by the circle
    /// approximation.
    pub segments: u32,
    /// Radius of the circles at the ends of the slot.
    pub radius: f64,
    /// Overall width of the slot (assumes the right circle is drawn).
    pub width: f64,
    /// Add an additional circle on the right side of the rectangle.
    pub add_right_circle: bool,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            segments: 1,
            radius: 8.0,
            width: 20.0,
            add_right_circle: false,
        }
    }
}

impl SlotConfig {
    /// Checks all fields, returning the first violation found.
    ///
    /// Invalid values are rejected rather than clamped so a bad
    /// configuration is never silently drawn.
    pub fn validate(&self) -> Result<(), Error> {
        if self.segments == 0 {
            return Err(Error::SegmentCount);
        }
        if !(self.radius > 0.0) {
            return Err(Error::Radius(self.radius));
        }
        if !(self.width > 0.0) {
            return Err(Error::Width(self.width));
        }
        if self.radius >= self.width {
            return Err(Error::RadiusExceedsWidth {
                radius: self.radius,
                width: self.width,
            });
        }

        Ok(())
    }
}
