//! Frame → physical time mapping.

use crate::animation::Animation;

/// Maps an animation's frame coordinates onto seconds.
///
/// Pure arithmetic over the animation's frame-rate scale: no clamping, any real input.
#[derive(Clone, Copy)]
pub struct TimeMapper<'a> {
    animation: &'a dyn Animation,
}

impl<'a> TimeMapper<'a> {
    pub fn new(animation: &'a dyn Animation) -> Self {
        Self { animation }
    }

    /// Absolute time offset of `frame` in the animation's timeline.
    #[inline]
    pub fn time_for_frame(&self, frame: f64) -> f64 {
        self.animation.time_for_frame(frame)
    }

    /// Elapsed time covered by a signed frame distance (always >= 0).
    ///
    /// Measured against frame zero so that a timeline whose in point is not zero
    /// does not skew the distance.
    #[inline]
    pub fn duration_for_frames(&self, distance: f64) -> f64 {
        (self.animation.time_for_frame(distance) - self.animation.time_for_frame(0.0)).abs()
    }

    #[inline]
    pub fn full_duration(&self) -> f64 {
        self.animation.full_duration()
    }
}

impl std::fmt::Debug for TimeMapper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeMapper")
            .field("full_duration", &self.animation.full_duration())
            .finish()
    }
}
