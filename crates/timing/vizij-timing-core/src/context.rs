//! Per-request playback context: which animation, which frames, which timing.

use serde::{Deserialize, Serialize};

use crate::animation::{Animation, AnimationInfo};
use crate::timing::TimingConfiguration;

/// Requested sub-range in absolute frames. `end < start` plays backwards.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct FrameRange {
    pub start: f64,
    pub end: f64,
}

impl FrameRange {
    #[inline]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The animation's whole authored range, played forward.
    pub fn full(animation: &AnimationInfo) -> Self {
        Self::new(animation.in_frame, animation.out_frame)
    }

    /// Range between two normalized progress values (0 = in point, 1 = out point).
    pub fn from_progress(animation: &AnimationInfo, from: f64, to: f64) -> Self {
        Self::new(
            animation.frame_for_progress(from),
            animation.frame_for_progress(to),
        )
    }

    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }

    /// Signed frame distance from start to end.
    #[inline]
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }
}

/// Everything needed to time one playback of one animation on a node.
///
/// Built fresh per request and consumed by [`crate::Composer`].
#[derive(Clone, Copy)]
pub struct LayerAnimationContext<'a> {
    pub animation: &'a dyn Animation,
    pub range: FrameRange,
    pub timing: TimingConfiguration,
}

impl<'a> LayerAnimationContext<'a> {
    pub fn new(animation: &'a dyn Animation, range: FrameRange, timing: TimingConfiguration) -> Self {
        Self {
            animation,
            range,
            timing,
        }
    }
}

impl std::fmt::Debug for LayerAnimationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerAnimationContext")
            .field("full_duration", &self.animation.full_duration())
            .field("range", &self.range)
            .field("timing", &self.timing)
            .finish()
    }
}
