//! Two-level nested interval: an inner full-length timeline inside an outer clip.
//!
//! Both levels are plain values. The evaluation helpers follow the usual media-timing
//! hierarchy (`local = (parent - begin) * speed + offset`, then repeat/reverse and
//! fill), so a composed clip can be checked without a live compositor.

use serde::{Deserialize, Serialize};

/// Tolerance for treating a fractional pass count as whole.
const PASS_EPSILON: f64 = 1e-9;

/// How a clip behaves outside its active interval.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FillMode {
    /// Not in effect before begin or after the end.
    #[default]
    Removed,
    Forwards,
    Backwards,
    Both,
}

impl FillMode {
    #[inline]
    pub fn fills_forwards(self) -> bool {
        matches!(self, FillMode::Forwards | FillMode::Both)
    }

    #[inline]
    pub fn fills_backwards(self) -> bool {
        matches!(self, FillMode::Backwards | FillMode::Both)
    }
}

/// Inner timeline spanning the whole animation.
///
/// `time_offset` selects which animation time lines up with the clip's time zero;
/// a negative `speed` runs the whole animation backwards.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimelineSpec {
    pub duration: f64,
    pub speed: f64,
    pub time_offset: f64,
}

impl TimelineSpec {
    /// Animation time (seconds, within `[0, duration]`) at a clip-relative time.
    pub fn local_time(&self, parent_time: f64) -> f64 {
        let t = parent_time * self.speed + self.time_offset;
        t.clamp(0.0, self.duration.max(0.0))
    }
}

/// Outer wrapper: clips the inner timeline to the requested segment and applies
/// repeat, autoreverse, offset and fill.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClipSpec {
    /// Length of one forward pass through the requested segment.
    pub duration: f64,
    pub autoreverses: bool,
    pub repeat_count: f32,
    pub time_offset: f64,
    /// Start of the clip in the target's local time space.
    pub begin_time: f64,
    pub fill_mode: FillMode,
    pub removed_on_completion: bool,
    pub child: TimelineSpec,
}

impl ClipSpec {
    /// Repeat count as applied: zero, negative and NaN counts play a single pass.
    #[inline]
    pub fn effective_repeat_count(&self) -> f64 {
        if self.repeat_count > 0.0 {
            self.repeat_count as f64
        } else {
            1.0
        }
    }

    /// Number of one-directional passes through the segment (reverse passes included).
    #[inline]
    pub fn pass_count(&self) -> f64 {
        let passes = if self.autoreverses { 2.0 } else { 1.0 };
        self.effective_repeat_count() * passes
    }

    /// Total time the clip is active, including repeats and reverse passes.
    pub fn active_duration(&self) -> f64 {
        self.duration.max(0.0) * self.pass_count()
    }

    /// Clip-relative time (within `[0, duration]`) at a time in the target's local
    /// space, or `None` when the clip has no effect there.
    ///
    /// `time_offset` shifts the starting point inside the active interval and wraps
    /// around it, so the clip still runs for the full active duration.
    pub fn local_time(&self, parent_time: f64) -> Option<f64> {
        let elapsed = parent_time - self.begin_time;
        if elapsed < 0.0 {
            return self
                .fill_mode
                .fills_backwards()
                .then(|| self.position(self.wrap_active(self.time_offset)));
        }
        let active = self.active_duration();
        if elapsed >= active {
            if self.removed_on_completion || !self.fill_mode.fills_forwards() {
                return None;
            }
            return Some(self.final_position());
        }
        Some(self.position(self.wrap_active(elapsed + self.time_offset)))
    }

    /// Animation time shown at a time in the target's local space.
    pub fn child_time(&self, parent_time: f64) -> Option<f64> {
        self.local_time(parent_time)
            .map(|t| self.child.local_time(t))
    }

    /// Fold an active time into `[0, active)`; infinite or empty intervals pass through.
    fn wrap_active(&self, t: f64) -> f64 {
        let active = self.active_duration();
        if !active.is_finite() || active <= 0.0 {
            return t.max(0.0);
        }
        let m = t % active;
        if m < 0.0 {
            m + active
        } else {
            m
        }
    }

    /// Position inside a pass for an active time `t` in `[0, active)`.
    fn position(&self, t: f64) -> f64 {
        let d = self.duration;
        if d <= 0.0 {
            return 0.0;
        }
        let pass = (t / d).floor();
        // Rounding just below the end of the interval can land past the last pass.
        if pass + 1.0 > self.pass_count().ceil() {
            return self.final_position();
        }
        let within = (t - pass * d).clamp(0.0, d);
        self.orient(pass, within)
    }

    /// Position held once the active interval has elapsed.
    ///
    /// Derived from the pass count rather than `active / duration`, which is not exact
    /// for durations without a binary representation.
    fn final_position(&self) -> f64 {
        let d = self.duration;
        if d <= 0.0 {
            return 0.0;
        }
        let n = self.pass_count();
        let whole = n.floor();
        let frac = n - whole;
        let (pass, within) = if frac <= PASS_EPSILON * n.max(1.0) && whole >= 1.0 {
            (whole - 1.0, d)
        } else {
            (whole, (frac * d).clamp(0.0, d))
        };
        self.orient(pass, within)
    }

    #[inline]
    fn orient(&self, pass: f64, within: f64) -> f64 {
        if self.autoreverses && pass % 2.0 == 1.0 {
            self.duration - within
        } else {
            within
        }
    }
}
