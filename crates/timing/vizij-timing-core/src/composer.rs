//! Composer: turns a playback request into a nested clip and attaches it.
//!
//! Steps:
//! - inner timeline spans the full animation (keyframes are interpolated in full-timeline
//!   coordinates) and runs at speed -1 when the range is reversed;
//! - inner offset lines the requested start frame up with clip time zero;
//! - outer clip lasts one pass through the requested range and carries the repeat,
//!   autoreverse and offset options, filling both ways and never removing itself;
//! - outer begin time follows [`BeginTimePolicy`](crate::BeginTimePolicy).

use crate::backend::{MediaClock, TimedAnimation, TimingTarget};
use crate::config::Config;
use crate::context::LayerAnimationContext;
use crate::interval::{ClipSpec, FillMode, TimelineSpec};
use crate::property::PropertyAnimation;
use crate::time_map::TimeMapper;

#[derive(Debug, Clone, Default)]
pub struct Composer {
    cfg: Config,
}

impl Composer {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Inner timeline for a request: full duration, direction from the frame order,
    /// offset to the start frame.
    pub fn timeline(ctx: &LayerAnimationContext<'_>) -> TimelineSpec {
        let map = TimeMapper::new(ctx.animation);
        TimelineSpec {
            duration: map.full_duration(),
            speed: if ctx.range.is_reversed() { -1.0 } else { 1.0 },
            time_offset: map.time_for_frame(ctx.range.start),
        }
    }

    /// Build the nested clip for `ctx`, beginning relative to `now` (target-local time).
    pub fn compose(&self, ctx: &LayerAnimationContext<'_>, now: f64) -> ClipSpec {
        let map = TimeMapper::new(ctx.animation);
        let duration = map.duration_for_frames(ctx.range.span());
        if duration == 0.0 && self.cfg.warn_on_empty_range {
            log::warn!(
                "empty frame range {}..{}; composing a zero-length clip",
                ctx.range.start,
                ctx.range.end
            );
        }

        let clip = ClipSpec {
            duration,
            autoreverses: ctx.timing.autoreverses,
            repeat_count: ctx.timing.repeat_count,
            time_offset: ctx.timing.time_offset,
            begin_time: self.cfg.begin_time.begin_time(now),
            fill_mode: FillMode::Both,
            removed_on_completion: false,
            child: Self::timeline(ctx),
        };
        log::trace!("composed clip {clip:?} for {ctx:?}");
        clip
    }

    /// Compose against the target's current time and attach under the property's key,
    /// replacing any animation already running there.
    pub fn attach<T, C>(
        &self,
        ctx: &LayerAnimationContext<'_>,
        property: PropertyAnimation,
        target: &mut T,
        clock: &C,
    ) where
        T: TimingTarget + ?Sized,
        C: MediaClock + ?Sized,
    {
        let now = target.convert_host_time(clock.now());
        let clip = self.compose(ctx, now);
        let key = property.animation_key().to_owned();
        let replaced = target.add_animation(&key, TimedAnimation { property, clip });
        if replaced.is_some() {
            log::debug!("replaced timed animation '{key}' (begin {:.6})", clip.begin_time);
        } else {
            log::debug!("attached timed animation '{key}' (begin {:.6})", clip.begin_time);
        }
    }
}
