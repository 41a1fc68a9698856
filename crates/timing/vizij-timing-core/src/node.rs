//! In-memory layer node implementing [`TimingTarget`].
//!
//! Evaluates attached clips against a host time the way a compositor's render pass
//! would. Node-level `speed`/`time_offset`/`begin_time` form the global play/pause
//! mechanism: pausing sets speed to zero and pins the node's local time through
//! `time_offset`.

use hashbrown::HashMap;

use crate::animation::{Animation, AnimationInfo};
use crate::backend::{TimedAnimation, TimingTarget};
use crate::property::Value;

#[derive(Debug, Clone)]
pub struct LayerNode {
    pub name: String,
    pub speed: f64,
    pub time_offset: f64,
    pub begin_time: f64,
    animations: HashMap<String, TimedAnimation>,
}

impl Default for LayerNode {
    fn default() -> Self {
        Self::new("")
    }
}

impl LayerNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            speed: 1.0,
            time_offset: 0.0,
            begin_time: 0.0,
            animations: HashMap::new(),
        }
    }

    pub fn animation(&self, key: &str) -> Option<&TimedAnimation> {
        self.animations.get(key)
    }

    /// Attached keys, sorted.
    pub fn animation_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.animations.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn remove_all_animations(&mut self) {
        self.animations.clear();
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.speed == 0.0
    }

    /// Freeze the node at its local time for `host_time`.
    pub fn pause(&mut self, host_time: f64) {
        let local = self.convert_host_time(host_time);
        self.speed = 0.0;
        self.time_offset = local;
        log::debug!("layer '{}' paused at local {local:.6}", self.name);
    }

    /// Continue at normal rate from where the node was frozen.
    pub fn resume(&mut self, host_time: f64) {
        if !self.is_paused() {
            return;
        }
        self.speed = 1.0;
        self.begin_time = host_time;
        log::debug!("layer '{}' resumed from local {:.6}", self.name, self.time_offset);
    }

    /// Pause so the clip under `key` shows clip-relative time `clip_time`.
    ///
    /// Returns `false` if nothing is attached under `key`.
    pub fn pause_at(&mut self, key: &str, clip_time: f64) -> bool {
        let Some(timed) = self.animations.get(key) else {
            return false;
        };
        // Undo the clip's offset; it wraps within the active interval.
        let mut elapsed = clip_time - timed.clip.time_offset;
        let active = timed.clip.active_duration();
        if elapsed < 0.0 && active.is_finite() && active > 0.0 {
            elapsed = elapsed.rem_euclid(active);
        }
        let local = timed.clip.begin_time + elapsed.max(0.0);
        self.speed = 0.0;
        self.time_offset = local;
        true
    }

    /// Pause on an absolute animation frame of the clip under `key`.
    ///
    /// The frame is located within the clip's first pass; frames outside the requested
    /// range land on the held edge.
    pub fn pause_at_frame(&mut self, key: &str, frame: f64, animation: &dyn Animation) -> bool {
        let Some(timed) = self.animations.get(key) else {
            return false;
        };
        let child = timed.clip.child;
        let clip_time = if child.speed == 0.0 {
            0.0
        } else {
            (animation.time_for_frame(frame) - child.time_offset) / child.speed
        };
        let clip_time = clip_time.clamp(0.0, timed.clip.duration.max(0.0));
        self.pause_at(key, clip_time)
    }

    /// Animation time (seconds) displayed for `key` at `host_time`.
    pub fn presentation_time(&self, key: &str, host_time: f64) -> Option<f64> {
        let timed = self.animations.get(key)?;
        timed.clip.child_time(self.convert_host_time(host_time))
    }

    /// Absolute animation frame displayed for `key` at `host_time`.
    pub fn presentation_frame(
        &self,
        key: &str,
        host_time: f64,
        animation: &AnimationInfo,
    ) -> Option<f64> {
        self.presentation_time(key, host_time)
            .map(|t| animation.frame_for_time(t))
    }

    /// Property value displayed for `key` at `host_time`.
    pub fn presentation_value(
        &self,
        key: &str,
        host_time: f64,
        animation: &AnimationInfo,
    ) -> Option<Value> {
        let frame = self.presentation_frame(key, host_time, animation)?;
        self.animations.get(key)?.property.sample_at_frame(frame)
    }
}

impl TimingTarget for LayerNode {
    #[inline]
    fn convert_host_time(&self, host_time: f64) -> f64 {
        (host_time - self.begin_time) * self.speed + self.time_offset
    }

    fn add_animation(&mut self, key: &str, animation: TimedAnimation) -> Option<TimedAnimation> {
        self.animations.insert(key.to_owned(), animation)
    }

    fn remove_animation(&mut self, key: &str) -> Option<TimedAnimation> {
        let removed = self.animations.remove(key);
        if removed.is_some() {
            log::debug!("layer '{}' removed animation '{key}'", self.name);
        }
        removed
    }
}
