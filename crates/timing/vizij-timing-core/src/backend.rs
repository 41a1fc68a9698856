//! Backend capabilities the composer drives.
//!
//! Adapters for a concrete compositor implement [`TimingTarget`] for their node type and
//! translate [`ClipSpec`] into the compositor's native animation description.
//! [`crate::LayerNode`] is the in-memory implementation.

use std::cell::Cell;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::interval::ClipSpec;
use crate::property::PropertyAnimation;

/// Source of the synchronized host time (seconds).
pub trait MediaClock {
    fn now(&self) -> f64;
}

/// Clock advanced by hand; for headless playback and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    #[inline]
    pub fn set(&self, t: f64) {
        self.now.set(t);
    }

    #[inline]
    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }
}

impl MediaClock for ManualClock {
    #[inline]
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Monotonic wall clock measured from its own creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaClock for SystemClock {
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

/// A property animation together with the clip that times it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimedAnimation {
    pub property: PropertyAnimation,
    pub clip: ClipSpec,
}

/// A rendering node that can run timed animations.
///
/// Calls must happen on the context that owns the node.
pub trait TimingTarget {
    /// Convert a host clock reading into this node's local time space.
    fn convert_host_time(&self, host_time: f64) -> f64;

    /// Attach under `key`, returning whatever was attached there before.
    fn add_animation(&mut self, key: &str, animation: TimedAnimation) -> Option<TimedAnimation>;

    fn remove_animation(&mut self, key: &str) -> Option<TimedAnimation>;
}
