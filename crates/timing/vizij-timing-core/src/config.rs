//! Composer configuration.

use serde::{Deserialize, Serialize};

/// Where an attached clip's begin time is placed relative to the target's current time.
///
/// Pausing a node through zero speed plus an explicit time offset only seeks correctly
/// when the clip begins strictly before "now" on some compositors. The default places
/// it one representable step earlier.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub enum BeginTimePolicy {
    /// Largest `f64` strictly below the current time.
    #[default]
    OneTickBeforeNow,
    Now,
    /// A fixed number of seconds before the current time.
    Before(f64),
}

impl BeginTimePolicy {
    pub fn begin_time(self, now: f64) -> f64 {
        match self {
            BeginTimePolicy::OneTickBeforeNow => next_down(now),
            BeginTimePolicy::Now => now,
            BeginTimePolicy::Before(seconds) => now - seconds,
        }
    }
}

/// Next representable `f64` below `x` (`x` itself for NaN and -inf).
fn next_down(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY {
        return x;
    }
    if x == 0.0 {
        return -f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits - 1)
    } else {
        f64::from_bits(bits + 1)
    }
}

/// Configuration for the composer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub begin_time: BeginTimePolicy,
    /// Log a warning when a zero-length frame range is composed.
    pub warn_on_empty_range: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            begin_time: BeginTimePolicy::default(),
            warn_on_empty_range: true,
        }
    }
}
