//! Playback timing options applied to the outer clip.

use serde::{Deserialize, Serialize};

/// Repeat/reverse/offset options for one playback request.
///
/// Completion always holds the last frame; there is no option to remove a finished clip.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimingConfiguration {
    #[serde(default)]
    pub autoreverses: bool,
    /// Number of passes; 1.0 plays once, fractions allowed, `INFINITY` loops forever.
    #[serde(default = "default_repeat_count")]
    pub repeat_count: f32,
    /// Seconds the clip is shifted by before play begins.
    #[serde(default)]
    pub time_offset: f64,
}

fn default_repeat_count() -> f32 {
    1.0
}

impl Default for TimingConfiguration {
    fn default() -> Self {
        Self {
            autoreverses: false,
            repeat_count: default_repeat_count(),
            time_offset: 0.0,
        }
    }
}

impl TimingConfiguration {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_autoreverses(mut self, autoreverses: bool) -> Self {
        self.autoreverses = autoreverses;
        self
    }

    #[inline]
    pub fn with_repeat_count(mut self, repeat_count: f32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    #[inline]
    pub fn with_time_offset(mut self, time_offset: f64) -> Self {
        self.time_offset = time_offset;
        self
    }
}

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub enum LoopMode {
    #[default]
    PlayOnce,
    Loop,
    /// Play forward then backward, forever.
    AutoReverse,
    Repeat(f32),
    /// Forward then backward, `n` times.
    RepeatBackwards(f32),
}

impl LoopMode {
    pub fn timing(self) -> TimingConfiguration {
        let (autoreverses, repeat_count) = match self {
            LoopMode::PlayOnce => (false, 1.0),
            LoopMode::Loop => (false, f32::INFINITY),
            LoopMode::AutoReverse => (true, f32::INFINITY),
            LoopMode::Repeat(n) => (false, n),
            LoopMode::RepeatBackwards(n) => (true, n),
        };
        TimingConfiguration {
            autoreverses,
            repeat_count,
            time_offset: 0.0,
        }
    }
}

impl From<LoopMode> for TimingConfiguration {
    fn from(mode: LoopMode) -> Self {
        mode.timing()
    }
}
