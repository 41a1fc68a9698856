//! Animation descriptors and the read-only capability the composer consumes.

use serde::{Deserialize, Serialize};

use crate::error::TimingError;
use crate::property::PropertyAnimation;

/// Read-only view of a loaded animation.
///
/// Implemented by whatever owns the authored animation; the composer only reads it.
pub trait Animation {
    /// Total duration of the authored timeline, in seconds.
    fn full_duration(&self) -> f64;

    /// Physical time (seconds) of an absolute frame. Linear, unclamped.
    fn time_for_frame(&self, frame: f64) -> f64;
}

/// Concrete animation descriptor (frame range, frame rate and property tracks).
///
/// Field names follow the common keyframe interchange shorthand (`ip`, `op`, `fr`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnimationInfo {
    #[serde(default, rename = "nm")]
    pub name: String,
    #[serde(rename = "ip")]
    pub in_frame: f64,
    #[serde(rename = "op")]
    pub out_frame: f64,
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    #[serde(default)]
    pub tracks: Vec<PropertyAnimation>,
}

impl AnimationInfo {
    pub fn new(name: impl Into<String>, in_frame: f64, out_frame: f64, frame_rate: f64) -> Self {
        Self {
            name: name.into(),
            in_frame,
            out_frame,
            frame_rate,
            tracks: Vec::new(),
        }
    }

    pub fn with_track(mut self, track: PropertyAnimation) -> Self {
        self.tracks.push(track);
        self
    }

    /// Number of frames between in and out point.
    #[inline]
    pub fn duration_frames(&self) -> f64 {
        self.out_frame - self.in_frame
    }

    /// Inverse of [`Animation::time_for_frame`].
    #[inline]
    pub fn frame_for_time(&self, seconds: f64) -> f64 {
        self.in_frame + seconds * self.frame_rate
    }

    /// Absolute frame at normalized progress (0 = in point, 1 = out point). Unclamped.
    #[inline]
    pub fn frame_for_progress(&self, progress: f64) -> f64 {
        self.in_frame + self.duration_frames() * progress
    }

    /// Normalized progress of an absolute frame; 0 for an empty timeline.
    pub fn progress_for_frame(&self, frame: f64) -> f64 {
        let span = self.duration_frames();
        if span == 0.0 {
            return 0.0;
        }
        (frame - self.in_frame) / span
    }

    pub fn track(&self, key_path: &str) -> Option<&PropertyAnimation> {
        self.tracks.iter().find(|t| t.key_path == key_path)
    }

    /// Validate basic invariants (positive finite frame rate, ordered frame range, sorted keys).
    pub fn validate(&self) -> Result<(), TimingError> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(TimingError::InvalidFrameRate {
                frame_rate: self.frame_rate,
            });
        }
        if self.in_frame.is_nan() || self.out_frame.is_nan() || self.out_frame < self.in_frame {
            return Err(TimingError::InvalidFrameRange {
                in_frame: self.in_frame,
                out_frame: self.out_frame,
            });
        }
        if let Some(track) = self.tracks.iter().find(|t| !t.is_sorted()) {
            return Err(TimingError::UnsortedKeyframes {
                key_path: track.key_path.clone(),
            });
        }
        Ok(())
    }
}

impl Animation for AnimationInfo {
    #[inline]
    fn full_duration(&self) -> f64 {
        self.duration_frames() / self.frame_rate
    }

    #[inline]
    fn time_for_frame(&self, frame: f64) -> f64 {
        (frame - self.in_frame) / self.frame_rate
    }
}

/// Parse an animation descriptor from JSON and validate it.
pub fn parse_animation_json(s: &str) -> Result<AnimationInfo, TimingError> {
    let info: AnimationInfo = serde_json::from_str(s)?;
    info.validate()?;
    log::debug!(
        "loaded animation '{}' frames {}..{} @ {} fps ({} tracks)",
        info.name,
        info.in_frame,
        info.out_frame,
        info.frame_rate,
        info.tracks.len()
    );
    Ok(info)
}
