//! Error types for loading animation descriptors.
//!
//! Composition and attachment never fail; inverted or degenerate frame ranges are
//! handled by direction logic instead. Only descriptor loading is fallible.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimingError {
    /// The descriptor JSON could not be parsed.
    #[error("animation json parse error: {0}")]
    Parse(String),

    #[error("frame rate must be finite and > 0, got {frame_rate}")]
    InvalidFrameRate { frame_rate: f64 },

    #[error("out frame {out_frame} precedes in frame {in_frame}")]
    InvalidFrameRange { in_frame: f64, out_frame: f64 },

    /// Keyframes of a track must be ordered by frame.
    #[error("keyframes for '{key_path}' are not sorted by frame")]
    UnsortedKeyframes { key_path: String },
}

impl From<serde_json::Error> for TimingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
