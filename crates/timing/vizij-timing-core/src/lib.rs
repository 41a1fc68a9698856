//! Vizij Timing Core (backend-agnostic)
//!
//! Maps a playback request over an animation (a frame sub-range plus loop, reverse,
//! repeat and offset options) onto a two-level nested interval: an inner timeline that
//! always spans the full animation, wrapped in an outer clip that selects, repeats and
//! holds the requested segment. The interval is plain data ([`ClipSpec`] /
//! [`TimelineSpec`]); backends receive it through the [`TimingTarget`] trait.
//!
//! [`LayerNode`] is an in-memory target that evaluates attached intervals the way a
//! time-driven compositor would, which keeps the whole pipeline testable headless.

pub mod animation;
pub mod backend;
pub mod composer;
pub mod config;
pub mod context;
pub mod error;
pub mod interval;
pub mod node;
pub mod property;
pub mod time_map;
pub mod timing;

// Re-exports for consumers (adapters)
pub use animation::{parse_animation_json, Animation, AnimationInfo};
pub use backend::{MediaClock, ManualClock, SystemClock, TimedAnimation, TimingTarget};
pub use composer::Composer;
pub use config::{BeginTimePolicy, Config};
pub use context::{FrameRange, LayerAnimationContext};
pub use error::TimingError;
pub use interval::{ClipSpec, FillMode, TimelineSpec};
pub use node::LayerNode;
pub use property::{Keyframe, PropertyAnimation, Value, ValueKind};
pub use time_map::TimeMapper;
pub use timing::{LoopMode, TimingConfiguration};
