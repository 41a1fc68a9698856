//! Property animations: the value change that a composed interval times.
//!
//! Model:
//! - A [`PropertyAnimation`] targets one key path (e.g. `"transform.position"`) with
//!   keyframes placed at absolute animation frames.
//! - Numeric kinds blend linearly component-wise between neighbouring keys.
//! - `Bool` values step (hold left).
//! - Frames before the first key or after the last key hold the end keys.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Vec2,
    Vec3,
    Color,
    Bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    Scalar(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    /// RGBA color
    Color([f32; 4]),
    /// Step-only boolean value (no blending)
    Bool(bool),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Vec3(_) => ValueKind::Vec3,
            Value::Color(_) => ValueKind::Color,
            Value::Bool(_) => ValueKind::Bool,
        }
    }
}

/// A single key at an absolute frame of the animation timeline.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    pub frame: f64,
    pub value: Value,
}

/// Keyframed value change for one property of a layer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PropertyAnimation {
    /// Property path on the target node; also the attachment key.
    #[serde(rename = "keyPath")]
    pub key_path: String,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl PropertyAnimation {
    pub fn new(key_path: impl Into<String>, keyframes: Vec<Keyframe>) -> Self {
        Self {
            key_path: key_path.into(),
            keyframes,
        }
    }

    /// Key under which this animation is attached to a node.
    #[inline]
    pub fn animation_key(&self) -> &str {
        &self.key_path
    }

    pub fn is_sorted(&self) -> bool {
        self.keyframes.windows(2).all(|w| w[0].frame <= w[1].frame)
    }

    /// Sample the property at an absolute animation frame.
    ///
    /// Returns `None` only when there are no keyframes.
    pub fn sample_at_frame(&self, frame: f64) -> Option<Value> {
        let keys = &self.keyframes;
        let (first, last) = (keys.first()?, keys.last()?);
        if keys.len() == 1 || frame <= first.frame {
            return Some(first.value.clone());
        }
        if frame >= last.frame {
            return Some(last.value.clone());
        }
        // Linear scan (tracks are short)
        for pair in keys.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            if frame >= left.frame && frame <= right.frame {
                let span = (right.frame - left.frame).max(f64::EPSILON);
                let t = ((frame - left.frame) / span).clamp(0.0, 1.0) as f32;
                return Some(blend(&left.value, &right.value, t));
            }
        }
        Some(last.value.clone())
    }
}

#[inline]
fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
fn lerp_n<const N: usize>(a: [f32; N], b: [f32; N], t: f32) -> [f32; N] {
    let mut out = a;
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = lerp_f32(*x, *y, t);
    }
    out
}

/// Blend two values of the same kind; mismatched kinds and `Bool` hold the left value.
fn blend(left: &Value, right: &Value, t: f32) -> Value {
    match (left, right) {
        (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(lerp_f32(*a, *b, t)),
        (Value::Vec2(a), Value::Vec2(b)) => Value::Vec2(lerp_n(*a, *b, t)),
        (Value::Vec3(a), Value::Vec3(b)) => Value::Vec3(lerp_n(*a, *b, t)),
        (Value::Color(a), Value::Color(b)) => Value::Color(lerp_n(*a, *b, t)),
        _ => left.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opacity() -> PropertyAnimation {
        PropertyAnimation::new(
            "opacity",
            vec![
                Keyframe {
                    frame: 0.0,
                    value: Value::Scalar(0.0),
                },
                Keyframe {
                    frame: 30.0,
                    value: Value::Scalar(1.0),
                },
            ],
        )
    }

    #[test]
    fn linear_between_keys() {
        assert_eq!(opacity().sample_at_frame(15.0), Some(Value::Scalar(0.5)));
    }

    #[test]
    fn holds_end_keys_outside_range() {
        let anim = opacity();
        assert_eq!(anim.sample_at_frame(-10.0), Some(Value::Scalar(0.0)));
        assert_eq!(anim.sample_at_frame(90.0), Some(Value::Scalar(1.0)));
    }

    #[test]
    fn bool_steps() {
        let anim = PropertyAnimation::new(
            "hidden",
            vec![
                Keyframe {
                    frame: 0.0,
                    value: Value::Bool(false),
                },
                Keyframe {
                    frame: 10.0,
                    value: Value::Bool(true),
                },
            ],
        );
        assert_eq!(anim.sample_at_frame(9.9), Some(Value::Bool(false)));
        assert_eq!(anim.sample_at_frame(10.0), Some(Value::Bool(true)));
    }

    #[test]
    fn empty_track_has_no_value() {
        assert_eq!(PropertyAnimation::new("x", vec![]).sample_at_frame(0.0), None);
    }
}
