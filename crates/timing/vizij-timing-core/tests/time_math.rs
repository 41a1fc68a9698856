use vizij_timing_core::{
    Animation, AnimationInfo, ClipSpec, Composer, FillMode, FrameRange, LayerAnimationContext,
    LoopMode, TimeMapper, TimingConfiguration,
};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn compose(anim: &AnimationInfo, start: f64, end: f64, timing: TimingConfiguration) -> ClipSpec {
    let ctx = LayerAnimationContext::new(anim, FrameRange::new(start, end), timing);
    Composer::default().compose(&ctx, 0.0)
}

fn ten_seconds() -> AnimationInfo {
    AnimationInfo::new("ten", 0.0, 300.0, 30.0)
}

const RANGES: &[(f64, f64)] = &[
    (0.0, 300.0),
    (300.0, 0.0),
    (60.0, 180.0),
    (180.0, 60.0),
    (12.5, 12.5),
    (-30.0, 45.0),
    (420.0, 330.0),
    (0.25, 299.75),
];

#[test]
fn direction_comes_only_from_endpoint_order() {
    let anim = ten_seconds();
    for &(s, e) in RANGES {
        let clip = compose(&anim, s, e, TimingConfiguration::default());
        let expected = if e < s { -1.0 } else { 1.0 };
        assert_eq!(clip.child.speed, expected, "range {s}..{e}");
    }
}

#[test]
fn inner_duration_is_always_the_full_animation() {
    for anim in [ten_seconds(), AnimationInfo::new("odd", 7.0, 101.0, 24.0)] {
        for &(s, e) in RANGES {
            let clip = compose(&anim, s, e, TimingConfiguration::default());
            assert_eq!(clip.child.duration, anim.full_duration(), "range {s}..{e}");
        }
    }
}

#[test]
fn outer_duration_is_absolute_range_length() {
    let anim = ten_seconds();
    for &(s, e) in RANGES {
        let clip = compose(&anim, s, e, TimingConfiguration::default());
        approx(clip.duration, anim.time_for_frame(e - s).abs(), 1e-12);
        assert!(clip.duration >= 0.0);
    }
    assert_eq!(compose(&anim, 42.0, 42.0, TimingConfiguration::default()).duration, 0.0);
}

#[test]
fn inner_offset_reconstructs_the_start_frame() {
    for anim in [ten_seconds(), AnimationInfo::new("odd", 7.0, 101.0, 24.0)] {
        for &(s, e) in RANGES {
            let clip = compose(&anim, s, e, TimingConfiguration::default());
            assert_eq!(clip.child.time_offset, anim.time_for_frame(s));
            approx(anim.frame_for_time(clip.child.time_offset), s, 1e-9);
        }
    }
}

#[test]
fn timing_options_pass_through_unmodified() {
    let anim = ten_seconds();
    let timing = TimingConfiguration::new()
        .with_autoreverses(true)
        .with_repeat_count(2.5)
        .with_time_offset(0.75);
    for &(s, e) in RANGES {
        let clip = compose(&anim, s, e, timing);
        assert!(clip.autoreverses);
        assert_eq!(clip.repeat_count, 2.5);
        assert_eq!(clip.time_offset, 0.75);
    }
    let looped = compose(&anim, 0.0, 300.0, LoopMode::Loop.into());
    assert!(looped.repeat_count.is_infinite());
    assert!(!looped.autoreverses);
}

#[test]
fn clip_always_fills_and_holds() {
    let anim = ten_seconds();
    for &(s, e) in RANGES {
        for timing in [
            TimingConfiguration::default(),
            LoopMode::AutoReverse.timing(),
            LoopMode::Repeat(0.5).timing(),
        ] {
            let clip = compose(&anim, s, e, timing);
            assert_eq!(clip.fill_mode, FillMode::Both);
            assert!(!clip.removed_on_completion);
        }
    }
}

#[test]
fn scenario_full_forward() {
    let clip = compose(&ten_seconds(), 0.0, 300.0, TimingConfiguration::default());
    assert_eq!(clip.duration, 10.0);
    assert_eq!(clip.child.speed, 1.0);
    assert_eq!(clip.child.time_offset, 0.0);
}

#[test]
fn scenario_full_reverse() {
    let anim = ten_seconds();
    let clip = compose(&anim, 300.0, 0.0, TimingConfiguration::default());
    assert_eq!(clip.duration, 10.0);
    assert_eq!(clip.child.speed, -1.0);
    assert_eq!(clip.child.time_offset, TimeMapper::new(&anim).time_for_frame(300.0));
    assert_eq!(clip.child.time_offset, 10.0);
}

#[test]
fn scenario_middle_segment() {
    let clip = compose(&ten_seconds(), 60.0, 180.0, TimingConfiguration::default());
    assert_eq!(clip.duration, 4.0);
    assert_eq!(clip.child.time_offset, 2.0);
    assert_eq!(clip.child.speed, 1.0);
}

#[test]
fn scenario_fractional_autoreverse_repeat() {
    let timing = TimingConfiguration::new()
        .with_autoreverses(true)
        .with_repeat_count(2.5);
    for &(s, e) in RANGES {
        let clip = compose(&ten_seconds(), s, e, timing);
        assert_eq!(clip.repeat_count, 2.5);
        assert!(clip.autoreverses);
    }
}

#[test]
fn segment_plays_start_to_end_then_holds() {
    let anim = ten_seconds();
    let clip = compose(&anim, 60.0, 180.0, TimingConfiguration::default());
    let frame_at = |t: f64| anim.frame_for_time(clip.child_time(clip.begin_time + t).unwrap());
    approx(frame_at(0.0), 60.0, 1e-6);
    approx(frame_at(2.0), 120.0, 1e-6);
    approx(frame_at(4.0), 180.0, 1e-6);
    approx(frame_at(40.0), 180.0, 1e-6);
    // Filled backwards before the clip begins.
    approx(frame_at(-5.0), 60.0, 1e-6);
}

#[test]
fn reversed_segment_plays_backwards_through_full_timeline() {
    let anim = ten_seconds();
    let clip = compose(&anim, 180.0, 60.0, TimingConfiguration::default());
    let frame_at = |t: f64| anim.frame_for_time(clip.child_time(clip.begin_time + t).unwrap());
    approx(frame_at(0.0), 180.0, 1e-6);
    approx(frame_at(1.0), 150.0, 1e-6);
    approx(frame_at(4.0), 60.0, 1e-6);
    approx(frame_at(10.0), 60.0, 1e-6);
}

#[test]
fn non_zero_in_point_keeps_segment_length() {
    let anim = AnimationInfo::new("late", 45.0, 165.0, 24.0);
    let clip = compose(&anim, 141.0, 69.0, TimingConfiguration::default());
    approx(clip.duration, 3.0, 1e-12);
    approx(clip.child.time_offset, 4.0, 1e-12);
    let end = clip.child_time(clip.begin_time + clip.active_duration()).unwrap();
    approx(anim.frame_for_time(end), 69.0, 1e-6);
}

#[test]
fn repeated_short_segments_settle_on_their_end_frame() {
    let anim = ten_seconds();
    for (end, repeat) in [(3.0, 3.0), (6.0, 3.0), (3.0, 2.0), (9.0, 5.0), (30.0, 3.0)] {
        let clip = compose(
            &anim,
            0.0,
            end,
            TimingConfiguration::new().with_repeat_count(repeat),
        );
        let held = clip
            .child_time(clip.begin_time + clip.active_duration() + 100.0)
            .unwrap();
        approx(anim.frame_for_time(held), end, 1e-6);

        let bounced = compose(
            &anim,
            0.0,
            end,
            TimingConfiguration::new()
                .with_autoreverses(true)
                .with_repeat_count(repeat),
        );
        let held = bounced
            .child_time(bounced.begin_time + bounced.active_duration() + 100.0)
            .unwrap();
        approx(anim.frame_for_time(held), 0.0, 1e-6);
    }
}

#[test]
fn time_offset_starts_mid_segment_and_wraps() {
    let anim = ten_seconds();
    let clip = compose(
        &anim,
        60.0,
        180.0,
        TimingConfiguration::new().with_time_offset(1.0),
    );
    let frame_at = |t: f64| anim.frame_for_time(clip.child_time(clip.begin_time + t).unwrap());
    approx(frame_at(0.0), 90.0, 1e-6);
    approx(frame_at(3.5), 60.0 + 0.5 * 30.0, 1e-6);
    approx(frame_at(50.0), 180.0, 1e-6);
}
