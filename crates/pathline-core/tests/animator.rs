// File: crates/pathline-core/tests/animator.rs
// Purpose: Marker animator direction, timing and state transitions on a manual clock.

use std::time::Duration;

use pathline_core::{
    build_full_path, ChartError, Curve, Direction, Easing, LinearScale, ManualClock, MarkerAnimator, MarkerState,
    Point, SampleStore, Tween,
};

fn path() -> pathline_core::SampledPath {
    let store = SampleStore::from_values(&[1.0, 4.0, 2.0, 3.0, 5.0]).unwrap();
    let x = LinearScale::new((0.0, 4.0), (0.0, 400.0));
    let y = LinearScale::new((0.0, 5.0), (200.0, 0.0));
    build_full_path(store.as_slice(), &x, &y, Curve::Linear)
}

#[test]
fn forward_arc_length_grows_with_t() {
    let tween = Tween::new(path(), Direction::Forward);
    let len = tween.path().length();
    let s = (0..=10).map(|k| tween.arc_length_at(k as f64 / 10.0)).collect::<Vec<_>>();
    assert_eq!(s[0], 0.0);
    assert_eq!(s[10], len);
    assert!(s.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn reverse_arc_length_shrinks_with_t() {
    let tween = Tween::new(path(), Direction::Reverse);
    let len = tween.path().length();
    for k in 0..=10 {
        let t = k as f64 / 10.0;
        assert_eq!(tween.arc_length_at(t), (1.0 - t) * len);
    }
    assert_eq!(tween.point_at(0.0), tween.path().last_point());
    assert_eq!(tween.point_at(1.0), tween.path().first_point());
}

#[test]
fn direction_follows_target_order() {
    assert_eq!(Direction::between(3.0, 15.0), Direction::Forward);
    assert_eq!(Direction::between(15.0, 3.0), Direction::Reverse);
}

#[test]
fn runs_for_the_configured_duration_then_idles() {
    let clock = ManualClock::new();
    let p = path();
    let start = p.first_point().unwrap();
    let end = p.last_point().unwrap();
    let mut anim = MarkerAnimator::new(&clock, Duration::from_millis(2000), Easing::Linear, Point::default());

    anim.begin(4.0, Tween::new(p, Direction::Forward)).unwrap();
    assert!(anim.is_animating());
    assert_eq!(anim.point(), start);

    let f = anim.tick();
    assert_eq!(f.progress, 0.0);
    assert_eq!(f.finished, None);

    clock.advance(Duration::from_millis(500));
    let f = anim.tick();
    assert!((f.progress - 0.25).abs() < 1e-12);
    assert_eq!(f.finished, None);

    clock.advance(Duration::from_millis(1500));
    let f = anim.tick();
    assert_eq!(f.progress, 1.0);
    assert_eq!(f.finished, Some(4.0));
    assert_eq!(f.point, end);
    assert!(matches!(anim.state(), MarkerState::Idle));

    // idle ticks keep the marker where it stopped
    clock.advance(Duration::from_millis(700));
    let f = anim.tick();
    assert_eq!(f.point, end);
    assert_eq!(f.finished, None);
}

#[test]
fn late_ticks_clamp_to_the_end() {
    let clock = ManualClock::new();
    let p = path();
    let start = p.first_point().unwrap();
    let mut anim = MarkerAnimator::new(&clock, Duration::from_millis(100), Easing::CubicInOut, Point::default());
    anim.begin(0.0, Tween::new(p, Direction::Reverse)).unwrap();
    clock.advance(Duration::from_secs(5));
    let f = anim.tick();
    assert_eq!(f.finished, Some(0.0));
    assert_eq!(f.point, start);
}

#[test]
fn begin_is_rejected_while_animating() {
    let clock = ManualClock::new();
    let mut anim = MarkerAnimator::new(&clock, Duration::from_millis(1000), Easing::Linear, Point::default());
    anim.begin(4.0, Tween::new(path(), Direction::Forward)).unwrap();
    let err = anim.begin(2.0, Tween::new(path(), Direction::Reverse)).unwrap_err();
    assert_eq!(err, ChartError::AnimationInProgress);
    match anim.state() {
        MarkerState::Animating { target, tween, .. } => {
            assert_eq!(*target, 4.0);
            assert_eq!(tween.direction(), Direction::Forward);
        }
        MarkerState::Idle => panic!("animation was dropped"),
    }
}
