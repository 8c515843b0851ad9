// File: crates/pathline-core/tests/scenario.rs
// Purpose: End-to-end advance on a 20-sample random-walk chart driven by a manual clock.

use std::time::Duration;

use pathline_core::{ChartConfig, ChartError, Easing, LineChart, ManualClock, SampleStore};

fn values() -> Vec<f64> {
    (0..20).map(|i| 5.0 + 2.0 * (i as f64 * 0.7).sin()).collect()
}

fn finish(chart: &mut LineChart<&ManualClock>, clock: &ManualClock) {
    clock.advance(chart.config().duration);
    let f = chart.tick();
    assert!(f.finished.is_some());
}

#[test]
fn advance_from_three_to_fifteen() {
    let clock = ManualClock::new();
    let config = ChartConfig::random_walk().with_easing(Easing::Linear);
    let store = SampleStore::from_values(&values()).unwrap();
    let mut chart = LineChart::with_samples(config, store, &clock).unwrap();
    assert_eq!(chart.current(), 0.0);
    assert_eq!(chart.marker(), chart.mapped(0.0).unwrap());

    chart.advance_to(3.0).unwrap();
    finish(&mut chart, &clock);
    assert_eq!(chart.current(), 3.0);

    chart.advance_to(15.0).unwrap();
    assert_eq!(chart.status(), "x = 15");
    let segment = chart.segment_path();
    assert!(segment.length() > 0.0);
    assert_eq!(segment.run_count(), 1);
    assert_eq!(segment.first_point(), chart.mapped(3.0));
    assert_eq!(segment.last_point(), chart.mapped(15.0));

    let f0 = chart.tick();
    assert_eq!(f0.point, chart.mapped(3.0).unwrap());
    assert_eq!(chart.current(), 3.0);

    clock.advance(Duration::from_millis(1000));
    let mid = chart.tick();
    assert!((mid.progress - 0.5).abs() < 1e-12);
    assert_eq!(mid.finished, None);
    assert!(chart.is_animating());
    assert_eq!(chart.current(), 3.0);

    clock.advance(Duration::from_millis(1000));
    let end = chart.tick();
    assert_eq!(end.finished, Some(15.0));
    assert_eq!(end.point, chart.mapped(15.0).unwrap());
    assert_eq!(chart.current(), 15.0);
    assert!(!chart.is_animating());
    assert_eq!(chart.marker(), chart.mapped(15.0).unwrap());
}

#[test]
fn moving_left_starts_from_the_segment_end() {
    let clock = ManualClock::new();
    let store = SampleStore::from_values(&values()).unwrap();
    let mut chart = LineChart::with_samples(ChartConfig::random_walk(), store, &clock).unwrap();
    chart.advance_to(15.0).unwrap();
    finish(&mut chart, &clock);

    chart.advance_to(4.0).unwrap();
    assert_eq!(chart.tick().point, chart.mapped(15.0).unwrap());
    assert_eq!(chart.segment_path().first_point(), chart.mapped(4.0));

    // marker x moves monotonically left
    let mut last_x = f64::INFINITY;
    for _ in 0..20 {
        clock.advance(Duration::from_millis(100));
        let f = chart.tick();
        assert!(f.point.x <= last_x);
        last_x = f.point.x;
    }
    assert_eq!(chart.current(), 4.0);
    assert_eq!(chart.marker(), chart.mapped(4.0).unwrap());
}

#[test]
fn rejected_advances_leave_state_untouched() {
    let clock = ManualClock::new();
    let store = SampleStore::from_values(&values()).unwrap();
    let mut chart = LineChart::with_samples(ChartConfig::random_walk(), store, &clock).unwrap();

    assert_eq!(chart.advance_to(0.0), Err(ChartError::TargetIsCurrent(0.0)));
    assert!(matches!(chart.advance_to(20.0), Err(ChartError::TargetOutOfRange { .. })));
    assert!(matches!(chart.advance_to(-1.0), Err(ChartError::TargetOutOfRange { .. })));
    assert!(matches!(chart.advance_to(f64::NAN), Err(ChartError::TargetOutOfRange { .. })));
    assert_eq!(chart.advance_to(2.5), Err(ChartError::NotASample(2.5)));
    assert!(!chart.is_animating());
    assert_eq!(chart.target(), None);

    chart.advance_to(10.0).unwrap();
    clock.advance(Duration::from_millis(300));
    chart.tick();
    let marker = chart.marker();
    assert_eq!(chart.advance_to(2.0), Err(ChartError::AnimationInProgress));
    assert_eq!(chart.target(), Some(10.0));
    assert_eq!(chart.status(), "x = 10");
    assert_eq!(chart.marker(), marker);

    finish(&mut chart, &clock);
    assert_eq!(chart.current(), 10.0);
}

#[test]
fn segment_toggle_is_per_chart() {
    let clock = ManualClock::new();
    let mut a = LineChart::with_samples(ChartConfig::random_walk(), SampleStore::from_values(&values()).unwrap(), &clock).unwrap();
    let b = LineChart::with_samples(ChartConfig::random_walk(), SampleStore::from_values(&values()).unwrap(), &clock).unwrap();
    assert!(!a.show_segment());
    assert!(a.toggle_segment());
    assert!(a.show_segment());
    assert!(!b.show_segment());
    a.set_show_segment(false);
    assert!(!a.show_segment());
}
