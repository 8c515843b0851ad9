// File: crates/pathline-core/tests/sine.rs
// Purpose: Sine chart: initial rest position, target insertion and reuse, status readout.

use std::f64::consts::PI;
use std::time::Duration;

use pathline_core::{ChartConfig, Direction, LineChart, ManualClock, MarkerState, SampleOrder};

#[test]
fn starts_on_the_first_sample() {
    let clock = ManualClock::new();
    let chart = LineChart::sine(ChartConfig::sine(), &clock).unwrap();
    assert_eq!(chart.samples().order(), SampleOrder::ByX);
    assert_eq!(chart.current(), -2.0 * PI);
    assert_eq!(chart.marker(), chart.mapped(-2.0 * PI).unwrap());
    assert_eq!(chart.status(), "x = -6.283");
    // fixed value range, niced outward
    assert_eq!(chart.y_scale().domain(), (-2.0, 2.0));
    assert_eq!(chart.x_scale().domain(), (-2.0 * PI, 2.0 * PI));
}

#[test]
fn targets_become_samples_and_anchor_later_segments() {
    let clock = ManualClock::new();
    let mut chart = LineChart::sine(ChartConfig::sine(), &clock).unwrap();

    chart.advance_to(1.0).unwrap();
    assert_eq!(chart.samples().len(), 42);
    let inserted = chart.samples().at_position(1.0).unwrap();
    assert_eq!(inserted.y, 1.0f64.sin());
    assert_eq!(chart.status(), "x = 1.000");
    assert_eq!(chart.segment_path().first_point(), chart.mapped(-2.0 * PI));
    assert_eq!(chart.segment_path().last_point(), chart.mapped(1.0));

    clock.advance(Duration::from_millis(1500));
    assert_eq!(chart.tick().finished, Some(1.0));
    assert_eq!(chart.marker(), chart.mapped(1.0).unwrap());

    chart.advance_to(-1.0).unwrap();
    assert_eq!(chart.samples().len(), 43);
    match chart.animator().state() {
        MarkerState::Animating { tween, .. } => assert_eq!(tween.direction(), Direction::Reverse),
        MarkerState::Idle => panic!("expected an animation"),
    }
    // reverse travel starts at the previous target, now a real sample
    assert_eq!(chart.tick().point, chart.mapped(1.0).unwrap());
    clock.advance(Duration::from_millis(1500));
    chart.tick();

    // an existing x is reused, not duplicated
    chart.advance_to(2.0 * PI).unwrap();
    assert_eq!(chart.samples().len(), 43);
    assert_eq!(chart.segment_path().last_point(), chart.mapped(2.0 * PI));
}

#[test]
fn full_line_includes_inserted_samples() {
    let clock = ManualClock::new();
    let mut chart = LineChart::sine(ChartConfig::sine(), &clock).unwrap();
    let before = chart.line_path().commands().len();
    chart.advance_to(0.05).unwrap();
    assert_eq!(chart.line_path().commands().len(), before + 1);
}
