// File: crates/pathline-core/src/config.rs
// Summary: Per-chart configuration with presets for the random-walk and sine charts.

use std::time::Duration;

use crate::animate::Easing;
use crate::path::Curve;
use crate::types::Layout;

/// Which data set a chart shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    RandomWalk,
    Sine,
}

#[derive(Clone, Debug)]
pub struct ChartConfig {
    /// Stable name of the container the chart renders into.
    pub name: String,
    pub kind: ChartKind,
    pub layout: Layout,
    pub curve: Curve,
    pub duration: Duration,
    pub easing: Easing,
    pub marker_radius: f32,
    /// Random walk: number of samples.
    pub sample_count: usize,
    /// Random walk: value before the first step.
    pub walk_start: f64,
    /// Sine: sample spacing in multiples of PI.
    pub sine_step: f64,
    /// Fixed value range for bounded signals; `None` means `[0, max]`.
    pub y_domain: Option<(f64, f64)>,
    /// Round axis domains outward to tick steps.
    pub nice_x: bool,
    pub nice_y: bool,
    pub show_segment: bool,
}

impl ChartConfig {
    pub fn random_walk() -> Self {
        Self {
            name: "example-line".to_string(),
            kind: ChartKind::RandomWalk,
            layout: Layout::default(),
            curve: Curve::Linear,
            duration: Duration::from_millis(2000),
            easing: Easing::default(),
            marker_radius: 5.0,
            sample_count: 20,
            walk_start: 5.0,
            sine_step: 0.1,
            y_domain: None,
            nice_x: true,
            nice_y: true,
            show_segment: false,
        }
    }

    pub fn sine() -> Self {
        Self {
            name: "example-sine".to_string(),
            kind: ChartKind::Sine,
            curve: Curve::Basis,
            duration: Duration::from_millis(1500),
            y_domain: Some((-1.5, 1.5)),
            nice_x: false,
            ..Self::random_walk()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self { Self::random_walk() }
}
