// File: crates/pathline-core/src/animate.rs
// Summary: Clock abstraction, easing curves and the marker animation state machine.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::error::ChartError;
use crate::geometry::Point;
use crate::path::SampledPath;

/// Source of elapsed time. Hosts drive animations by ticking once per frame;
/// the clock decides how far each tick has moved.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

/// Wall clock backed by `Instant`, measured from construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self { Self { origin: Instant::now() } }
}

impl Default for SystemClock {
    fn default() -> Self { Self::new() }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration { self.origin.elapsed() }
}

/// Clock that only moves when told to; used by tests and headless frame dumps.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self { Self::default() }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration { self.now.get() }
}

// Allow one clock to drive several charts
impl<C: Clock + ?Sized> Clock for &C {
    fn elapsed(&self) -> Duration { (**self).elapsed() }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn elapsed(&self) -> Duration { (**self).elapsed() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out (slow start, slow finish).
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps progress in [0, 1] to eased progress in [0, 1]; both ends are fixed.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
        }
    }
}

/// Which end of the segment the marker starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Target above current: travel from arc length 0 to the end.
    Forward,
    /// Target below current: travel from the end back to 0.
    Reverse,
}

impl Direction {
    pub fn between(current: f64, target: f64) -> Self {
        if target > current { Direction::Forward } else { Direction::Reverse }
    }
}

/// A path plus a direction of travel over it.
#[derive(Clone, Debug)]
pub struct Tween {
    path: SampledPath,
    direction: Direction,
}

impl Tween {
    pub fn new(path: SampledPath, direction: Direction) -> Self {
        Self { path, direction }
    }

    pub fn path(&self) -> &SampledPath { &self.path }
    pub fn direction(&self) -> Direction { self.direction }

    /// Arc length reached at progress `t`.
    pub fn arc_length_at(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        let len = self.path.length();
        match self.direction {
            Direction::Forward => t * len,
            Direction::Reverse => (1.0 - t) * len,
        }
    }

    pub fn point_at(&self, t: f64) -> Option<Point> {
        self.path.point_at_length(self.arc_length_at(t))
    }
}

#[derive(Clone, Debug)]
pub enum MarkerState {
    Idle,
    Animating { tween: Tween, started_at: Duration, target: f64 },
}

/// Result of one `tick`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Marker position in plot pixels.
    pub point: Point,
    /// Eased progress in [0, 1]; 1 while idle.
    pub progress: f64,
    /// Set on the tick that completes an animation; carries the reached target.
    pub finished: Option<f64>,
}

/// Moves a marker along a tween over a fixed duration.
///
/// `Idle -> Animating` via [`MarkerAnimator::begin`]; `Animating -> Idle`
/// on the first tick whose elapsed time reaches the duration.
#[derive(Debug)]
pub struct MarkerAnimator<C: Clock> {
    clock: C,
    duration: Duration,
    easing: Easing,
    state: MarkerState,
    point: Point,
}

impl<C: Clock> MarkerAnimator<C> {
    pub fn new(clock: C, duration: Duration, easing: Easing, rest: Point) -> Self {
        Self { clock, duration, easing, state: MarkerState::Idle, point: rest }
    }

    pub fn state(&self) -> &MarkerState { &self.state }
    pub fn is_animating(&self) -> bool { matches!(self.state, MarkerState::Animating { .. }) }
    pub fn point(&self) -> Point { self.point }
    pub fn duration(&self) -> Duration { self.duration }
    pub fn easing(&self) -> Easing { self.easing }
    pub fn clock(&self) -> &C { &self.clock }

    /// Start animating towards `target` along `tween`.
    pub fn begin(&mut self, target: f64, tween: Tween) -> Result<(), ChartError> {
        if self.is_animating() {
            return Err(ChartError::AnimationInProgress);
        }
        if let Some(p) = tween.point_at(0.0) {
            self.point = p;
        }
        self.state = MarkerState::Animating { tween, started_at: self.clock.elapsed(), target };
        Ok(())
    }

    /// Linear progress of the running animation, or `None` when idle.
    pub fn progress(&self) -> Option<f64> {
        match &self.state {
            MarkerState::Idle => None,
            MarkerState::Animating { started_at, .. } => {
                let elapsed = self.clock.elapsed().saturating_sub(*started_at);
                if self.duration.is_zero() {
                    return Some(1.0);
                }
                Some((elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0))
            }
        }
    }

    /// Sample the clock and move the marker.
    pub fn tick(&mut self) -> Frame {
        let Some(t) = self.progress() else {
            return Frame { point: self.point, progress: 1.0, finished: None };
        };
        let eased = self.easing.apply(t);
        let mut finished = None;
        if let MarkerState::Animating { tween, target, .. } = &self.state {
            if let Some(p) = tween.point_at(eased) {
                self.point = p;
            }
            if t >= 1.0 {
                finished = Some(*target);
            }
        }
        if finished.is_some() {
            self.state = MarkerState::Idle;
        }
        Frame { point: self.point, progress: eased, finished }
    }
}
