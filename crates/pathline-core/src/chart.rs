// File: crates/pathline-core/src/chart.rs
// Summary: Chart instance owning samples, scales, paths and the marker animator.

use log::{debug, info, trace};
use rand::Rng;

use crate::animate::{Clock, Direction, Frame, MarkerAnimator, Tween};
use crate::axis::{Axis, TickFormat};
use crate::config::{ChartConfig, ChartKind};
use crate::error::ChartError;
use crate::geometry::Point;
use crate::grid::stepped;
use crate::path::{build_full_path, build_path, segment_predicate, SampledPath};
use crate::samples::{Sample, SampleOrder, SampleStore};
use crate::scale::LinearScale;

/// Ticks requested from the scales for axes and nice domains.
const TICK_COUNT: usize = 10;

/// One line chart with an animated marker.
///
/// Every instance owns its own state; two charts never share samples or
/// positions. Time comes from the clock `C`, so hosts decide how frames advance.
pub struct LineChart<C: Clock> {
    config: ChartConfig,
    store: SampleStore,
    x: LinearScale,
    y: LinearScale,
    line: SampledPath,
    segment: SampledPath,
    animator: MarkerAnimator<C>,
    current: f64,
    target: Option<f64>,
    show_segment: bool,
    status: String,
}

impl<C: Clock> LineChart<C> {
    /// Random-walk chart with `config.sample_count` generated samples.
    pub fn random_walk<R: Rng>(config: ChartConfig, rng: &mut R, clock: C) -> Result<Self, ChartError> {
        let store = SampleStore::random_walk(rng, config.sample_count, config.walk_start)?;
        Self::with_samples(config, store, clock)
    }

    /// Sine chart sampled over [-2PI, 2PI].
    pub fn sine(config: ChartConfig, clock: C) -> Result<Self, ChartError> {
        let store = SampleStore::sine(config.sine_step)?;
        Self::with_samples(config, store, clock)
    }

    /// Chart over an existing store; the marker rests on the first position.
    pub fn with_samples(config: ChartConfig, store: SampleStore, clock: C) -> Result<Self, ChartError> {
        if store.len() < 2 {
            return Err(ChartError::TooFewSamples(store.len()));
        }
        let layout = config.layout;
        let x_domain = store.position_bounds();
        let y_domain = config.y_domain.unwrap_or_else(|| {
            let (lo, hi) = store.y_extent();
            (lo.min(0.0), hi)
        });
        let mut x = LinearScale::new(x_domain, (0.0, layout.inner_width()));
        let mut y = LinearScale::new(y_domain, (layout.inner_height(), 0.0));
        if config.nice_x { x = x.nice(TICK_COUNT); }
        if config.nice_y { y = y.nice(TICK_COUNT); }

        let current = x_domain.0;
        let line = build_full_path(store.as_slice(), &x, &y, config.curve);
        let rest = line.first_point().unwrap_or_default();
        let animator = MarkerAnimator::new(clock, config.duration, config.easing, rest);
        let show_segment = config.show_segment;
        let mut chart = Self {
            config,
            store,
            x,
            y,
            line,
            segment: SampledPath::default(),
            animator,
            current,
            target: None,
            show_segment,
            status: String::new(),
        };
        chart.status = chart.format_position(current);
        debug!("{}: {} samples, x {:?}, y {:?}", chart.config.name, chart.store.len(), chart.x.domain(), chart.y.domain());
        Ok(chart)
    }

    /// Pick a random target and start animating towards it.
    ///
    /// Index charts draw uniformly from every index except the current one;
    /// x charts draw uniformly from the x extent.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Result<f64, ChartError> {
        if self.animator.is_animating() {
            return Err(ChartError::AnimationInProgress);
        }
        let target = self.pick_target(rng)?;
        self.advance_to(target)?;
        Ok(target)
    }

    fn pick_target<R: Rng>(&self, rng: &mut R) -> Result<f64, ChartError> {
        let (lo, hi) = self.store.position_bounds();
        // nothing to draw from but the current position
        if !(hi > lo) {
            return Err(ChartError::NoOtherTarget(self.current));
        }
        match self.store.order() {
            SampleOrder::ByIndex => {
                let n = self.store.len();
                let i = rng.gen_range(0..n - 1);
                // skip over the current index
                Ok(if i as f64 >= self.current { (i + 1) as f64 } else { i as f64 })
            }
            SampleOrder::ByX => loop {
                let x = lo + (hi - lo) * rng.gen::<f64>();
                if x != self.current {
                    return Ok(x);
                }
            },
        }
    }

    /// Start animating from the current position to `target`.
    ///
    /// Rejected while an animation runs, for the current position itself and
    /// for positions outside the data; nothing changes on rejection.
    pub fn advance_to(&mut self, target: f64) -> Result<(), ChartError> {
        if self.animator.is_animating() {
            return Err(ChartError::AnimationInProgress);
        }
        let (min, max) = self.store.position_bounds();
        if !(target >= min && target <= max) {
            return Err(ChartError::TargetOutOfRange { target, min, max });
        }
        if target == self.current {
            return Err(ChartError::TargetIsCurrent(target));
        }
        let order = self.store.order();
        match order {
            SampleOrder::ByIndex => {
                if self.store.at_position(target).is_none() {
                    return Err(ChartError::NotASample(target));
                }
            }
            SampleOrder::ByX => {
                if self.store.at_position(target).is_none() {
                    let y = match self.config.kind {
                        ChartKind::Sine => target.sin(),
                        ChartKind::RandomWalk => self.store.interpolate_y(target),
                    };
                    self.store.insert_sorted(Sample::new(target, y));
                    self.line = build_full_path(self.store.as_slice(), &self.x, &self.y, self.config.curve);
                }
            }
        }

        let bounds = segment_predicate(self.current, target, order);
        let segment = build_path(self.store.as_slice(), &self.x, &self.y, self.config.curve, |s, i| bounds.contains(s, i));
        let direction = Direction::between(self.current, target);
        debug!(
            "{}: advance {} -> {} ({:?}, {:.1}px)",
            self.config.name, self.current, target, direction, segment.length()
        );
        self.animator.begin(target, Tween::new(segment.clone(), direction))?;
        self.segment = segment;
        self.target = Some(target);
        self.status = self.format_position(target);
        Ok(())
    }

    /// Advance the animation to the clock's current time.
    pub fn tick(&mut self) -> Frame {
        let frame = self.animator.tick();
        if let Some(reached) = frame.finished {
            info!("{}: marker reached {}", self.config.name, self.format_position(reached));
            self.current = reached;
        } else if self.animator.is_animating() {
            trace!("{}: t={:.3} at ({:.1}, {:.1})", self.config.name, frame.progress, frame.point.x, frame.point.y);
        }
        frame
    }

    fn format_position(&self, position: f64) -> String {
        match self.store.order() {
            SampleOrder::ByIndex => format!("x = {}", position),
            SampleOrder::ByX => format!("x = {:.3}", position),
        }
    }

    /// Pixel coordinates of the sample at `position`.
    pub fn mapped(&self, position: f64) -> Option<Point> {
        self.store.at_position(position).map(|s| Point::new(self.x.map(s.x), self.y.map(s.y)))
    }

    pub fn toggle_segment(&mut self) -> bool {
        self.show_segment = !self.show_segment;
        self.show_segment
    }

    pub fn set_show_segment(&mut self, show: bool) { self.show_segment = show; }
    pub fn show_segment(&self) -> bool { self.show_segment }

    pub fn name(&self) -> &str { &self.config.name }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn samples(&self) -> &SampleStore { &self.store }
    pub fn x_scale(&self) -> &LinearScale { &self.x }
    pub fn y_scale(&self) -> &LinearScale { &self.y }
    pub fn line_path(&self) -> &SampledPath { &self.line }
    pub fn segment_path(&self) -> &SampledPath { &self.segment }
    pub fn current(&self) -> f64 { self.current }
    /// Most recently requested target.
    pub fn target(&self) -> Option<f64> { self.target }
    pub fn marker(&self) -> Point { self.animator.point() }
    pub fn is_animating(&self) -> bool { self.animator.is_animating() }
    /// Readout of the latest target (or the start position before any advance).
    pub fn status(&self) -> &str { &self.status }
    pub fn animator(&self) -> &MarkerAnimator<C> { &self.animator }

    pub fn x_axis(&self) -> Axis {
        match self.config.kind {
            ChartKind::Sine => {
                let ticks = stepped(-2.0, 2.0, 0.5).into_iter().map(|k| k * std::f64::consts::PI).collect();
                Axis::bottom(self.x, ticks, TickFormat::PiMultiples)
            }
            ChartKind::RandomWalk => Axis::bottom(self.x, self.x.ticks(TICK_COUNT), TickFormat::Plain),
        }
    }

    pub fn y_axis(&self) -> Axis {
        Axis::left(self.y, self.y.ticks(TICK_COUNT), TickFormat::Plain)
    }
}
