// File: crates/pathline-core/src/path.rs
// Summary: Path builder (linear or B-spline through mapped samples) and arc-length measurement.

use crate::geometry::Point;
use crate::samples::{Sample, SampleOrder};
use crate::scale::LinearScale;

/// Line segments per cubic when measuring.
const CUBIC_STEPS: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Curve {
    /// Straight segments between consecutive samples.
    #[default]
    Linear,
    /// Uniform cubic B-spline; starts and ends on the first/last sample of a
    /// run but only approximates the interior ones.
    Basis,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
}

/// One connected stretch of the path, flattened for measuring.
#[derive(Clone, Debug)]
struct Run {
    points: Vec<Point>,
    /// Cumulative length at each point, starting at 0.
    lengths: Vec<f64>,
    /// Path length before this run begins.
    offset: f64,
}

impl Run {
    fn new(start: Point, offset: f64) -> Self {
        Self { points: vec![start], lengths: vec![0.0], offset }
    }

    fn push(&mut self, p: Point) {
        let last = self.points[self.points.len() - 1];
        let total = self.lengths[self.lengths.len() - 1] + last.distance(p);
        self.points.push(p);
        self.lengths.push(total);
    }

    fn length(&self) -> f64 {
        self.lengths[self.lengths.len() - 1]
    }

    fn point_at(&self, s: f64) -> Point {
        // first vertex whose cumulative length reaches s
        let i = self.lengths.partition_point(|&l| l < s);
        if i == 0 {
            return self.points[0];
        }
        if i >= self.points.len() {
            return self.points[self.points.len() - 1];
        }
        let (l0, l1) = (self.lengths[i - 1], self.lengths[i]);
        let span = l1 - l0;
        if span <= 0.0 {
            return self.points[i];
        }
        self.points[i - 1].lerp(self.points[i], (s - l0) / span)
    }
}

/// Renderable path plus an arc-length index over it.
///
/// Runs separated by undefined samples are measured back to back: the jump
/// between them adds no length.
#[derive(Clone, Debug, Default)]
pub struct SampledPath {
    commands: Vec<PathCommand>,
    runs: Vec<Run>,
    length: f64,
}

impl SampledPath {
    fn from_commands(commands: Vec<PathCommand>) -> Self {
        let mut runs: Vec<Run> = Vec::new();
        let mut length = 0.0;
        let mut cursor = Point::default();
        for cmd in &commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    if let Some(run) = runs.last() {
                        length = run.offset + run.length();
                    }
                    runs.push(Run::new(p, length));
                    cursor = p;
                }
                PathCommand::LineTo(p) => {
                    if let Some(run) = runs.last_mut() {
                        run.push(p);
                    }
                    cursor = p;
                }
                PathCommand::CubicTo(c1, c2, end) => {
                    if let Some(run) = runs.last_mut() {
                        for k in 1..=CUBIC_STEPS {
                            let t = k as f64 / CUBIC_STEPS as f64;
                            run.push(cubic_point(cursor, c1, c2, end, t));
                        }
                    }
                    cursor = end;
                }
            }
        }
        if let Some(run) = runs.last() {
            length = run.offset + run.length();
        }
        Self { commands, runs, length }
    }

    pub fn commands(&self) -> &[PathCommand] { &self.commands }
    pub fn is_empty(&self) -> bool { self.runs.is_empty() }
    /// Number of connected runs (gaps split runs).
    pub fn run_count(&self) -> usize { self.runs.len() }

    /// Total arc length in pixels.
    pub fn length(&self) -> f64 { self.length }

    pub fn first_point(&self) -> Option<Point> {
        self.runs.first().map(|r| r.points[0])
    }

    pub fn last_point(&self) -> Option<Point> {
        self.runs.last().map(|r| r.points[r.points.len() - 1])
    }

    /// Point at arc length `s`, clamped to `[0, length]`.
    ///
    /// Speed along the path is constant in `s`: equal increments give equal
    /// travelled distance along the flattened outline.
    pub fn point_at_length(&self, s: f64) -> Option<Point> {
        if s <= 0.0 || s.is_nan() {
            return self.first_point();
        }
        if s >= self.length {
            return self.last_point();
        }
        // last run starting at or before s
        let i = self.runs.partition_point(|r| r.offset <= s).saturating_sub(1);
        let run = self.runs.get(i)?;
        Some(run.point_at(s - run.offset))
    }
}

fn cubic_point(p0: Point, c1: Point, c2: Point, p1: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Point::new(
        a * p0.x + b * c1.x + c * c2.x + d * p1.x,
        a * p0.y + b * c1.y + c * c2.y + d * p1.y,
    )
}

/// Build a path through every sample.
pub fn build_full_path(samples: &[Sample], x: &LinearScale, y: &LinearScale, curve: Curve) -> SampledPath {
    build_path(samples, x, y, curve, |_, _| true)
}

/// Build a path through the samples accepted by `defined`.
///
/// Consecutive rejected samples end the current run; the next accepted
/// sample starts a new one.
pub fn build_path<F>(samples: &[Sample], x: &LinearScale, y: &LinearScale, curve: Curve, defined: F) -> SampledPath
where
    F: Fn(&Sample, usize) -> bool,
{
    let mut commands = Vec::new();
    let mut run: Vec<Point> = Vec::new();
    for (i, s) in samples.iter().enumerate() {
        if defined(s, i) {
            run.push(Point::new(x.map(s.x), y.map(s.y)));
        } else if !run.is_empty() {
            emit_run(curve, &run, &mut commands);
            run.clear();
        }
    }
    if !run.is_empty() {
        emit_run(curve, &run, &mut commands);
    }
    SampledPath::from_commands(commands)
}

fn emit_run(curve: Curve, pts: &[Point], out: &mut Vec<PathCommand>) {
    out.push(PathCommand::MoveTo(pts[0]));
    match (curve, pts.len()) {
        (_, 1) => {}
        (Curve::Linear, _) | (Curve::Basis, 2) => {
            out.extend(pts[1..].iter().map(|&p| PathCommand::LineTo(p)));
        }
        (Curve::Basis, n) => {
            out.push(PathCommand::LineTo(weighted(&[(pts[0], 5.0), (pts[1], 1.0)], 6.0)));
            for k in 2..n {
                out.push(basis_segment(pts[k - 2], pts[k - 1], pts[k]));
            }
            // close the spline by repeating the last point, then land on it
            out.push(basis_segment(pts[n - 2], pts[n - 1], pts[n - 1]));
            out.push(PathCommand::LineTo(pts[n - 1]));
        }
    }
}

fn basis_segment(p0: Point, p1: Point, p2: Point) -> PathCommand {
    PathCommand::CubicTo(
        weighted(&[(p0, 2.0), (p1, 1.0)], 3.0),
        weighted(&[(p0, 1.0), (p1, 2.0)], 3.0),
        weighted(&[(p0, 1.0), (p1, 4.0), (p2, 1.0)], 6.0),
    )
}

fn weighted(terms: &[(Point, f64)], denom: f64) -> Point {
    let (x, y) = terms.iter().fold((0.0, 0.0), |(x, y), (p, w)| (x + p.x * w, y + p.y * w));
    Point::new(x / denom, y / denom)
}

/// Inclusive position bounds between two positions, independent of their order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentBounds {
    pub lo: f64,
    pub hi: f64,
    pub order: SampleOrder,
}

impl SegmentBounds {
    pub fn contains(&self, sample: &Sample, index: usize) -> bool {
        let k = self.order.key(sample, index);
        k >= self.lo && k <= self.hi
    }
}

/// Predicate that keeps samples whose position lies between `current` and `target`.
pub fn segment_predicate(current: f64, target: f64, order: SampleOrder) -> SegmentBounds {
    SegmentBounds { lo: current.min(target), hi: current.max(target), order }
}
