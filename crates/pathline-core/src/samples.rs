// File: crates/pathline-core/src/samples.rs
// Summary: Sample store for the random-walk and sine charts.
// Notes:
// - Random-walk stores are keyed by index and never change after generation.
// - Sine stores are keyed by x and only grow: chosen targets are inserted in
//   x order so later segments can start from a real sample.

use std::f64::consts::PI;

use rand::Rng;

use crate::error::ChartError;
use crate::grid::stepped;

/// One (x, y) data point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How positions address samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleOrder {
    /// Position is the insertion index; `x` equals the index.
    ByIndex,
    /// Position is the x value; samples stay sorted ascending by x.
    ByX,
}

impl SampleOrder {
    /// Position key used for segment selection and direction.
    #[inline]
    pub fn key(&self, sample: &Sample, index: usize) -> f64 {
        match self {
            SampleOrder::ByIndex => index as f64,
            SampleOrder::ByX => sample.x,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SampleStore {
    order: SampleOrder,
    samples: Vec<Sample>,
}

impl SampleStore {
    /// Index-ordered store from plain y values (x = index).
    pub fn from_values(values: &[f64]) -> Result<Self, ChartError> {
        let samples = values.iter().enumerate().map(|(i, &y)| Sample::new(i as f64, y)).collect::<Vec<_>>();
        Self::checked(SampleOrder::ByIndex, samples)
    }

    /// X-ordered store; input is sorted by x.
    pub fn from_points(mut points: Vec<Sample>) -> Result<Self, ChartError> {
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self::checked(SampleOrder::ByX, points)
    }

    /// Multiplicative random walk: `y[i] = y[i-1] * (1 + 0.5 * (u - 0.5))`.
    pub fn random_walk<R: Rng>(rng: &mut R, count: usize, start: f64) -> Result<Self, ChartError> {
        let mut last = start;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let next = last * (1.0 + 0.5 * (rng.gen::<f64>() - 0.5));
            values.push(next);
            last = next;
        }
        Self::from_values(&values)
    }

    /// Dense `sin` samples at `k * PI` for k in [-2, 2] stepping by `step`.
    pub fn sine(step: f64) -> Result<Self, ChartError> {
        let samples = stepped(-2.0, 2.0, step)
            .into_iter()
            .map(|k| {
                let x = k * PI;
                Sample::new(x, x.sin())
            })
            .collect();
        Self::checked(SampleOrder::ByX, samples)
    }

    /// Index stores need two samples; x stores need finite x values with at
    /// least two distinct ones (input already sorted).
    fn checked(order: SampleOrder, samples: Vec<Sample>) -> Result<Self, ChartError> {
        let usable = match order {
            SampleOrder::ByIndex => samples.len(),
            SampleOrder::ByX => {
                if samples.iter().any(|s| !s.x.is_finite()) {
                    return Err(ChartError::NonFiniteX);
                }
                let mut xs = samples.iter().map(|s| s.x).collect::<Vec<_>>();
                xs.dedup();
                xs.len()
            }
        };
        if usable < 2 {
            return Err(ChartError::TooFewSamples(usable));
        }
        Ok(Self { order, samples })
    }

    pub fn order(&self) -> SampleOrder { self.order }
    pub fn as_slice(&self) -> &[Sample] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn get(&self, index: usize) -> Option<&Sample> { self.samples.get(index) }

    /// Min/max x over all samples.
    pub fn x_extent(&self) -> (f64, f64) {
        extent(self.samples.iter().map(|s| s.x))
    }

    /// Min/max y over all samples.
    pub fn y_extent(&self) -> (f64, f64) {
        extent(self.samples.iter().map(|s| s.y))
    }

    /// Range of valid positions (index range or x extent).
    pub fn position_bounds(&self) -> (f64, f64) {
        match self.order {
            SampleOrder::ByIndex => (0.0, (self.samples.len() - 1) as f64),
            SampleOrder::ByX => self.x_extent(),
        }
    }

    /// Sample addressed by a position, if one sits exactly there.
    pub fn at_position(&self, position: f64) -> Option<&Sample> {
        match self.order {
            SampleOrder::ByIndex => {
                if position.fract() != 0.0 || position < 0.0 {
                    return None;
                }
                self.samples.get(position as usize)
            }
            SampleOrder::ByX => {
                let i = self.samples.partition_point(|s| s.x < position);
                self.samples.get(i).filter(|s| s.x == position)
            }
        }
    }

    /// Linear interpolation of y at `x` between the neighbouring samples
    /// (x-ordered stores); clamps to the end samples outside the extent.
    pub fn interpolate_y(&self, x: f64) -> f64 {
        let i = self.samples.partition_point(|s| s.x < x);
        match (i.checked_sub(1).and_then(|j| self.samples.get(j)), self.samples.get(i)) {
            (Some(a), Some(b)) if b.x > a.x => a.y + (b.y - a.y) * (x - a.x) / (b.x - a.x),
            (_, Some(b)) => b.y,
            (Some(a), None) => a.y,
            (None, None) => 0.0,
        }
    }

    /// Insert a sample at its x position. Returns the index it occupies;
    /// an existing sample at the same x is kept and its index returned.
    ///
    /// Only valid for x-ordered stores; index stores are immutable.
    pub fn insert_sorted(&mut self, sample: Sample) -> Option<usize> {
        if self.order != SampleOrder::ByX {
            return None;
        }
        let i = self.samples.partition_point(|s| s.x < sample.x);
        if self.samples.get(i).map_or(false, |s| s.x == sample.x) {
            return Some(i);
        }
        self.samples.insert(i, sample);
        Some(i)
    }
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
