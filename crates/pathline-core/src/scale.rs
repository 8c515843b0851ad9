// File: crates/pathline-core/src/scale.rs
// Summary: Linear domain-to-pixel scale with inverse mapping, nice domains and round ticks.

/// Domain value (data space).
pub type Value = f64;

/// Step thresholds for the 1/2/5 x 10^k tick rule.
const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Affine map from a domain interval onto a pixel range.
///
/// The pixel range may be inverted (`p0 > p1`), which is how the value axis
/// grows upward on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: Value,
    d1: Value,
    p0: f64,
    p1: f64,
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, p0: range.0, p1: range.1 }
    }

    pub fn domain(&self) -> (Value, Value) { (self.d0, self.d1) }
    pub fn range(&self) -> (f64, f64) { (self.p0, self.p1) }

    /// True when the domain collapses to a single value.
    pub fn is_degenerate(&self) -> bool {
        self.d1 == self.d0 || !(self.d1 - self.d0).is_finite()
    }

    /// Map a domain value to pixels.
    ///
    /// Endpoints are exact: `map(d0) == p0`, `map(d1) == p1`. A degenerate
    /// domain maps every value to the middle of the pixel range.
    #[inline]
    pub fn map(&self, v: Value) -> f64 {
        if self.is_degenerate() {
            return (self.p0 + self.p1) * 0.5;
        }
        let t = (v - self.d0) / (self.d1 - self.d0);
        self.p0 * (1.0 - t) + self.p1 * t
    }

    /// Map pixels back to the domain.
    #[inline]
    pub fn invert(&self, px: f64) -> Value {
        if self.p1 == self.p0 {
            return self.d0;
        }
        let t = (px - self.p0) / (self.p1 - self.p0);
        self.d0 * (1.0 - t) + self.d1 * t
    }

    /// Extend the domain outward so both ends land on round tick steps.
    pub fn nice(mut self, count: usize) -> Self {
        let reversed = self.d1 < self.d0;
        let (mut start, mut stop) = if reversed { (self.d1, self.d0) } else { (self.d0, self.d1) };
        let mut prestep = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        if reversed { self.d0 = stop; self.d1 = start; } else { self.d0 = start; self.d1 = stop; }
        self
    }

    /// Round tick values inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        let (lo, hi) = if self.d0 <= self.d1 { (self.d0, self.d1) } else { (self.d1, self.d0) };
        ticks(lo, hi, count)
    }
}

/// Signed tick step: positive values are the step itself, negative values
/// are the reciprocal (keeps small steps free of rounding error).
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !(step > 0.0) || !step.is_finite() {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = step_factor(error);
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

fn step_factor(error: f64) -> f64 {
    if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 }
}

/// Round tick values covering `[start, stop]` (ascending input).
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let inc = tick_increment(start, stop, count);
    if inc == 0.0 {
        return Vec::new();
    }
    if inc > 0.0 {
        let i0 = (start / inc).ceil() as i64;
        let i1 = (stop / inc).floor() as i64;
        (i0..=i1).map(|i| i as f64 * inc).collect()
    } else {
        let inv = -inc;
        let i0 = (start * inv).ceil() as i64;
        let i1 = (stop * inv).floor() as i64;
        (i0..=i1).map(|i| i as f64 / inv).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_rounds_outward() {
        let s = LinearScale::new((0.0, 7.3), (0.0, 100.0)).nice(10);
        assert_eq!(s.domain(), (0.0, 8.0));
        let s = LinearScale::new((0.0, 19.0), (0.0, 760.0)).nice(10);
        assert_eq!(s.domain(), (0.0, 20.0));
    }

    #[test]
    fn nice_settles_on_a_stable_step() {
        let s = LinearScale::new((-1.5, 1.5), (270.0, 0.0)).nice(10);
        assert_eq!(s.domain(), (-2.0, 2.0));
    }

    #[test]
    fn nice_keeps_reversed_domains_reversed() {
        let s = LinearScale::new((7.3, 0.0), (0.0, 100.0)).nice(10);
        assert_eq!(s.domain(), (8.0, 0.0));
    }

    #[test]
    fn ticks_are_round_and_inside() {
        let t = ticks(-2.0, 2.0, 10);
        assert_eq!(t, vec![-2.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0]);
        assert!(t.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(ticks(0.0, 20.0, 10), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0]);
    }

    #[test]
    fn invert_undoes_map() {
        let s = LinearScale::new((-2.0, 2.0), (270.0, 0.0));
        for v in [-2.0, -0.5, 0.0, 1.25, 2.0] {
            assert!((s.invert(s.map(v)) - v).abs() < 1e-12);
        }
    }
}
