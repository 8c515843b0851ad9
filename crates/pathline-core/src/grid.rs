// File: crates/pathline-core/src/grid.rs
// Summary: Simple stepping helpers for sample and tick layout.

/// Values from `start` to `end` inclusive, stepping by `incr`.
///
/// Values are generated by index so small steps cannot stall. When `incr` is a
/// whole number of tenths each value is rounded to one decimal, which keeps
/// `-2.0 + 20 * 0.1` at exactly `0.0`.
pub fn stepped(start: f64, end: f64, incr: f64) -> Vec<f64> {
    if !(incr > 0.0) || !incr.is_finite() || !(start <= end) || !(end - start).is_finite() {
        return vec![start];
    }
    let tenths = incr * 10.0;
    let round_tenths = (tenths - tenths.round()).abs() < 1e-9;
    // tolerate a final value that lands a hair past `end`
    let n = ((end - start) / incr + 1e-9).floor() as usize;
    (0..=n)
        .map(|i| {
            let v = start + i as f64 * incr;
            if round_tenths { (v * 10.0).round() / 10.0 } else { v }
        })
        .collect()
}
