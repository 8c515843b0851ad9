// File: crates/pathline-core/tests/scale.rs
// Purpose: Linear scale endpoints, monotonicity and the degenerate-domain fallback.

use std::f64::consts::PI;

use pathline_core::LinearScale;

#[test]
fn endpoints_map_exactly() {
    let cases = [
        ((0.0, 19.0), (0.0, 760.0)),
        ((-2.0 * PI, 2.0 * PI), (0.0, 760.0)),
        ((0.0, 7.3), (270.0, 0.0)),
        ((-1.6, 1.6), (270.0, 0.0)),
        ((0.1, 0.7), (0.3, 0.9)),
        ((3.0, -3.0), (10.0, 20.0)),
    ];
    for (d, r) in cases {
        let s = LinearScale::new(d, r);
        assert_eq!(s.map(d.0), r.0, "map(d0) for {:?} -> {:?}", d, r);
        assert_eq!(s.map(d.1), r.1, "map(d1) for {:?} -> {:?}", d, r);
    }
}

#[test]
fn map_follows_range_direction() {
    let up = LinearScale::new((0.0, 10.0), (0.0, 500.0));
    let down = LinearScale::new((0.0, 10.0), (270.0, 0.0));
    let values = (0..=40).map(|i| -5.0 + i as f64 * 0.5).collect::<Vec<_>>();
    for w in values.windows(2) {
        assert!(up.map(w[1]) > up.map(w[0]));
        assert!(down.map(w[1]) < down.map(w[0]));
    }
}

#[test]
fn midpoint_maps_to_middle() {
    let s = LinearScale::new((-1.5, 1.5), (270.0, 0.0));
    assert!((s.map(0.0) - 135.0).abs() < 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let s = LinearScale::new((5.0, 5.0), (0.0, 100.0));
    assert!(s.is_degenerate());
    for v in [5.0, 0.0, -1e9, 1e9, f64::NAN] {
        assert_eq!(s.map(v), 50.0);
    }
    // nice() must not break the fallback either
    assert_eq!(s.nice(10).map(123.0), 50.0);
}

#[test]
fn nice_widens_random_walk_domains() {
    let s = LinearScale::new((0.0, 6.37), (270.0, 0.0)).nice(10);
    let (d0, d1) = s.domain();
    assert_eq!(d0, 0.0);
    assert!(d1 >= 6.37 && d1 <= 7.0, "got {d1}");
    assert_eq!(s.range(), (270.0, 0.0));
}
