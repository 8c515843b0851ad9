use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathline_core::{build_full_path, Curve, LinearScale, SampleStore};

fn store(n: usize) -> SampleStore {
    let values = (0..n).map(|i| (i as f64 * 0.05).sin() * 3.0 + 5.0).collect::<Vec<_>>();
    SampleStore::from_values(&values).unwrap()
}

fn scales(n: usize) -> (LinearScale, LinearScale) {
    let x = LinearScale::new((0.0, (n - 1) as f64), (0.0, 760.0));
    let y = LinearScale::new((0.0, 10.0), (270.0, 0.0));
    (x, y)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_path");
    for &n in &[20usize, 1_000, 10_000] {
        let s = store(n);
        let (x, y) = scales(n);
        for curve in [Curve::Linear, Curve::Basis] {
            group.bench_with_input(BenchmarkId::new(format!("{curve:?}"), n), &n, |b, _| {
                b.iter(|| black_box(build_full_path(s.as_slice(), &x, &y, curve)))
            });
        }
    }
    group.finish();
}

fn bench_point_at_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_at_length");
    for &n in &[20usize, 10_000] {
        let s = store(n);
        let (x, y) = scales(n);
        let path = build_full_path(s.as_slice(), &x, &y, Curve::Basis);
        let len = path.length();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                // one 2 s animation at 60 fps
                for i in 0..=120 {
                    black_box(path.point_at_length(len * i as f64 / 120.0));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_point_at_length);
criterion_main!(benches);
