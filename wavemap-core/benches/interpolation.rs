//! IDW throughput at survey-sized inputs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wavemap_core::{IdwInterpolator, SignalSample};

fn survey(points: usize) -> Vec<SignalSample> {
    (0..points)
        .map(|i| {
            let x = (i * 37 % 101) as f64;
            let y = (i * 61 % 101) as f64;
            let rssi = -40 - (i as i32 * 7 % 50);
            SignalSample::single(x, y, rssi).expect("valid sample")
        })
        .collect()
}

fn bench_default_grid(c: &mut Criterion) {
    let interpolator = IdwInterpolator::default();
    let mut group = c.benchmark_group("idw_100x100");

    for points in [8usize, 32, 128] {
        let samples = survey(points);
        group.bench_with_input(BenchmarkId::from_parameter(points), &samples, |b, s| {
            b.iter(|| interpolator.interpolate_default(black_box(s)))
        });
    }
    group.finish();
}

fn bench_value_at(c: &mut Criterion) {
    let samples = survey(32);
    let interpolator = IdwInterpolator::new(2.0);
    c.bench_function("idw_value_at_32", |b| {
        b.iter(|| interpolator.value_at(black_box(&samples), black_box(33.3), black_box(66.6)))
    });
}

criterion_group!(benches, bench_default_grid, bench_value_at);
criterion_main!(benches);
