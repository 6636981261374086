use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use tracestat::{bootstrap, log_smooth, smooth, LogBinner, Signal};

fn bench_smoothing(c: &mut Criterion) {
    let x = Signal::from_fn(4, 100_000, |r, j| ((j as f64) * 1e-3 + r as f64).sin());

    let mut group = c.benchmark_group("smoothing");
    group.sample_size(20);
    group.bench_function("log_partition_500", |b| {
        b.iter(|| black_box(LogBinner::new(500).partition(black_box(100_000)).unwrap()));
    });
    group.bench_function("log_smooth_4x100k_500", |b| {
        b.iter(|| black_box(log_smooth(&x, 500, true).unwrap()));
    });
    group.bench_function("smooth_4x100k_500", |b| {
        b.iter(|| black_box(smooth(&x, 500, false, true).unwrap()));
    });
    group.finish();
}

fn bench_bootstrap(c: &mut Criterion) {
    let a: Vec<f64> = (0..1_000).map(|i| (i as f64).ln_1p()).collect();

    c.bench_function("bootstrap_1k_x_1000", |b| {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        b.iter(|| black_box(bootstrap(&a, &mut rng, 1_000).unwrap()));
    });
}

criterion_group!(benches, bench_smoothing, bench_bootstrap);
criterion_main!(benches);
