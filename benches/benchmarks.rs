//! Benchmarks for perceptron operations.

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use perceptron_rs::{
    Boundary, Config, Dataset, FitOptions, Perceptron, Weights, utils::rng_from_seed
};

fn dataset(n_points: usize) -> Dataset {
    let config = Config::builder().points(n_points).build().unwrap();
    Dataset::generate(&config, Weights::new(0.5, 1.0, -2.0), &mut rng_from_seed(42)).unwrap()
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_misclassified");

    for n_points in [10, 100, 1000, 10_000] {
        let data = dataset(n_points);
        let w = Weights::new(0.5, 1.0, -2.0);

        group.bench_with_input(BenchmarkId::from_parameter(n_points), &n_points, |b, _| {
            b.iter(|| black_box(data.first_misclassified(black_box(&w))));
        });
    }

    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for n_points in [10, 100, 1000] {
        let data = dataset(n_points);

        group.bench_with_input(BenchmarkId::from_parameter(n_points), &n_points, |b, _| {
            b.iter(|| {
                let mut p = Perceptron::new(&data, Weights::default());
                black_box(p.fit(FitOptions::new().with_max_corrections(1_000_000)))
            });
        });
    }

    group.finish();
}

fn bench_boundary(c: &mut Criterion) {
    let w = Weights::new(3.0, -1.5, 0.75);

    c.bench_function("boundary_100", |b| {
        b.iter(|| black_box(Boundary::sample(black_box(&w), 20.0, 100)));
    });
}

fn bench_generate(c: &mut Criterion) {
    let config = Config::builder().points(1000).build().unwrap();
    let reference = Weights::new(0.5, 1.0, -2.0);

    c.bench_function("generate_1000", |b| {
        b.iter(|| {
            let mut rng = rng_from_seed(7);
            black_box(Dataset::generate(&config, reference, &mut rng))
        });
    });
}

criterion_group!(benches, bench_scan, bench_fit, bench_boundary, bench_generate);
criterion_main!(benches);
