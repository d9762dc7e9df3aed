//! Benchmarks for the numkit-math solvers and approximations.
//!
//! Run with: cargo bench -p numkit-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use numkit_math::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn runge() -> Function<'static> {
    Function::named("1/(1+x**2)", |x| 1.0 / (1.0 + x * x))
}

fn dominant_matrix(n: usize) -> Matrix {
    let data: Vec<f64> = (0..n * n)
        .map(|k| {
            let (i, j) = (k / n, k % n);
            if i == j {
                n as f64 + 1.0
            } else {
                1.0 / (1.0 + (i + j) as f64)
            }
        })
        .collect();
    Matrix::from_row_slice(n, n, &data).unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_root_finding(c: &mut Criterion) {
    let f = |x: f64| (-x / 5.0).exp() - x.sin();
    let df = |x: f64| -(-x / 5.0).exp() / 5.0 - x.cos();
    let config = SolverConfig::default();

    let mut group = c.benchmark_group("root_finding");
    group.bench_function("bisection", |b| {
        b.iter(|| bisection(f, black_box(0.5), black_box(1.5), 1e-7))
    });
    group.bench_function("newton", |b| b.iter(|| newton(f, df, black_box(1.0), &config)));
    group.bench_function("square_root", |b| b.iter(|| square_root(black_box(1234.5))));
    group.finish();
}

fn bench_matrix_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_inverse");

    for size in [5, 11, 21] {
        let m = dominant_matrix(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &m, |b, m| {
            b.iter(|| m.inverse())
        });
    }
    group.finish();
}

fn bench_interpolation(c: &mut Criterion) {
    let f = runge();
    let config = InterpolationConfig::default().with_least_squares_points(4096);

    let mut group = c.benchmark_group("interpolation");
    group.sample_size(20);

    for order in [5, 10, 20] {
        group.bench_with_input(BenchmarkId::new("lagrange", order), &order, |b, &order| {
            b.iter(|| Interpolation::lagrange(&f, -5.0, 5.0, order))
        });
        group.bench_with_input(
            BenchmarkId::new("least_squares", order),
            &order,
            |b, &order| b.iter(|| Interpolation::least_squares(&f, -5.0, 5.0, order, &config)),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_root_finding,
    bench_matrix_inverse,
    bench_interpolation
);
criterion_main!(benches);
