// ============================================================================
// Mixture Solver Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Rational Arithmetic - Exact add/mul/compare on reduced fractions
// 2. Simple Mix - Two-component alligation end to end
// 3. Standard Mode - Pairwise enumeration as N grows
// 4. Priority Mode - Rank-ordered saturation as N grows
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mixture_solver::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

fn solver() -> MixtureSolver {
    MixtureSolverBuilder::new()
        .max_components(None)
        .build(Arc::new(NoOpEventHandler))
        .unwrap()
}

/// N components with intensities spread over [5, 95] and mixed ranks.
fn components(n: usize) -> Vec<Component> {
    (0..n)
        .map(|i| {
            let intensity = Rational::new(5 * 100 + (i as i128 * 9000) / n as i128, 100).unwrap();
            Component::new(format!("C{}", i), intensity).with_priority(((i * 7) % n) as u32 + 1)
        })
        .collect()
}

// ============================================================================
// Rational Arithmetic
// ============================================================================

fn benchmark_rational_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("rational");

    let a = Rational::new(355, 113).unwrap();
    let b = Rational::new(-22, 7).unwrap();

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(black_box(a).checked_add(black_box(b))))
    });
    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(black_box(a).checked_mul(black_box(b))))
    });
    group.bench_function("cmp", |bench| {
        bench.iter(|| black_box(black_box(a).cmp(&black_box(b))))
    });
    group.bench_function("parse", |bench| {
        bench.iter(|| black_box("12.3456".parse::<Rational>()))
    });

    group.finish();
}

// ============================================================================
// Simple Mix
// ============================================================================

fn benchmark_simple_mix(c: &mut Criterion) {
    let solver = solver();
    let request = MixRequest::simple(
        Rational::from_integer(70),
        Rational::from_integer(95),
        Rational::from_integer(85),
        Rational::from_integer(230),
    )
    .unwrap();

    c.bench_function("simple_mix_report", |b| {
        b.iter(|| black_box(solver.report(black_box(&request))))
    });
}

// ============================================================================
// Complex Modes
// ============================================================================

fn benchmark_standard_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_mode");
    let solver = solver();

    for n in [3usize, 10, 26, 100].iter() {
        let request = MixRequest::complex(
            components(*n),
            Rational::from_integer(50),
            Rational::from_integer(1000),
            MixMode::Standard,
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &request, |b, request| {
            b.iter(|| black_box(solver.solve(request)))
        });
    }

    group.finish();
}

fn benchmark_priority_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("priority_mode");
    let solver = solver();

    for n in [3usize, 10, 26, 100].iter() {
        let request = MixRequest::complex(
            components(*n),
            Rational::from_integer(50),
            Rational::from_integer(1000),
            MixMode::Priority,
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n), &request, |b, request| {
            b.iter(|| black_box(solver.solve(request)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_rational_ops,
    benchmark_simple_mix,
    benchmark_standard_mode,
    benchmark_priority_mode
);

criterion_main!(benches);
