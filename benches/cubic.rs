// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for each regime of the solver.

use cardano::{Cubic, Tolerance};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Solve one cubic from each regime.
pub fn solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    let cases = [
        ("one real", Cubic::new(1.0, 0.0, 0.0, -1.0)),
        ("repeated real", Cubic::new(1.0, 0.0, -3.0, 2.0)),
        ("three real", Cubic::new(1.0, -6.0, 11.0, -6.0)),
    ];
    for (name, cubic) in cases {
        group.bench_function(name, |b| b.iter(|| black_box(cubic).solve()));
    }
    group.bench_function("three real, exact", |b| {
        b.iter(|| black_box(cases[2].1).solve_with(Tolerance::EXACT))
    });
}

criterion_group!(benches, solve);
criterion_main!(benches);
