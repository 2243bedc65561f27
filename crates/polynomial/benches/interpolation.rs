// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;
use sss_polynomial::{interpolate_at_zero, Fraction, Point, Polynomial};

fn create_test_points(threshold: usize) -> Vec<Point> {
    let coeffs = (0..threshold)
        .map(|i| BigInt::from(u64::MAX) * BigInt::from(i as i64 + 1))
        .collect();
    Polynomial::from_ascending_coefficients(coeffs).sample((1..=threshold as i64).map(BigInt::from))
}

fn benchmark_interpolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate_at_zero");

    for threshold in [2, 5, 10, 20] {
        let points = create_test_points(threshold);

        group.bench_function(format!("threshold_{}", threshold), |b| {
            b.iter(|| black_box(interpolate_at_zero(&points)))
        });
    }

    group.finish();
}

fn benchmark_fraction_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("fraction_sum");

    for terms in [10, 100, 1000] {
        let fractions: Vec<Fraction> = (1..=terms)
            .map(|i| Fraction::new(BigInt::from(i), BigInt::from(i + 1)).unwrap())
            .collect();

        group.bench_function(format!("terms_{}", terms), |b| {
            b.iter(|| {
                black_box(
                    fractions
                        .iter()
                        .fold(Fraction::zero(), |total, f| total.add(f)),
                )
            })
        });
    }

    group.finish();
}

fn benchmark_polynomial_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_evaluation");

    for degree in [10, 50, 100, 500] {
        let poly = Polynomial::from_ascending_coefficients(
            (0..=degree).map(|i| BigInt::from(i as i64 + 1)).collect(),
        );
        let x = BigInt::from(42);

        group.bench_function(format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly.evaluate(&x)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_interpolation,
    benchmark_fraction_sum,
    benchmark_polynomial_evaluation
);
criterion_main!(benches);
