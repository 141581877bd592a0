//! Benchmarks for the integer square root solvers.
//!
//! Compares the library primitive against the Babylonian iteration at the
//! bottom and top of the range the random source draws from.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use entities_numerics::{U1024, U2048};
use usecases_sqrt::{babylonian_sqrt, library_sqrt};

fn bench_sqrt_1024(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt_1024");

    let inputs = [
        ("2^1000", U1024::power_of_two(1000).unwrap()),
        ("max", U1024::max_value()),
    ];
    for (label, n) in inputs.iter() {
        group.bench_with_input(BenchmarkId::new("library", label), n, |b, n| {
            b.iter(|| library_sqrt(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("babylonian", label), n, |b, n| {
            b.iter(|| babylonian_sqrt(black_box(n)).unwrap())
        });
    }

    group.finish();
}

fn bench_sqrt_2048(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt_2048");
    let n = U2048::max_value();

    group.bench_function("library", |b| b.iter(|| library_sqrt(black_box(&n))));
    group.bench_function("babylonian", |b| {
        b.iter(|| babylonian_sqrt(black_box(&n)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_sqrt_1024, bench_sqrt_2048);
criterion_main!(benches);
