use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;
use prime_algebra::prime::{big, fixed};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("sieve 10000 primes", |b| {
        b.iter(|| fixed::primes().take(black_box(10_000)).last());
    });

    c.bench_function("trial division", |b| {
        b.iter(|| fixed::is_prime(black_box(1_000_000_000_039)));
    });

    // 2^127 - 1
    let m: BigInt = "170141183460469231731687303715884105727".parse().unwrap();
    c.bench_function("miller rabin", |b| {
        b.iter(|| big::is_prime(black_box(&m)));
    });

    c.bench_function("next probable prime", |b| {
        b.iter(|| big::next_probable_prime(black_box(&m)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
