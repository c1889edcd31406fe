//! Criterion micro-benchmarks for append, checked access and removal.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynarr::DynArray;
use dynarr_bench::{churn, SIZES};
use dynarr_test_utils::fixtures::sequence;

/// Benchmark: n appends into a fresh one-slot array (includes every doubling).
fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for n in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut a = DynArray::new();
                for i in 0..n {
                    a.push(i);
                }
                black_box(a.len());
            });
        });
    }
    group.finish();
}

/// Benchmark: sum every element through the checked and unchecked tiers.
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    for n in SIZES {
        let a = sequence(n);
        group.bench_with_input(BenchmarkId::new("checked", n), &a, |b, a| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..a.len() {
                    sum = sum.wrapping_add(*a.get(i).unwrap());
                }
                black_box(sum);
            });
        });
        group.bench_with_input(BenchmarkId::new("unchecked", n), &a, |b, a| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..a.len() {
                    // SAFETY: i < len.
                    sum = sum.wrapping_add(unsafe { *a.get_unchecked(i) });
                }
                black_box(sum);
            });
        });
    }
    group.finish();
}

/// Benchmark: remove from the front until empty (worst-case shifting).
fn bench_remove_front(c: &mut Criterion) {
    c.bench_function("remove_front_1k", |b| {
        b.iter_batched(
            || sequence(1_000),
            |mut a| {
                while !a.is_empty() {
                    black_box(a.remove(0).unwrap());
                }
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: mixed append / read / remove workload.
fn bench_churn(c: &mut Criterion) {
    c.bench_function("churn_10k", |b| {
        b.iter(|| {
            let mut a = DynArray::new();
            black_box(churn(&mut a, 10_000));
        });
    });
}

criterion_group!(benches, bench_push, bench_get, bench_remove_front, bench_churn);
criterion_main!(benches);
