//! Benchmarks for the concurrency-limited pipeline and the collector.
//!
//! # Benchmark Categories
//!
//! 1. **Pipeline map**: `p(items).map(..)` at several concurrency limits
//! 2. **Pipeline map + filter**: two recorded stages per item
//! 3. **Collector**: add-then-resolve cycles

#![cfg(feature = "promise")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tidbits::promise::{PromiseOptions, p_collect_with, p_with};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
}

fn options_for(limit: usize) -> PromiseOptions {
    PromiseOptions::new().with_concurrency(limit)
}

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn benchmark_pipeline_map(criterion: &mut Criterion) {
    let runtime = runtime();
    let mut group = criterion.benchmark_group("pipeline_map");

    for size in [10, 100, 1000] {
        for limit in [1, 8, size] {
            group.bench_with_input(
                BenchmarkId::new(format!("limit_{limit}"), size),
                &size,
                |bencher, &size| {
                    bencher.to_async(&runtime).iter(|| async move {
                        let values = p_with(0..size, options_for(limit))
                            .map(|value, _| async move { Ok::<_, ()>(black_box(value * 2)) })
                            .await;
                        black_box(values)
                    });
                },
            );
        }
    }

    group.finish();
}

fn benchmark_pipeline_map_filter(criterion: &mut Criterion) {
    let runtime = runtime();
    let mut group = criterion.benchmark_group("pipeline_map_filter");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            bencher.to_async(&runtime).iter(|| async move {
                let values = p_with(0..size, options_for(8))
                    .map(|value, _| async move { Ok::<_, ()>(value + 1) })
                    .filter(|value, _| {
                        let keep = value % 2 == 0;
                        async move { Ok(keep) }
                    })
                    .await;
                black_box(values)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Collector Benchmarks
// =============================================================================

fn benchmark_collector(criterion: &mut Criterion) {
    let runtime = runtime();
    let mut group = criterion.benchmark_group("collector_resolve");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            bencher.to_async(&runtime).iter(|| async move {
                let mut collector = p_collect_with::<usize, ()>(options_for(16));
                collector.add_all((0..size).map(|value| async move { Ok(black_box(value)) }));
                black_box(collector.resolve().await)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pipeline_map,
    benchmark_pipeline_map_filter,
    benchmark_collector
);
criterion_main!(benches);
