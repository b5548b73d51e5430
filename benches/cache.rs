//! Throughput benchmarks for the bounded cache

use bounded_cache::BoundedCache;
use criterion::{criterion_group, criterion_main, Criterion};
use tokio::runtime::Runtime;

fn bench_insert_within_capacity(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("insert_1000_within_capacity", |b| {
        b.to_async(&rt).iter(|| async {
            let cache = BoundedCache::with_capacity(10_000).unwrap();
            for i in 0..1000u32 {
                cache.insert(i, i).await;
            }
        });
    });
}

fn bench_insert_with_evictions(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    c.bench_function("insert_1000_bounded_100", |b| {
        b.to_async(&rt).iter(|| async {
            let cache = BoundedCache::with_capacity(100).unwrap();
            for i in 0..1000u32 {
                cache.insert(i, i).await;
            }
        });
    });
}

fn bench_get_hit(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let cache = rt.block_on(async {
        let cache = BoundedCache::with_capacity(1000).unwrap();
        for i in 0..1000u32 {
            cache.insert(i, i).await;
        }
        cache
    });

    c.bench_function("get_1000_hits", |b| {
        b.to_async(&rt).iter(|| async {
            for i in 0..1000u32 {
                cache.get(&i).await;
            }
        });
    });
}

criterion_group!(
    benches,
    bench_insert_within_capacity,
    bench_insert_with_evictions,
    bench_get_hit
);
criterion_main!(benches);
