//! Criterion benchmarks for layout engine operations.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the hot store and codec paths at realistic and
//! oversized report sizes (a report is typically a handful of blocks; the
//! larger sizes guard against accidental quadratic behavior).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use layout_engine::codec;
use layout_engine::core::block::BlockType;
use layout_engine::core::registry::BlockTypeRegistry;
use layout_engine::report::store::ReportStore;
use layout_engine::BlockId;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_report(registry: &BlockTypeRegistry, count: usize) -> ReportStore {
    let mut store = ReportStore::new();
    for i in 0..count {
        let tag = BlockType::ALL[i % BlockType::ALL.len()].as_str();
        let block = registry.instantiate(tag).expect("known tag");
        store.append(block).expect("fresh id");
    }
    store
}

fn ids_of(store: &ReportStore) -> Vec<BlockId> {
    store.blocks().iter().map(|b| b.id.clone()).collect()
}

// ---------------------------------------------------------------------------
// Store benchmarks
// ---------------------------------------------------------------------------

fn bench_append(c: &mut Criterion) {
    let registry = BlockTypeRegistry::new();
    let mut group = c.benchmark_group("store_append");

    for count in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            b.iter(|| black_box(build_report(&registry, n).len()));
        });
    }
    group.finish();
}

fn bench_move_before(c: &mut Criterion) {
    let registry = BlockTypeRegistry::new();
    let mut group = c.benchmark_group("store_move_before");

    for count in [10, 100, 1_000] {
        let store = build_report(&registry, count);
        let ids = ids_of(&store);
        let last = ids[ids.len() - 1].clone();
        let first = ids[0].clone();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter_batched(
                || store.clone(),
                |mut s| {
                    // Worst case: drag the last block to the front and back.
                    s.move_before(&last, &first);
                    s.move_before(&first, &last);
                    black_box(s.len())
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Codec benchmarks
// ---------------------------------------------------------------------------

fn bench_persist_round_trip(c: &mut Criterion) {
    let registry = BlockTypeRegistry::new();
    let mut group = c.benchmark_group("codec_round_trip");

    for count in [10, 100, 1_000] {
        let store = build_report(&registry, count);
        let document = codec::to_persisted(&store).expect("serializable");

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let doc = codec::to_persisted(&store).expect("serializable");
                let blocks = codec::from_persisted(&doc).expect("well-formed");
                black_box(blocks.len())
            });
        });

        // Parse-only, from a prebuilt document.
        group.bench_with_input(
            BenchmarkId::new("from_persisted", count),
            &count,
            |b, _| {
                b.iter(|| black_box(codec::from_persisted(&document).expect("well-formed").len()));
            },
        );
    }
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let registry = BlockTypeRegistry::new();
    let store = build_report(&registry, BlockType::ALL.len());

    c.bench_function("summarize_all_types", |b| {
        b.iter(|| {
            for block in store.blocks() {
                black_box(codec::summarize(block));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_append,
    bench_move_before,
    bench_persist_round_trip,
    bench_summarize
);
criterion_main!(benches);
