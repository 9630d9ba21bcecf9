#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use cobalt_core::worldgen::{BiomeProvider, LayerChain, Region};
use cobalt_registry::profile::ProfileKind;
use cobalt_registry::settings::BiomeSettings;

fn default_chain(seed: i64) -> LayerChain {
    LayerChain::for_profile(ProfileKind::Default, seed, BiomeSettings::standard())
}

// ── Chain evaluation ────────────────────────────────────────────────────────

fn bench_chain_single_chunk(c: &mut Criterion) {
    let chain = default_chain(0);
    let rect = Region::new(0, 0, 16, 16).expect("valid region");

    c.bench_function("chain_single_chunk", |b| {
        b.iter(|| black_box(chain.sample(black_box(rect))));
    });
}

fn bench_chain_region_sizes(c: &mut Criterion) {
    let chain = default_chain(0);

    let mut group = c.benchmark_group("chain_region");
    for side in [16, 64, 256] {
        let rect = Region::new(-side / 2, -side / 2, side, side).expect("valid region");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}")),
            &rect,
            |b, &rect| {
                b.iter(|| black_box(chain.sample(rect)));
            },
        );
        group.throughput(criterion::Throughput::Elements((side * side) as u64));
    }
    group.finish();
}

// ── Provider cache ──────────────────────────────────────────────────────────

fn bench_provider_cached_subrects(c: &mut Criterion) {
    c.bench_function("provider_cached_subrects", |b| {
        let mut provider = BiomeProvider::layered(default_chain(0));
        // Warm the cache once; the measured queries are all contained.
        let _ = provider.biomes_in_rect(-64, -64, 128, 128);
        b.iter(|| {
            for cx in -3..=3 {
                for cz in -3..=3 {
                    let grid = provider.biomes_in_rect(cx * 16, cz * 16, 16, 16);
                    black_box(grid.expect("valid query"));
                }
            }
        });
    });
}

fn bench_provider_point_queries(c: &mut Criterion) {
    c.bench_function("provider_point_queries", |b| {
        let mut provider = BiomeProvider::layered(default_chain(0));
        let _ = provider.biomes_in_rect(-64, -64, 128, 128);
        b.iter(|| {
            for x in -32..32 {
                black_box(provider.biome_at(x, -x));
            }
        });
    });
}

// ── Chain construction ──────────────────────────────────────────────────────

fn bench_chain_creation(c: &mut Criterion) {
    c.bench_function("chain_creation", |b| {
        b.iter(|| black_box(default_chain(black_box(0))));
    });
}

criterion_group!(
    benches,
    bench_chain_single_chunk,
    bench_chain_region_sizes,
    bench_provider_cached_subrects,
    bench_provider_point_queries,
    bench_chain_creation,
);
criterion_main!(benches);
