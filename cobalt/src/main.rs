//! Cobalt command-line entry point.
//!
//! Resolves a world profile from the registry, builds its biome provider
//! and terrain generator, and renders the configured region as a character
//! map on stdout. Mostly a debugging consumer of the generation surface;
//! chunk builders query the same APIs.

use std::path::PathBuf;

use cobalt_core::worldgen::BiomeProvider;
use cobalt_core::worldgen::select_generator;
use cobalt_registry::biome::BiomeId;
use cobalt_registry::registry::ProfileRegistry;
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Map glyph for a biome.
const fn glyph(biome: BiomeId) -> char {
    match biome {
        BiomeId::OCEAN => '~',
        BiomeId::FROZEN_OCEAN => '*',
        BiomeId::PLAINS => '.',
        BiomeId::DESERT => ':',
        BiomeId::FOREST => 'f',
        BiomeId::TAIGA => 't',
        BiomeId::ICE_PLAINS => 'i',
        BiomeId::BEACH => '_',
        BiomeId::JUNGLE => 'j',
        BiomeId::STONE_SHORE => '=',
        BiomeId::SAVANNA => 's',
        _ => '?',
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("cobalt.json5"), PathBuf::from);
    let config = Config::load(&path)?;

    let registry = ProfileRegistry::with_builtins();
    let profile = registry.by_name(&config.profile).unwrap_or_else(|| {
        tracing::warn!("unknown profile {:?}, using default", config.profile);
        registry
            .by_name("default")
            .expect("default profile is always registered")
    });
    tracing::info!(
        "world profile {:?} (id {}, generator version {}), seed {}",
        profile.name(),
        profile.id(),
        profile.generator_version(),
        config.seed
    );

    let mut provider =
        BiomeProvider::for_profile(&profile, config.seed, &config.generator_options);
    let terrain = select_generator(&profile, config.seed, &config.generator_options);

    let map = config.map;
    let grid = provider.biomes_in_rect(map.x, map.z, map.width, map.height)?;
    let mut line = String::with_capacity(map.width as usize);
    for z in map.z..map.z + map.height {
        line.clear();
        for x in map.x..map.x + map.width {
            line.push(glyph(grid.get(x, z)));
        }
        println!("{line}");
    }

    let mut min_height = i32::MAX;
    let mut max_height = i32::MIN;
    for z in map.z..map.z + map.height {
        for x in map.x..map.x + map.width {
            let height = terrain.height_at(x, z);
            min_height = min_height.min(height);
            max_height = max_height.max(height);
        }
    }
    tracing::info!(
        "terrain over the rendered region: height {min_height}..={max_height}, sea level {}, \
         min build height {}, spawn no lower than {}",
        terrain.sea_level(),
        terrain.min_build_height(),
        profile.min_spawn_height(terrain.sea_level())
    );

    Ok(())
}
