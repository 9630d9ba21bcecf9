//! World generation pipeline.
//!
//! The pipeline is a chain of deterministic grid transformations: a seed
//! layer assigns coarse land/ocean classes, zoom layers double resolution,
//! the biome-assignment layer maps climate groups to concrete biomes, and
//! the edge layer rewrites class boundaries into shore biomes. A
//! [`BiomeProvider`] wraps the chain (or a constant rule for flat and
//! debug profiles) behind rectangle queries with a most-recent-region
//! cache, and [`select_generator`] picks the terrain generator a profile
//! asks for.

mod chain;
mod grid;
mod layer;
mod provider;
mod terrain;

pub use chain::LayerChain;
pub use grid::{BiomeGrid, Region, RegionError};
pub use layer::LayerStage;
pub use provider::BiomeProvider;
pub use terrain::{
    DebugTerrain, FlatTerrain, StandardTerrain, TerrainGenerator, select_generator,
};
