//! Biome queries with a most-recent-region cache.

use cobalt_registry::biome::BiomeId;
use cobalt_registry::profile::{ProfileKind, WorldProfile};
use cobalt_registry::settings::{BiomeSettings, FlatSettings, GeneratorSettings};

use super::chain::LayerChain;
use super::grid::{BiomeGrid, Region, RegionError};

/// Biome source for one world.
///
/// Either a full layer chain or a constant rule for the flat and debug
/// profiles. Queries take `&mut self` because of the single-region cache:
/// one provider serves one generation worker, and concurrent workers each
/// own a provider (sharing the chain configuration is cheap - clone the
/// chain or rebuild it from the same seed).
#[derive(Debug)]
pub enum BiomeProvider {
    /// Chain-backed provider with the most recently computed grid cached.
    Layered {
        /// The stage chain queries evaluate.
        chain: LayerChain,
        /// Most recently computed grid; replaced whenever a query is not
        /// contained in it.
        cache: Option<BiomeGrid>,
    },
    /// Constant rule: every coordinate reports the same biome.
    Single {
        /// The biome reported everywhere.
        biome: BiomeId,
    },
}

impl BiomeProvider {
    /// Wrap a layer chain.
    #[must_use]
    pub const fn layered(chain: LayerChain) -> Self {
        Self::Layered { chain, cache: None }
    }

    /// Constant-biome provider.
    #[must_use]
    pub const fn single(biome: BiomeId) -> Self {
        Self::Single { biome }
    }

    /// Build the biome source a profile selects for a world.
    ///
    /// Flat worlds report the biome from their options string everywhere;
    /// debug worlds are all plains; every chain-backed kind gets the full
    /// pipeline, with the customized profile's assignment table taken from
    /// the options string.
    #[must_use]
    pub fn for_profile(profile: &WorldProfile, world_seed: i64, options: &str) -> Self {
        match profile.kind() {
            ProfileKind::Flat => Self::single(FlatSettings::from_options(options).biome),
            ProfileKind::DebugAllBlockStates => Self::single(BiomeId::PLAINS),
            kind => {
                let biomes = if kind == ProfileKind::Customized {
                    GeneratorSettings::from_options(options).biomes
                } else {
                    BiomeSettings::standard()
                };
                Self::layered(LayerChain::for_profile(kind, world_seed, biomes))
            }
        }
    }

    /// Biome at a single coordinate.
    #[must_use]
    pub fn biome_at(&mut self, x: i32, z: i32) -> BiomeId {
        let grid = self
            .biomes_in_rect(x, z, 1, 1)
            .expect("1x1 regions are always valid");
        grid.cells()[0]
    }

    /// Biomes over a rectangle.
    ///
    /// Served from the cached grid when the request is fully contained in
    /// it; otherwise recomputed through the chain and cached. Non-positive
    /// dimensions are rejected before any computation.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn biomes_in_rect(
        &mut self,
        x: i32,
        z: i32,
        width: i32,
        height: i32,
    ) -> Result<BiomeGrid, RegionError> {
        let region = Region::new(x, z, width, height)?;
        match self {
            Self::Single { biome } => Ok(BiomeGrid::filled(region, *biome)),
            Self::Layered { chain, cache } => {
                if let Some(cached) = cache.as_ref() {
                    if cached.region().contains(region) {
                        return Ok(cached.view(region));
                    }
                }
                let grid = chain.sample(region);
                *cache = Some(grid.clone());
                Ok(grid)
            }
        }
    }
}
