//! Layer chain construction and evaluation.

use cobalt_registry::profile::ProfileKind;
use cobalt_registry::settings::{BiomeSettings, EdgeRuleSet};

use super::grid::{BiomeGrid, Region};
use super::layer::LayerStage;

/// An ordered sequence of layer stages sharing one world seed.
///
/// Stage `i > 0` reads stage `i - 1`; stage 0 is the root. The chain is
/// immutable after construction and holds no evaluation state, so one
/// chain value can back any number of providers.
#[derive(Debug, Clone)]
pub struct LayerChain {
    world_seed: i64,
    stages: Vec<LayerStage>,
}

impl LayerChain {
    /// Build a chain from an explicit stage list.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty or the first stage needs an upstream;
    /// both are construction-site bugs.
    #[must_use]
    pub fn new(world_seed: i64, stages: Vec<LayerStage>) -> Self {
        assert!(!stages.is_empty(), "layer chain needs at least one stage");
        assert!(
            matches!(stages[0], LayerStage::Island { .. }),
            "layer chain must start with a root stage"
        );
        Self { world_seed, stages }
    }

    /// Build the biome chain for a chain-backed profile kind.
    ///
    /// Callers resolve the kind through the registry first; flat and debug
    /// profiles use a constant biome rule and never construct a chain.
    ///
    /// The shape is: coarse land/ocean seeding, two zooms (four for large
    /// biomes, quadrupling biome footprint), climate-group biome
    /// assignment, two zooms, coastline edges, and two final zooms to
    /// reach output resolution. Amplified shares the default layout -
    /// amplification changes terrain height, not biome placement.
    #[must_use]
    pub fn for_profile(kind: ProfileKind, world_seed: i64, biomes: BiomeSettings) -> Self {
        let mut stages = vec![
            LayerStage::Island {
                salt: 1,
                land_one_in: 10,
            },
            LayerStage::Zoom { salt: 2000 },
            LayerStage::Zoom { salt: 2001 },
        ];
        if kind == ProfileKind::LargeBiomes {
            stages.push(LayerStage::Zoom { salt: 2002 });
            stages.push(LayerStage::Zoom { salt: 2003 });
        }
        stages.push(LayerStage::BiomeAssign {
            salt: 200,
            settings: biomes,
        });
        stages.push(LayerStage::Zoom { salt: 1000 });
        stages.push(LayerStage::Zoom { salt: 1001 });
        stages.push(LayerStage::Edge {
            rules: EdgeRuleSet::standard(),
        });
        stages.push(LayerStage::Zoom { salt: 1002 });
        stages.push(LayerStage::Zoom { salt: 1003 });

        log::debug!("built {kind:?} biome chain with {} stages", stages.len());
        Self::new(world_seed, stages)
    }

    /// Number of stages in the chain.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Evaluate the full chain over a region.
    #[must_use]
    pub fn sample(&self, region: Region) -> BiomeGrid {
        self.sample_stage(self.stages.len() - 1, region)
    }

    /// Evaluate the chain up to and including `index` over a region.
    ///
    /// Exposed so stages can be tested and inspected in isolation; the
    /// provider only ever samples the final stage.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn sample_stage(&self, index: usize, region: Region) -> BiomeGrid {
        let stage = &self.stages[index];
        let upstream = stage.upstream_region(region).map(|upstream_region| {
            assert!(index > 0, "non-root stage at the front of the chain");
            self.sample_stage(index - 1, upstream_region)
        });
        stage.apply(self.world_seed, region, upstream.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::LayerChain;
    use crate::worldgen::grid::Region;
    use crate::worldgen::layer::LayerStage;
    use cobalt_registry::profile::ProfileKind;
    use cobalt_registry::settings::BiomeSettings;

    fn region(x: i32, z: i32, width: i32, height: i32) -> Region {
        Region::new(x, z, width, height).expect("valid region")
    }

    #[test]
    fn default_chain_shape() {
        let chain = LayerChain::for_profile(ProfileKind::Default, 42, BiomeSettings::standard());
        assert_eq!(chain.stage_count(), 9);

        let large =
            LayerChain::for_profile(ProfileKind::LargeBiomes, 42, BiomeSettings::standard());
        assert_eq!(large.stage_count(), 11);
    }

    #[test]
    fn sampling_is_pure() {
        let chain = LayerChain::for_profile(ProfileKind::Default, 42, BiomeSettings::standard());
        let rect = region(-13, 7, 24, 24);
        let first = chain.sample(rect);
        // Interleave an unrelated query.
        let _ = chain.sample(region(100, -200, 8, 8));
        assert_eq!(chain.sample(rect), first);
    }

    #[test]
    fn stage_prefixes_are_samplable() {
        let chain = LayerChain::for_profile(ProfileKind::Default, 7, BiomeSettings::standard());
        for index in 0..chain.stage_count() {
            let grid = chain.sample_stage(index, region(0, 0, 4, 4));
            assert_eq!(grid.cells().len(), 16);
        }
    }

    #[test]
    #[should_panic(expected = "at least one stage")]
    fn empty_chain_is_a_contract_violation() {
        let _ = LayerChain::new(0, Vec::new());
    }

    #[test]
    #[should_panic(expected = "must start with a root stage")]
    fn non_root_first_stage_is_a_contract_violation() {
        let _ = LayerChain::new(0, vec![LayerStage::Zoom { salt: 1 }]);
    }
}
