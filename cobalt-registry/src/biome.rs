//! Biome identifiers and classification.
//!
//! Biomes are opaque numeric ids as far as the pipeline is concerned; the
//! ids below follow the classic numeric biome table so saved worlds stay
//! readable. The edge layer only cares about the coarse [`BiomeCategory`],
//! and biome assignment groups candidates by [`ClimateGroup`].

use serde::{Deserialize, Serialize};

/// Numeric biome identifier.
///
/// Stable across runs and seeds; the pipeline stores and returns these,
/// while display names, colors and spawn tables are downstream concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BiomeId(pub u16);

impl BiomeId {
    /// Deep ocean-class water.
    pub const OCEAN: Self = Self(0);
    /// Temperate grassland; also the debug-profile fill biome.
    pub const PLAINS: Self = Self(1);
    /// Hot barren land.
    pub const DESERT: Self = Self(2);
    /// Temperate woodland.
    pub const FOREST: Self = Self(4);
    /// Cool coniferous woodland.
    pub const TAIGA: Self = Self(5);
    /// Ice-covered ocean.
    pub const FROZEN_OCEAN: Self = Self(10);
    /// Snow-covered flatland.
    pub const ICE_PLAINS: Self = Self(12);
    /// Sandy coastline produced by the edge layer.
    pub const BEACH: Self = Self(16);
    /// Hot dense woodland.
    pub const JUNGLE: Self = Self(21);
    /// Rocky coastline produced by the edge layer next to icy land.
    pub const STONE_SHORE: Self = Self(25);
    /// Hot grassland.
    pub const SAVANNA: Self = Self(35);

    /// Coarse class of this biome, as seen by the edge layer.
    #[must_use]
    pub const fn category(self) -> BiomeCategory {
        match self {
            Self::OCEAN | Self::FROZEN_OCEAN => BiomeCategory::Ocean,
            Self::BEACH | Self::STONE_SHORE => BiomeCategory::Shore,
            _ => BiomeCategory::Land,
        }
    }
}

/// Coarse biome class used for boundary detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiomeCategory {
    /// Water cells.
    Ocean,
    /// Transition cells written by the edge layer; never produced earlier
    /// in the chain.
    Shore,
    /// Everything else.
    Land,
}

/// Climate group a land cell is assigned to before concrete biome choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateGroup {
    /// Hot and arid: desert, savanna.
    Dry,
    /// Mild: plains, forest.
    Temperate,
    /// Cold: taiga.
    Cool,
    /// Frozen: ice plains.
    Icy,
}

impl ClimateGroup {
    /// All groups, indexable by a uniform `[0, 4)` draw.
    pub const ALL: [Self; 4] = [Self::Dry, Self::Temperate, Self::Cool, Self::Icy];
}
