//! Serde-backed generation settings tables.
//!
//! Everything a profile can customize about generation lives here as plain
//! data: which biomes each climate group may produce, which neighbor
//! combinations the edge layer rewrites, and the terrain shape parameters.
//! The customized profile supplies these through its generator options
//! string (JSON5); every field has a default so an empty or malformed
//! options string degrades to standard generation instead of failing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::biome::{BiomeCategory, BiomeId, ClimateGroup};

/// Biome assignment table: candidate biomes per climate group.
///
/// Consumed by the biome-assignment layer. Missing or empty groups fall
/// back to [`default_biome`](Self::default_biome), so a partially filled
/// table is valid configuration rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeSettings {
    /// Candidate biomes per climate group.
    pub groups: FxHashMap<ClimateGroup, Vec<BiomeId>>,
    /// Fallback biome for groups with no candidates.
    pub default_biome: BiomeId,
}

impl BiomeSettings {
    /// The standard assignment table used by the default profiles.
    #[must_use]
    pub fn standard() -> Self {
        let mut groups = FxHashMap::default();
        groups.insert(ClimateGroup::Dry, vec![BiomeId::DESERT, BiomeId::SAVANNA, BiomeId::JUNGLE]);
        groups.insert(ClimateGroup::Temperate, vec![BiomeId::PLAINS, BiomeId::FOREST]);
        groups.insert(ClimateGroup::Cool, vec![BiomeId::TAIGA, BiomeId::FOREST]);
        groups.insert(ClimateGroup::Icy, vec![BiomeId::ICE_PLAINS]);
        Self {
            groups,
            default_biome: BiomeId::PLAINS,
        }
    }

    /// Candidate biomes for a climate group.
    ///
    /// Returns an empty slice when the table has no entry; callers treat
    /// that as "use [`default_biome`](Self::default_biome)".
    #[must_use]
    pub fn candidates(&self, group: ClimateGroup) -> &[BiomeId] {
        self.groups.get(&group).map_or(&[], Vec::as_slice)
    }
}

impl Default for BiomeSettings {
    fn default() -> Self {
        Self::standard()
    }
}

/// One edge rewrite rule.
///
/// A cell matches when its category (and, if given, its exact biome)
/// matches `center` and at least one cardinal neighbor has category
/// `neighbor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRule {
    /// Category the center cell must have.
    pub center: BiomeCategory,
    /// Exact center biome requirement; `None` matches any biome of the
    /// center category.
    #[serde(default)]
    pub center_biome: Option<BiomeId>,
    /// Category at least one cardinal neighbor must have.
    pub neighbor: BiomeCategory,
    /// Biome written in place of the center value.
    pub replacement: BiomeId,
}

/// Ordered edge rule list; the first matching rule wins.
///
/// The concrete rules are tuning data, not algorithm - profiles may swap
/// in their own set via the options string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeRuleSet {
    /// Rules in match priority order.
    pub rules: Vec<EdgeRule>,
}

impl EdgeRuleSet {
    /// The standard coastline rules: icy land touching ocean becomes stone
    /// shore, any other land touching ocean becomes beach.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: vec![
                EdgeRule {
                    center: BiomeCategory::Land,
                    center_biome: Some(BiomeId::ICE_PLAINS),
                    neighbor: BiomeCategory::Ocean,
                    replacement: BiomeId::STONE_SHORE,
                },
                EdgeRule {
                    center: BiomeCategory::Land,
                    center_biome: None,
                    neighbor: BiomeCategory::Ocean,
                    replacement: BiomeId::BEACH,
                },
            ],
        }
    }

    /// Replacement for a cell given its four cardinal neighbors, or `None`
    /// when no rule matches and the upstream value passes through.
    #[must_use]
    pub fn replacement_for(&self, center: BiomeId, neighbors: [BiomeId; 4]) -> Option<BiomeId> {
        self.rules.iter().find_map(|rule| {
            if rule.center != center.category() {
                return None;
            }
            if rule.center_biome.is_some_and(|required| required != center) {
                return None;
            }
            neighbors
                .iter()
                .any(|n| n.category() == rule.neighbor)
                .then_some(rule.replacement)
        })
    }
}

impl Default for EdgeRuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Terrain shape and biome table settings for noise-backed generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Average terrain elevation above sea level, in blocks.
    pub depth_base: f64,
    /// Peak-to-valley swing applied to the noise field, in blocks.
    pub height_scale: f64,
    /// Water surface height.
    pub sea_level: i32,
    /// Lowest buildable world height.
    pub min_build_height: i32,
    /// Octave count for the height noise.
    pub octaves: u32,
    /// Biome assignment table for the layer pipeline.
    pub biomes: BiomeSettings,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            depth_base: 8.0,
            height_scale: 20.0,
            sea_level: 63,
            min_build_height: 0,
            octaves: 4,
            biomes: BiomeSettings::standard(),
        }
    }
}

impl GeneratorSettings {
    /// Parse settings from a generator options string.
    ///
    /// An empty string yields the defaults. A malformed string also yields
    /// the defaults - world loading must not fail on an options string
    /// written by an older or foreign build - but the parse error is logged.
    #[must_use]
    pub fn from_options(options: &str) -> Self {
        if options.trim().is_empty() {
            return Self::default();
        }
        match serde_json5::from_str(options) {
            Ok(settings) => settings,
            Err(error) => {
                log::warn!("unreadable generator options, using defaults: {error}");
                Self::default()
            }
        }
    }
}

/// Settings for the flat profile: a constant biome over a fixed layer stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatSettings {
    /// Biome reported for every position.
    pub biome: BiomeId,
    /// Total layer stack thickness (bedrock floor, filler, surface).
    pub depth: i32,
}

impl Default for FlatSettings {
    fn default() -> Self {
        Self {
            biome: BiomeId::PLAINS,
            depth: 4,
        }
    }
}

impl FlatSettings {
    /// Parse flat settings from a generator options string, with the same
    /// permissive fallback as [`GeneratorSettings::from_options`].
    #[must_use]
    pub fn from_options(options: &str) -> Self {
        if options.trim().is_empty() {
            return Self::default();
        }
        match serde_json5::from_str(options) {
            Ok(settings) => settings,
            Err(error) => {
                log::warn!("unreadable flat options, using defaults: {error}");
                Self::default()
            }
        }
    }
}
