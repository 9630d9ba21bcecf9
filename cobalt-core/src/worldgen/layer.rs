//! Grid layer stages.
//!
//! Each stage turns an upstream grid into an output grid at the same or
//! doubled resolution. Stages hold no mutable state; all randomness comes
//! from [`LayerRng`] draws keyed by cell coordinates, so evaluating a stage
//! is a pure function of `(world seed, stage configuration, region)`.

use cobalt_registry::biome::{BiomeCategory, BiomeId, ClimateGroup};
use cobalt_registry::settings::{BiomeSettings, EdgeRuleSet};
use cobalt_utils::random::LayerRng;

use super::grid::{BiomeGrid, Region};

/// RNG lane for the zoom stage's horizontal tie-break.
const LANE_ZOOM_EAST: i64 = 1;
/// RNG lane for the zoom stage's vertical tie-break.
const LANE_ZOOM_SOUTH: i64 = 2;
/// RNG lane for the zoom stage's diagonal tie-break.
const LANE_ZOOM_CORNER: i64 = 3;
/// RNG lane for the concrete biome pick after the climate group draw.
const LANE_BIOME_PICK: i64 = 1;

/// One stage descriptor in a layer chain.
///
/// Stages are plain data; the chain wires stage `i` to read stage `i - 1`,
/// keeping the pipeline an inspectable list instead of a hidden object
/// graph.
#[derive(Debug, Clone)]
pub enum LayerStage {
    /// Root stage: seeds each cell as proto-land or ocean.
    Island {
        /// Decorrelates this stage's draws from every other stage.
        salt: i64,
        /// A cell becomes land with probability `1 / land_one_in`.
        land_one_in: i32,
    },
    /// Resolution-doubling stage.
    Zoom {
        /// Decorrelates this stage's draws from every other stage.
        salt: i64,
    },
    /// Boundary-rewrite stage; no random draws.
    Edge {
        /// Neighbor rules applied to each cell, first match wins.
        rules: EdgeRuleSet,
    },
    /// Maps proto-land cells to concrete biomes by climate group.
    BiomeAssign {
        /// Decorrelates this stage's draws from every other stage.
        salt: i64,
        /// Candidate biomes per climate group.
        settings: BiomeSettings,
    },
}

impl LayerStage {
    /// The upstream rectangle this stage needs to produce `output`, or
    /// `None` for the root stage.
    pub(crate) fn upstream_region(&self, output: Region) -> Option<Region> {
        match self {
            Self::Island { .. } => None,
            Self::Zoom { .. } => Some(zoom_upstream(output)),
            Self::Edge { .. } => Some(output.expand(1)),
            Self::BiomeAssign { .. } => Some(output),
        }
    }

    /// Evaluate this stage over `output`.
    ///
    /// `upstream` must cover [`upstream_region`](Self::upstream_region);
    /// the chain guarantees that.
    pub(crate) fn apply(
        &self,
        world_seed: i64,
        output: Region,
        upstream: Option<&BiomeGrid>,
    ) -> BiomeGrid {
        match self {
            Self::Island { salt, land_one_in } => {
                let rng = LayerRng::new(world_seed, *salt);
                BiomeGrid::from_fn(output, |x, z| {
                    if rng.chance(x, z, *land_one_in) {
                        BiomeId::PLAINS
                    } else {
                        BiomeId::OCEAN
                    }
                })
            }
            Self::Zoom { salt } => {
                let rng = LayerRng::new(world_seed, *salt);
                let upstream = upstream.expect("zoom stage requires an upstream grid");
                apply_zoom(&rng, output, upstream)
            }
            Self::Edge { rules } => {
                let upstream = upstream.expect("edge stage requires an upstream grid");
                BiomeGrid::from_fn(output, |x, z| {
                    let center = upstream.get(x, z);
                    let neighbors = [
                        upstream.get(x, z - 1),
                        upstream.get(x + 1, z),
                        upstream.get(x, z + 1),
                        upstream.get(x - 1, z),
                    ];
                    rules.replacement_for(center, neighbors).unwrap_or(center)
                })
            }
            Self::BiomeAssign { salt, settings } => {
                let rng = LayerRng::new(world_seed, *salt);
                let pick = rng.fork(LANE_BIOME_PICK);
                let upstream = upstream.expect("biome assignment requires an upstream grid");
                BiomeGrid::from_fn(output, |x, z| {
                    let proto = upstream.get(x, z);
                    if proto.category() != BiomeCategory::Land {
                        return proto;
                    }
                    let group = ClimateGroup::ALL[rng.next_int(x, z, 4) as usize];
                    let candidates = settings.candidates(group);
                    if candidates.is_empty() {
                        settings.default_biome
                    } else {
                        *pick.pick(x, z, candidates)
                    }
                })
            }
        }
    }
}

/// Upstream rectangle for a zoom stage: the output shrunk to half
/// resolution, plus one cell of slack for the right/down neighbors.
fn zoom_upstream(output: Region) -> Region {
    let x = output.x() >> 1;
    let z = output.z() >> 1;
    let last_x = (output.x() + output.width() - 1) >> 1;
    let last_z = (output.z() + output.height() - 1) >> 1;
    // Width covers every derived coarse cell plus its +1 neighbor; never
    // empty, so the constructor cannot fail.
    Region::new(x, z, last_x - x + 2, last_z - z + 2)
        .expect("zoom upstream region is non-empty by construction")
}

/// Double the upstream resolution into `output`.
///
/// Each 2x2 output block derives from one upstream cell `a` and its east,
/// south and south-east neighbors: the aligned corner copies `a`, the two
/// edge cells random-pick between `a` and the adjacent neighbor, and the
/// far corner takes the modal value of all four (random among them when no
/// clear mode exists). Draws are keyed by the coarse cell, so every output
/// cell is reproducible in isolation.
fn apply_zoom(rng: &LayerRng, output: Region, upstream: &BiomeGrid) -> BiomeGrid {
    let east = rng.fork(LANE_ZOOM_EAST);
    let south = rng.fork(LANE_ZOOM_SOUTH);
    let corner = rng.fork(LANE_ZOOM_CORNER);

    BiomeGrid::from_fn(output, |x, z| {
        let ux = x >> 1;
        let uz = z >> 1;
        let a = upstream.get(ux, uz);
        match (x & 1, z & 1) {
            (0, 0) => a,
            (1, 0) => {
                let b = upstream.get(ux + 1, uz);
                if east.chance(ux, uz, 2) { a } else { b }
            }
            (0, 1) => {
                let c = upstream.get(ux, uz + 1);
                if south.chance(ux, uz, 2) { a } else { c }
            }
            _ => {
                let b = upstream.get(ux + 1, uz);
                let c = upstream.get(ux, uz + 1);
                let d = upstream.get(ux + 1, uz + 1);
                mode_or_random(&corner, ux, uz, [a, b, c, d])
            }
        }
    })
}

/// Majority vote over a 2x2 neighborhood.
///
/// A value occurring at least twice with a strict occurrence maximum wins
/// outright; two-pair splits and all-distinct neighborhoods fall back to a
/// uniform random pick among the four cells.
fn mode_or_random(rng: &LayerRng, x: i32, z: i32, cells: [BiomeId; 4]) -> BiomeId {
    let mut best = cells[0];
    let mut best_count = 0;
    let mut tied = false;
    for candidate in cells {
        let count = cells.iter().filter(|&&cell| cell == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
            tied = false;
        } else if count == best_count && candidate != best {
            tied = true;
        }
    }
    if best_count >= 2 && !tied {
        best
    } else {
        *rng.pick(x, z, &cells)
    }
}
