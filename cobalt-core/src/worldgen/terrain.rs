//! Terrain generators and the profile dispatch that selects one.
//!
//! Terrain is opaque to the biome pipeline: a generator only answers
//! height/density queries for chunk-building code, plus the two world
//! constants (minimum build height, sea level) spawn logic needs.

use cobalt_registry::profile::{ProfileKind, WorldProfile};
use cobalt_registry::settings::{FlatSettings, GeneratorSettings};
use cobalt_utils::noise::OctaveNoise;

/// Height-noise salt, fixed so terrain and biome draws never correlate.
const HEIGHT_NOISE_SALT: i64 = 0x7E44;
/// Horizontal blocks per noise unit.
const HORIZONTAL_SCALE: f64 = 1.0 / 128.0;
/// Extra height swing applied by the amplified profile.
const AMPLIFIED_FACTOR: f64 = 2.5;

/// Density and height queries for one world's terrain.
///
/// Densities are signed: positive is solid, the zero crossing is the
/// surface. `fill_column` writes one value per world Y starting at
/// [`min_build_height`](Self::min_build_height).
pub trait TerrainGenerator {
    /// Y of the highest solid block in the column.
    fn height_at(&self, x: i32, z: i32) -> i32;

    /// Fill `densities` for the column, index 0 at the minimum build
    /// height.
    fn fill_column(&self, x: i32, z: i32, densities: &mut [f64]);

    /// Lowest buildable world height.
    fn min_build_height(&self) -> i32;

    /// Water surface height.
    fn sea_level(&self) -> i32;
}

/// Noise-backed terrain for the default, large-biomes, amplified,
/// customized and legacy-default profiles.
pub struct StandardTerrain {
    noise: OctaveNoise,
    settings: GeneratorSettings,
    height_swing: f64,
}

impl StandardTerrain {
    /// Create a standard generator for a seed.
    ///
    /// `amplified` widens the height swing without touching biome layout.
    #[must_use]
    pub fn new(world_seed: i64, settings: GeneratorSettings, amplified: bool) -> Self {
        // Options strings are user input; an octave count of 0 means "as
        // smooth as possible", not a panic.
        let octaves = settings.octaves.max(1);
        let noise = OctaveNoise::new(world_seed ^ HEIGHT_NOISE_SALT, octaves);
        let height_swing = settings.height_scale * if amplified { AMPLIFIED_FACTOR } else { 1.0 };
        Self {
            noise,
            settings,
            height_swing,
        }
    }
}

impl TerrainGenerator for StandardTerrain {
    fn height_at(&self, x: i32, z: i32) -> i32 {
        let sample = self.noise.sample(
            f64::from(x) * HORIZONTAL_SCALE,
            f64::from(z) * HORIZONTAL_SCALE,
        );
        let surface =
            f64::from(self.settings.sea_level) + self.settings.depth_base + sample * self.height_swing;
        cobalt_utils::math::floor(surface)
    }

    fn fill_column(&self, x: i32, z: i32, densities: &mut [f64]) {
        let height = self.height_at(x, z);
        for (index, density) in densities.iter_mut().enumerate() {
            let y = self.settings.min_build_height + index as i32;
            *density = f64::from(height - y);
        }
    }

    fn min_build_height(&self) -> i32 {
        self.settings.min_build_height
    }

    fn sea_level(&self) -> i32 {
        self.settings.sea_level
    }
}

/// Fixed layer-stack terrain for the flat profile.
///
/// The stack is bedrock, filler, then the surface block at the top; only
/// its total depth is configurable.
pub struct FlatTerrain {
    settings: FlatSettings,
}

impl FlatTerrain {
    /// Create a flat generator from parsed flat settings.
    #[must_use]
    pub const fn new(settings: FlatSettings) -> Self {
        Self { settings }
    }
}

impl TerrainGenerator for FlatTerrain {
    fn height_at(&self, _x: i32, _z: i32) -> i32 {
        self.settings.depth - 1
    }

    fn fill_column(&self, _x: i32, _z: i32, densities: &mut [f64]) {
        for (index, density) in densities.iter_mut().enumerate() {
            let y = index as i32;
            *density = f64::from(self.settings.depth - 1 - y);
        }
    }

    fn min_build_height(&self) -> i32 {
        0
    }

    fn sea_level(&self) -> i32 {
        0
    }
}

/// Empty terrain for the debug profile: no solid blocks anywhere.
pub struct DebugTerrain;

impl TerrainGenerator for DebugTerrain {
    fn height_at(&self, _x: i32, _z: i32) -> i32 {
        0
    }

    fn fill_column(&self, _x: i32, _z: i32, densities: &mut [f64]) {
        densities.fill(-1.0);
    }

    fn min_build_height(&self) -> i32 {
        0
    }

    fn sea_level(&self) -> i32 {
        0
    }
}

/// Select the terrain generator a profile asks for.
///
/// Fixed priority match on the profile kind. Kinds without a dedicated
/// generator - including any added in the future - fall back to the
/// standard generator rather than failing; a world must always be able to
/// generate terrain.
#[must_use]
pub fn select_generator(
    profile: &WorldProfile,
    world_seed: i64,
    options: &str,
) -> Box<dyn TerrainGenerator> {
    match profile.kind() {
        ProfileKind::Flat => Box::new(FlatTerrain::new(FlatSettings::from_options(options))),
        ProfileKind::DebugAllBlockStates => Box::new(DebugTerrain),
        ProfileKind::Customized => Box::new(StandardTerrain::new(
            world_seed,
            GeneratorSettings::from_options(options),
            false,
        )),
        ProfileKind::Amplified => Box::new(StandardTerrain::new(
            world_seed,
            GeneratorSettings::from_options(options),
            true,
        )),
        kind => {
            log::debug!("profile kind {kind:?} uses the standard terrain generator");
            Box::new(StandardTerrain::new(
                world_seed,
                GeneratorSettings::from_options(options),
                false,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FlatTerrain, StandardTerrain, TerrainGenerator};
    use cobalt_registry::settings::{FlatSettings, GeneratorSettings};

    #[test]
    fn standard_heights_are_deterministic_and_bounded() {
        let settings = GeneratorSettings::default();
        let terrain = StandardTerrain::new(42, settings.clone(), false);
        let again = StandardTerrain::new(42, settings.clone(), false);

        let min = f64::from(settings.sea_level) + settings.depth_base - settings.height_scale;
        let max = f64::from(settings.sea_level) + settings.depth_base + settings.height_scale;
        for i in -50..50 {
            let height = terrain.height_at(i * 13, i * 29);
            assert_eq!(height, again.height_at(i * 13, i * 29));
            assert!(f64::from(height) >= min - 1.0 && f64::from(height) <= max);
        }
    }

    #[test]
    fn amplified_widens_the_swing() {
        let plain = StandardTerrain::new(7, GeneratorSettings::default(), false);
        let amplified = StandardTerrain::new(7, GeneratorSettings::default(), true);
        let base = f64::from(GeneratorSettings::default().sea_level)
            + GeneratorSettings::default().depth_base;
        // Same noise field, so deviations from the base elevation scale up.
        let mut widened = 0;
        for i in -50..50 {
            let d_plain = (f64::from(plain.height_at(i * 31, i * 17)) - base).abs();
            let d_amp = (f64::from(amplified.height_at(i * 31, i * 17)) - base).abs();
            if d_amp > d_plain {
                widened += 1;
            }
        }
        assert!(widened > 60, "amplified should usually deviate further, got {widened}/100");
    }

    #[test]
    fn column_density_crosses_zero_at_the_surface() {
        let terrain = StandardTerrain::new(42, GeneratorSettings::default(), false);
        let height = terrain.height_at(10, 20);
        let span = 128;
        let mut densities = vec![0.0; span as usize];
        terrain.fill_column(10, 20, &mut densities);
        for (index, density) in densities.iter().enumerate() {
            let y = terrain.min_build_height() + index as i32;
            if y <= height {
                assert!(*density >= 0.0, "solid below surface at y={y}");
            } else {
                assert!(*density < 0.0, "air above surface at y={y}");
            }
        }
    }

    #[test]
    fn flat_stack_is_four_layers() {
        let terrain = FlatTerrain::new(FlatSettings::default());
        assert_eq!(terrain.height_at(0, 0), 3);
        assert_eq!(terrain.height_at(-1000, 1000), 3);

        let mut densities = vec![0.0; 8];
        terrain.fill_column(5, 5, &mut densities);
        assert!(densities[..4].iter().all(|&d| d >= 0.0));
        assert!(densities[4..].iter().all(|&d| d < 0.0));
    }
}
