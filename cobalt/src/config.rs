//! Binary configuration.
//!
//! Loaded from a JSON5 file so hand-edited configs may carry comments and
//! trailing commas. A missing file is not an error - every field has a
//! default - but an unreadable or malformed file is, so a typo never
//! silently produces the wrong world.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Top-level binary configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// World seed.
    pub seed: i64,
    /// Profile name resolved against the registry.
    pub profile: String,
    /// Generator options string handed to the profile (JSON5).
    pub generator_options: String,
    /// Region of the world rendered to stdout.
    pub map: MapRegion,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 0,
            profile: "default".to_string(),
            generator_options: String::new(),
            map: MapRegion::default(),
        }
    }
}

/// Rectangle of world cells to render.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct MapRegion {
    /// Origin x.
    pub x: i32,
    /// Origin z.
    pub z: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
}

impl Default for MapRegion {
    fn default() -> Self {
        Self {
            x: -60,
            z: -20,
            width: 120,
            height: 40,
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::info!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json5::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))
    }
}
