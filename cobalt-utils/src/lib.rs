//! Shared utilities for the Cobalt world generation crates.
//!
//! Provides the deterministic primitives everything else is built on:
//!
//! - [`random::LayerRng`] - stateless per-cell random draws for grid layers
//! - [`noise::OctaveNoise`] - seeded octave value noise for terrain height
//! - [`math`] - small numeric helpers shared by noise and layer code

pub mod math;
pub mod noise;
pub mod random;
