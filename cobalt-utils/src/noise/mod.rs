//! Noise generation for terrain height fields.
//!
//! The standard terrain generator builds its height field from
//! [`OctaveNoise`], a seeded 2D value noise summed over octaves. Biome
//! assignment never touches noise - the layer pipeline is integer-only.

mod octave_noise;

pub use octave_noise::OctaveNoise;
