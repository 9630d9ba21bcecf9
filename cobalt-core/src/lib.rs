//! Core world generation pipeline for Cobalt.
//!
//! Implements the seed-driven biome pipeline and terrain generators that
//! world profiles from `cobalt-registry` dispatch to. Chunk building,
//! block storage and persistence are external consumers: they hand this
//! crate a world seed and coordinates and get back biome ids and terrain
//! height/density values.

pub mod worldgen;
