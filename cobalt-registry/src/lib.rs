//! World profile registry and generation data tables for Cobalt.
//!
//! This crate owns the data side of world generation:
//!
//! - [`biome`] - numeric biome identifiers and their classification
//! - [`profile`] - immutable world profiles and their behavioral parameters
//! - [`registry`] - the growable, process-wide profile table
//! - [`settings`] - serde-backed tables parsed from generator options
//!   strings (biome assignment, edge rules, terrain shape, flat layers)
//!
//! The generation algorithms that consume these tables live in
//! `cobalt-core`; nothing here samples noise or evaluates layers.

pub mod biome;
pub mod profile;
pub mod registry;
pub mod settings;
