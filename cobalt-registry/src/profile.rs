//! World profiles: named, versioned bundles of generation behavior.
//!
//! A profile decides which biome source and terrain generator a world gets
//! and answers a handful of behavioral questions gameplay systems ask
//! (spawn height, horizon, void fade). Profiles are immutable once built;
//! the only mutable step is the builder, which exists so optional flags
//! read declaratively at the registration site.

use thiserror::Error;

/// Longest allowed profile name. Saved world metadata stores the name in a
/// fixed-width field.
pub const PROFILE_NAME_MAX: usize = 16;

/// Errors from profile construction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProfileError {
    /// The profile name exceeds [`PROFILE_NAME_MAX`] characters.
    #[error("world profile name must not be longer than {PROFILE_NAME_MAX}: {name:?} is {len}")]
    NameTooLong {
        /// The offending name.
        name: String,
        /// Its length in characters.
        len: usize,
    },
}

/// Which generation strategy a profile selects.
///
/// Dispatch on this enum replaces identity comparison against singleton
/// profile objects; every behavior match is exhaustive, so adding a kind
/// forces a decision at each dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileKind {
    /// Standard layered generation.
    Default,
    /// Superflat: constant biome, fixed layer stack.
    Flat,
    /// Standard generation with quadrupled biome footprint.
    LargeBiomes,
    /// Standard biome layout with exaggerated terrain height.
    Amplified,
    /// Standard generation parameterized by a user options string.
    Customized,
    /// Diagnostic world: one fixed biome, no terrain.
    DebugAllBlockStates,
    /// The pre-versioning default generator, kept for worlds saved before
    /// generator versions existed.
    LegacyDefault,
}

/// An immutable world profile.
///
/// Created through [`WorldProfile::builder`] and registered in a
/// `ProfileRegistry`, which assigns the id. Lives for the process lifetime
/// behind an `Arc`; nothing mutates a profile after registration.
#[derive(Debug)]
pub struct WorldProfile {
    id: usize,
    name: String,
    generator_version: u32,
    kind: ProfileKind,
    can_be_created: bool,
    versioned: bool,
    has_info_notice: bool,
}

impl WorldProfile {
    /// Start building a profile with the given name and kind.
    #[must_use]
    pub fn builder(name: impl Into<String>, kind: ProfileKind) -> WorldProfileBuilder {
        WorldProfileBuilder {
            name: name.into(),
            kind,
            generator_version: 0,
            can_be_created: true,
            versioned: false,
            has_info_notice: false,
        }
    }

    /// Slot index in the registry table; stable for the process lifetime.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Unique (case-insensitive) profile name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generator version stored into saved world metadata.
    #[must_use]
    pub const fn generator_version(&self) -> u32 {
        self.generator_version
    }

    /// Generation strategy this profile selects.
    #[must_use]
    pub const fn kind(&self) -> ProfileKind {
        self.kind
    }

    /// Whether the world-creation flow offers this profile.
    #[must_use]
    pub const fn can_be_created(&self) -> bool {
        self.can_be_created
    }

    /// Whether saved worlds of this profile carry a generator version that
    /// participates in legacy remapping.
    #[must_use]
    pub const fn is_versioned(&self) -> bool {
        self.versioned
    }

    /// Whether world creation shows an informational notice for this
    /// profile.
    #[must_use]
    pub const fn has_info_notice(&self) -> bool {
        self.has_info_notice
    }

    /// Whether the creation flow offers a customize step.
    #[must_use]
    pub const fn is_customizable(&self) -> bool {
        matches!(self.kind, ProfileKind::Flat | ProfileKind::Customized)
    }

    /// Lowest Y players may spawn at.
    #[must_use]
    pub const fn min_spawn_height(&self, sea_level: i32) -> i32 {
        match self.kind {
            ProfileKind::Flat => 4,
            _ => sea_level + 1,
        }
    }

    /// Height of the rendered horizon line.
    #[must_use]
    pub const fn horizon(&self) -> f64 {
        match self.kind {
            ProfileKind::Flat => 0.0,
            _ => 63.0,
        }
    }

    /// How aggressively the sky fades to void below the horizon.
    #[must_use]
    pub const fn void_fade_magnitude(&self) -> f64 {
        match self.kind {
            ProfileKind::Flat => 1.0,
            _ => 0.031_25,
        }
    }

    /// Cloud render height.
    #[must_use]
    pub const fn cloud_height(&self) -> f32 {
        128.0
    }

    /// Spawn position fuzz radius given the server's configured spawn
    /// radius.
    #[must_use]
    pub const fn spawn_fuzz(&self, spawn_radius: i32) -> i32 {
        if spawn_radius > 0 { spawn_radius } else { 0 }
    }

    /// Whether a slime spawn attempt with the given `[0, 4)` roll is
    /// suppressed. Flat worlds throttle slimes to a quarter of the normal
    /// rate; everywhere else the reduction never applies.
    #[must_use]
    pub const fn reduces_slime_spawns(&self, roll: i32) -> bool {
        match self.kind {
            ProfileKind::Flat => roll != 1,
            _ => false,
        }
    }

    /// Localization key for the profile's display name.
    #[must_use]
    pub fn translation_key(&self) -> String {
        format!("generator.{}", self.name)
    }

    /// Localization key for the profile's informational notice.
    #[must_use]
    pub fn info_translation_key(&self) -> String {
        format!("generator.{}.info", self.name)
    }
}

/// Builder for [`WorldProfile`].
///
/// All setters take and return the builder by value so registration sites
/// read as a single expression.
#[derive(Debug)]
pub struct WorldProfileBuilder {
    name: String,
    kind: ProfileKind,
    generator_version: u32,
    can_be_created: bool,
    versioned: bool,
    has_info_notice: bool,
}

impl WorldProfileBuilder {
    /// Set the generator version written to saved metadata.
    #[must_use]
    pub const fn generator_version(mut self, version: u32) -> Self {
        self.generator_version = version;
        self
    }

    /// Mark the profile as participating in generator-version remapping.
    #[must_use]
    pub const fn versioned(mut self) -> Self {
        self.versioned = true;
        self
    }

    /// Show an informational notice in the creation flow.
    #[must_use]
    pub const fn info_notice(mut self) -> Self {
        self.has_info_notice = true;
        self
    }

    /// Control whether the creation flow offers this profile.
    #[must_use]
    pub const fn creatable(mut self, can_be_created: bool) -> Self {
        self.can_be_created = can_be_created;
        self
    }

    /// Finalize into an immutable profile at the given registry slot.
    ///
    /// Called by the registry during registration; the id is the slot the
    /// registry picked.
    pub fn build(self, id: usize) -> Result<WorldProfile, ProfileError> {
        let len = self.name.chars().count();
        if len > PROFILE_NAME_MAX {
            return Err(ProfileError::NameTooLong {
                name: self.name,
                len,
            });
        }
        Ok(WorldProfile {
            id,
            name: self.name,
            generator_version: self.generator_version,
            kind: self.kind,
            can_be_created: self.can_be_created,
            versioned: self.versioned,
            has_info_notice: self.has_info_notice,
        })
    }
}
