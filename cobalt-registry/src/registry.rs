//! The world profile registry.
//!
//! One registry instance owns the process-wide profile table. It is built
//! at startup (built-ins first, then any user-defined profiles) and passed
//! by reference into world creation and generation code; there is no
//! ambient global. Lookups take a read lock, so late registration is safe
//! against concurrent readers, though the intended discipline is to finish
//! registering before generation starts.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::profile::{ProfileError, ProfileKind, WorldProfile, WorldProfileBuilder};

/// Initial table capacity; the seven built-ins occupy reserved low slots.
const INITIAL_CAPACITY: usize = 16;
/// Block size the table grows by when every slot is taken. The table never
/// shrinks.
const GROWTH_BLOCK: usize = 16;

/// Growable table of world profiles with stable slot ids.
pub struct ProfileRegistry {
    table: RwLock<Vec<Option<Arc<WorldProfile>>>>,
}

impl ProfileRegistry {
    /// Create an empty registry with the initial capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: RwLock::new(vec![None; INITIAL_CAPACITY]),
        }
    }

    /// Create a registry seeded with the built-in profiles at their
    /// reserved ids.
    ///
    /// Slot 8 is the legacy default; 6, 7 and 9-15 stay free for
    /// user-defined profiles.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register_builtin(
            0,
            WorldProfile::builder("default", ProfileKind::Default)
                .generator_version(1)
                .versioned(),
        );
        registry.register_builtin(1, WorldProfile::builder("flat", ProfileKind::Flat));
        registry.register_builtin(
            2,
            WorldProfile::builder("largeBiomes", ProfileKind::LargeBiomes),
        );
        registry.register_builtin(
            3,
            WorldProfile::builder("amplified", ProfileKind::Amplified).info_notice(),
        );
        registry.register_builtin(
            4,
            WorldProfile::builder("customized", ProfileKind::Customized),
        );
        registry.register_builtin(
            5,
            WorldProfile::builder("debug_all_block_states", ProfileKind::DebugAllBlockStates),
        );
        registry.register_builtin(
            8,
            WorldProfile::builder("default_1_1", ProfileKind::LegacyDefault)
                .generator_version(0)
                .creatable(false),
        );
        log::info!("world profile registry initialized with {} built-ins", registry.len());
        registry
    }

    /// Place a built-in at its reserved slot.
    fn register_builtin(&self, id: usize, builder: WorldProfileBuilder) {
        let profile = builder
            .build(id)
            .expect("built-in world profile names are within the length limit");
        let mut table = self.table.write();
        debug_assert!(table[id].is_none(), "built-in slot {id} already taken");
        table[id] = Some(Arc::new(profile));
    }

    /// Register a profile in the lowest free slot, growing the table by
    /// [`GROWTH_BLOCK`] slots when none is free.
    ///
    /// The assigned id is stable for the process lifetime. Duplicate names
    /// are not rejected; [`by_name`](Self::by_name) returns the first
    /// match, so a later duplicate is reachable only by id.
    pub fn register(
        &self,
        builder: WorldProfileBuilder,
    ) -> Result<Arc<WorldProfile>, ProfileError> {
        let mut table = self.table.write();
        let slot = match table.iter().position(Option::is_none) {
            Some(free) => free,
            None => {
                let end = table.len();
                table.resize(end + GROWTH_BLOCK, None);
                log::debug!("profile table grown to {} slots", table.len());
                end
            }
        };
        let profile = Arc::new(builder.build(slot)?);
        table[slot] = Some(Arc::clone(&profile));
        log::debug!("registered world profile {:?} at id {slot}", profile.name());
        Ok(profile)
    }

    /// Look up a profile by name, ASCII case-insensitive. First match wins.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<Arc<WorldProfile>> {
        self.table
            .read()
            .iter()
            .flatten()
            .find(|profile| profile.name().eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Look up a profile by slot id.
    #[must_use]
    pub fn by_id(&self, id: usize) -> Option<Arc<WorldProfile>> {
        self.table.read().get(id).cloned().flatten()
    }

    /// Resolve a `(name, generator_version)` pair from saved world
    /// metadata.
    ///
    /// The default profile saved with generator version 0 predates
    /// versioned generation and resolves to the legacy default variant;
    /// everything else resolves by name unchanged.
    #[must_use]
    pub fn resolve_saved(&self, name: &str, version: u32) -> Option<Arc<WorldProfile>> {
        let profile = self.by_name(name)?;
        if profile.kind() == ProfileKind::Default && version == 0 {
            let legacy = self
                .table
                .read()
                .iter()
                .flatten()
                .find(|candidate| candidate.kind() == ProfileKind::LegacyDefault)
                .cloned();
            if let Some(legacy) = legacy {
                return Some(legacy);
            }
            log::warn!("no legacy default registered; {name:?} v0 resolves to the current default");
        }
        Some(profile)
    }

    /// Number of registered profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.read().iter().flatten().count()
    }

    /// Whether no profile has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current table capacity in slots. Grows in [`GROWTH_BLOCK`] steps,
    /// never shrinks.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.read().len()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ProfileRegistry;
    use crate::profile::{ProfileKind, WorldProfile};

    #[test]
    fn builtins_occupy_reserved_ids() {
        let registry = ProfileRegistry::with_builtins();
        let expected = [
            (0, "default"),
            (1, "flat"),
            (2, "largeBiomes"),
            (3, "amplified"),
            (4, "customized"),
            (5, "debug_all_block_states"),
            (8, "default_1_1"),
        ];
        for (id, name) in expected {
            let profile = registry.by_id(id).expect("built-in registered");
            assert_eq!(profile.name(), name);
            assert_eq!(profile.id(), id);
        }
        assert!(registry.by_id(6).is_none());
        assert!(registry.by_id(7).is_none());
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.capacity(), 16);
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        let registry = ProfileRegistry::with_builtins();
        assert_eq!(registry.by_name("FLAT").expect("found").id(), 1);
        assert_eq!(registry.by_name("LargeBiomes").expect("found").id(), 2);
        assert!(registry.by_name("no-such-profile").is_none());
    }

    #[test]
    fn dynamic_registration_fills_lowest_free_slots() {
        let registry = ProfileRegistry::with_builtins();
        let first = registry
            .register(WorldProfile::builder("alpha", ProfileKind::Default))
            .expect("registered");
        let second = registry
            .register(WorldProfile::builder("beta", ProfileKind::Default))
            .expect("registered");
        let third = registry
            .register(WorldProfile::builder("gamma", ProfileKind::Default))
            .expect("registered");
        // 6 and 7 are the gaps below the legacy default at 8; 9 follows it.
        assert_eq!(first.id(), 6);
        assert_eq!(second.id(), 7);
        assert_eq!(third.id(), 9);
    }

    #[test]
    fn duplicate_names_keep_earlier_ids() {
        let registry = ProfileRegistry::with_builtins();
        let original = registry
            .register(WorldProfile::builder("custom", ProfileKind::Default))
            .expect("registered");
        let duplicate = registry
            .register(WorldProfile::builder("CUSTOM", ProfileKind::Flat))
            .expect("registered");
        assert_ne!(original.id(), duplicate.id());
        // First match wins by name; the duplicate stays reachable by id.
        assert_eq!(registry.by_name("custom").expect("found").id(), original.id());
        assert_eq!(registry.by_id(duplicate.id()).expect("found").kind(), ProfileKind::Flat);
    }

    #[test]
    fn table_grows_by_fixed_blocks_and_preserves_ids() {
        let registry = ProfileRegistry::with_builtins();
        // Fill the nine free slots below capacity 16 (6, 7, 9..=15).
        for i in 0..9 {
            registry
                .register(WorldProfile::builder(format!("filler-{i}"), ProfileKind::Default))
                .expect("registered");
        }
        assert_eq!(registry.len(), 16);
        assert_eq!(registry.capacity(), 16);

        let overflow = registry
            .register(WorldProfile::builder("custom-frozen", ProfileKind::Default))
            .expect("registered");
        assert_eq!(overflow.id(), 16);
        assert_eq!(registry.capacity(), 32);

        // Every previously assigned mapping survives the growth.
        assert_eq!(registry.by_id(0).expect("found").name(), "default");
        assert_eq!(registry.by_id(8).expect("found").name(), "default_1_1");
        for i in 0..9 {
            let name = format!("filler-{i}");
            let profile = registry.by_name(&name).expect("found");
            assert_eq!(registry.by_id(profile.id()).expect("found").name(), name);
        }
    }

    #[test]
    fn overlong_dynamic_names_are_rejected_without_claiming_a_slot() {
        let registry = ProfileRegistry::with_builtins();
        let before = registry.len();
        assert!(
            registry
                .register(WorldProfile::builder(
                    "way-too-long-profile-name",
                    ProfileKind::Default,
                ))
                .is_err()
        );
        assert_eq!(registry.len(), before);
        assert!(registry.by_id(6).is_none());
    }

    #[test]
    fn legacy_default_remap() {
        let registry = ProfileRegistry::with_builtins();
        let legacy = registry.resolve_saved("default", 0).expect("resolved");
        assert_eq!(legacy.kind(), ProfileKind::LegacyDefault);
        assert_eq!(legacy.name(), "default_1_1");

        let current = registry.resolve_saved("default", 1).expect("resolved");
        assert_eq!(current.kind(), ProfileKind::Default);

        // Non-default profiles never remap, whatever the version.
        let flat = registry.resolve_saved("flat", 0).expect("resolved");
        assert_eq!(flat.kind(), ProfileKind::Flat);
    }
}
