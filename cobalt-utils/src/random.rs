//! Stateless per-cell random draws for the layer pipeline.
//!
//! Every grid layer needs random decisions that depend only on the cell
//! being evaluated, never on evaluation order: two queries for overlapping
//! rectangles must agree on every shared cell, and concurrent evaluation of
//! disjoint rectangles must not race on generator state. [`LayerRng`]
//! therefore keeps no mutable state at all - each draw is a pure hash of
//! `(world seed, layer salt, cell x, cell z)`.

/// Splitmix64 finalizer. Full 64-bit avalanche, so nearby cell coordinates
/// produce uncorrelated draws.
#[inline]
const fn mix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    state = (state ^ (state >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    state = (state ^ (state >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    state ^ (state >> 31)
}

/// Odd multiplier folding the x coordinate into the hash state.
const X_PRIME: u64 = 0x9E37_79B9_7F4A_7C15;
/// Odd multiplier folding the z coordinate into the hash state.
const Z_PRIME: u64 = 0xC2B2_AE3D_27D4_EB4F;

/// Deterministic per-cell random source for one layer of the pipeline.
///
/// Binds a `(world_seed, salt)` pair at construction; each layer instance
/// gets its own salt so draws between layers are decorrelated even at the
/// same cell coordinates. All methods take `&self` - the generator is a
/// pure function of its inputs and is freely shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct LayerRng {
    /// Premixed `(world_seed, salt)` state shared by every draw.
    base: u64,
}

impl LayerRng {
    /// Create a random source for the given world seed and layer salt.
    #[must_use]
    pub const fn new(world_seed: i64, salt: i64) -> Self {
        Self {
            base: mix64(world_seed as u64 ^ mix64(salt as u64)),
        }
    }

    /// Derive a decorrelated sub-stream.
    ///
    /// Layers that need several independent draws per cell (e.g. the zoom
    /// layer's three tie-break picks) fork one lane per decision instead of
    /// perturbing the cell coordinates.
    #[must_use]
    pub const fn fork(&self, lane: i64) -> Self {
        Self {
            base: mix64(self.base ^ mix64(lane as u64)),
        }
    }

    /// Raw 64-bit draw for a cell.
    #[inline]
    const fn draw(&self, x: i32, z: i32) -> u64 {
        let mut state = self.base ^ (x as u64).wrapping_mul(X_PRIME);
        state = mix64(state);
        state ^= (z as u64).wrapping_mul(Z_PRIME);
        mix64(state)
    }

    /// Uniform draw in `[0, bound)` for the given cell.
    ///
    /// Non-power-of-two bounds are handled by rejection so the result is
    /// unbiased; rejected values are remixed deterministically, keeping the
    /// draw a pure function of `(seed, salt, x, z, bound)`.
    ///
    /// # Panics
    ///
    /// Panics if `bound <= 0`; that is a caller contract violation, not a
    /// runtime error.
    #[must_use]
    pub fn next_int(&self, x: i32, z: i32, bound: i32) -> i32 {
        assert!(bound > 0, "LayerRng bound must be positive, got {bound}");
        let bound = bound as u64;

        let mut value = self.draw(x, z);
        if bound.is_power_of_two() {
            return (value & (bound - 1)) as i32;
        }

        // Largest multiple of `bound` representable in 64 bits; draws at or
        // above it would bias the low residues and are rerolled.
        let limit = u64::MAX - u64::MAX % bound;
        let mut reroll: u64 = 0;
        while value >= limit {
            reroll += 1;
            value = mix64(value ^ reroll);
        }
        (value % bound) as i32
    }

    /// Roll a `1 in one_in` chance at the given cell.
    #[must_use]
    pub fn chance(&self, x: i32, z: i32, one_in: i32) -> bool {
        self.next_int(x, z, one_in) == 0
    }

    /// Pick one element of `choices` uniformly at the given cell.
    ///
    /// # Panics
    ///
    /// Panics if `choices` is empty.
    #[must_use]
    pub fn pick<'a, T>(&self, x: i32, z: i32, choices: &'a [T]) -> &'a T {
        assert!(!choices.is_empty(), "LayerRng pick from empty slice");
        &choices[self.next_int(x, z, choices.len() as i32) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::LayerRng;

    #[test]
    fn same_inputs_same_draw() {
        let rng = LayerRng::new(42, 1000);
        let first = rng.next_int(-17, 93, 10);
        // Unrelated draws in between must not affect the result.
        let _ = rng.next_int(0, 0, 10);
        let _ = rng.next_int(i32::MAX, i32::MIN, 7);
        assert_eq!(rng.next_int(-17, 93, 10), first);

        // A separately constructed generator agrees as well.
        let other = LayerRng::new(42, 1000);
        assert_eq!(other.next_int(-17, 93, 10), first);
    }

    #[test]
    fn draws_stay_in_bound() {
        let rng = LayerRng::new(123_456_789, 2001);
        for bound in [1, 2, 3, 4, 5, 7, 10, 100, 255, 256] {
            for x in -20..20 {
                for z in -20..20 {
                    let value = rng.next_int(x, z, bound);
                    assert!((0..bound).contains(&value), "{value} out of [0, {bound})");
                }
            }
        }
    }

    #[test]
    fn salts_decorrelate_layers() {
        let a = LayerRng::new(42, 1000);
        let b = LayerRng::new(42, 2000);
        let mismatches = (0..1000)
            .filter(|&i| a.next_int(i, -i, 1 << 16) != b.next_int(i, -i, 1 << 16))
            .count();
        assert!(mismatches > 990, "salted streams should disagree, got {mismatches}/1000");
    }

    #[test]
    fn forks_decorrelate_lanes() {
        let rng = LayerRng::new(7, 1000);
        let lane = rng.fork(1);
        let mismatches = (0..1000)
            .filter(|&i| rng.next_int(i, i, 1 << 16) != lane.next_int(i, i, 1 << 16))
            .count();
        assert!(mismatches > 990, "forked lane should disagree, got {mismatches}/1000");
    }

    #[test]
    fn bound_one_always_zero() {
        let rng = LayerRng::new(0, 0);
        assert_eq!(rng.next_int(5, 5, 1), 0);
    }

    #[test]
    fn chance_matches_next_int() {
        let rng = LayerRng::new(42, 1);
        for x in -50..50 {
            assert_eq!(rng.chance(x, 3, 10), rng.next_int(x, 3, 10) == 0);
        }
    }

    #[test]
    fn pick_covers_all_choices() {
        let rng = LayerRng::new(42, 5);
        let choices = ["a", "b", "c"];
        let mut seen = [false; 3];
        for x in 0..200 {
            let picked = rng.pick(x, 0, &choices);
            seen[choices.iter().position(|c| c == picked).unwrap()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    #[should_panic(expected = "bound must be positive")]
    fn zero_bound_is_a_contract_violation() {
        let _ = LayerRng::new(0, 0).next_int(0, 0, 0);
    }
}
