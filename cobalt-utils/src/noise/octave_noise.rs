//! Octave value noise for terrain height fields.
//!
//! 2D lattice value noise with smoothstep interpolation, summed over a
//! configurable number of octaves. The permutation table is shuffled from
//! the seed, so the whole field is a pure function of `(seed, octaves)`.

use crate::math::floor;
use crate::random::LayerRng;

/// Salt for the permutation shuffle stream, fixed so the same seed always
/// builds the same table.
const SHUFFLE_SALT: i64 = 0x4F63;

/// Seeded octave value noise.
///
/// Uses a 512-entry permutation table (first 256 entries shuffled, mirrored
/// to the second half) so lattice hashing never needs a second masking step.
#[derive(Debug, Clone)]
pub struct OctaveNoise {
    p: [i32; 512],
    octaves: u32,
    lacunarity: f64,
    persistence: f64,
}

impl OctaveNoise {
    /// Create a noise generator from a seed.
    ///
    /// `octaves` controls detail: each octave doubles frequency and halves
    /// amplitude relative to the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `octaves` is zero.
    #[must_use]
    pub fn new(seed: i64, octaves: u32) -> Self {
        assert!(octaves > 0, "OctaveNoise needs at least one octave");

        let rng = LayerRng::new(seed, SHUFFLE_SALT);
        let mut p = [0i32; 512];

        for (i, entry) in p.iter_mut().enumerate().take(256) {
            *entry = i as i32;
        }

        // Fisher-Yates shuffle driven by per-index draws.
        for i in 0..256usize {
            let offset = rng.next_int(i as i32, 0, (256 - i) as i32) as usize;
            p.swap(i, offset + i);
        }

        // Mirror the first 256 entries to the second half.
        for i in 0..256 {
            p[i + 256] = p[i];
        }

        Self {
            p,
            octaves,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }

    #[inline]
    const fn p(&self, index: i32) -> i32 {
        self.p[(index & 0xFF) as usize]
    }

    /// Pseudo-random lattice value in `[-1, 1]` at integer coordinates.
    #[inline]
    fn lattice(&self, xi: i32, zi: i32) -> f64 {
        let ii = xi & 0xFF;
        let jj = zi & 0xFF;
        let hashed = self.p(ii + self.p(jj));
        f64::from(hashed) / 255.0 * 2.0 - 1.0
    }

    /// Smoothstep fade, zero derivative at the lattice points.
    #[inline]
    fn fade(t: f64) -> f64 {
        t * t * (3.0 - 2.0 * t)
    }

    /// Single-octave sample at the given coordinates.
    fn sample_octave(&self, x: f64, z: f64) -> f64 {
        let xi = floor(x);
        let zi = floor(z);
        let fx = x - f64::from(xi);
        let fz = z - f64::from(zi);

        let v00 = self.lattice(xi, zi);
        let v10 = self.lattice(xi + 1, zi);
        let v01 = self.lattice(xi, zi + 1);
        let v11 = self.lattice(xi + 1, zi + 1);

        let tx = Self::fade(fx);
        let tz = Self::fade(fz);

        let top = v00 + (v10 - v00) * tx;
        let bottom = v01 + (v11 - v01) * tx;
        top + (bottom - top) * tz
    }

    /// Sample the summed octaves at the given coordinates.
    ///
    /// The result is normalized back into `[-1, 1]` regardless of octave
    /// count.
    #[must_use]
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut range = 0.0;

        for _ in 0..self.octaves {
            sum += amplitude * self.sample_octave(x * frequency, z * frequency);
            range += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        sum / range
    }
}
