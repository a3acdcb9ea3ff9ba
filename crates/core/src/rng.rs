//! Seedable random source for simulated sensor readings.
//!
//! Sensors perturb their readings with small random deltas. Backing the
//! simulation with a seedable generator keeps those readings reproducible
//! when a scenario (or a test) pins the seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source owned by a sensor decorator.
pub struct SensorRng {
    inner: ChaCha8Rng,
}

impl SensorRng {
    /// Entropy-seeded source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Fixed-seed source for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A delta in `(-magnitude, +magnitude)`.
    pub fn delta(&mut self, magnitude: f64) -> f64 {
        self.inner.gen_range(-magnitude..magnitude)
    }

    /// A uniform draw from `0..sides`.
    pub fn roll(&mut self, sides: u32) -> u32 {
        self.inner.gen_range(0..sides)
    }
}

impl Default for SensorRng {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SensorRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorRng").finish_non_exhaustive()
    }
}
