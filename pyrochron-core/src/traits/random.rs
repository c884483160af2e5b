//! Random number source

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Uniform integer in the inclusive range `[min, max]`
    ///
    /// Returns `min` when the range is empty or a single value.
    fn next_in_range(&mut self, min: i16, max: i16) -> i16;
}

/// Small, fast PRNG seeded once at startup
///
/// Not cryptographically secure; only used for particle jitter.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    /// Create a generator from a startup seed (typically the RTC time)
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, min: i16, max: i16) -> i16 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}
