use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Randomizer, RandomizerError};

/// In-process uniform generator.
pub struct LocalRandomizer {
    rng: StdRng,
}

impl LocalRandomizer {
    /// Seed from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed, for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Randomizer for LocalRandomizer {
    fn generate(&mut self, min: u32, max: u32) -> Result<u32, RandomizerError> {
        if min > max {
            return Err(RandomizerError::InvalidRange { min, max });
        }
        Ok(self.rng.gen_range(min..=max))
    }
}
