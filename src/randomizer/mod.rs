//! Sources of winning numbers.
//!
//! A [`Randomizer`] yields one integer at a time from an inclusive range.
//! The engine owns exactly one, chosen from [`RandomizerKind`] at
//! construction or injected directly.

mod external;
mod local;

pub use external::{ExternalRandomizer, RandomService};
pub use local::LocalRandomizer;

use thiserror::Error;

use crate::config::RandomizerKind;

/// Failures reported by a randomizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomizerError {
    /// The source could not produce a number at all.
    #[error("Randomizer unavailable: {reason}")]
    Unavailable { reason: String },

    /// The caller asked for an empty range.
    #[error("Invalid range {min}..={max}")]
    InvalidRange { min: u32, max: u32 },

    /// The source answered with a number outside the requested range.
    #[error("Randomizer returned {value}, outside {min}..={max}")]
    OutOfRange { value: u32, min: u32, max: u32 },
}

/// Capability to draw one integer uniformly from `[min, max]`.
pub trait Randomizer: Send {
    /// Draw one integer in `[min, max]`, both inclusive.
    ///
    /// Returns [`RandomizerError::InvalidRange`] when `min > max`.
    fn generate(&mut self, min: u32, max: u32) -> Result<u32, RandomizerError>;
}

/// Build the default randomizer for `kind`.
///
/// `External` has no transport wired in and reports itself unavailable;
/// use [`ExternalRandomizer::with_service`] to plug one in.
pub fn randomizer_for(kind: RandomizerKind) -> Box<dyn Randomizer> {
    match kind {
        RandomizerKind::Local => Box::new(LocalRandomizer::from_entropy()),
        RandomizerKind::External => Box::new(ExternalRandomizer::unconfigured()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_kind_draws_in_range() {
        let mut randomizer = randomizer_for(RandomizerKind::Local);
        for _ in 0..100 {
            let value = randomizer.generate(3, 6).unwrap();
            assert!((3..=6).contains(&value));
        }
    }

    #[test]
    fn external_kind_is_unavailable_without_service() {
        let mut randomizer = randomizer_for(RandomizerKind::External);
        assert!(matches!(
            randomizer.generate(1, 10),
            Err(RandomizerError::Unavailable { .. })
        ));
    }
}
