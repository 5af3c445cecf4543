use super::{Randomizer, RandomizerError};

/// Transport to a remote true-random service.
pub trait RandomService: Send {
    /// Fetch one integer in `[min, max]`.
    fn integer(&mut self, min: u32, max: u32) -> Result<u32, RandomizerError>;
}

/// Randomizer backed by a [`RandomService`].
///
/// Service failures are passed through untouched, and answers outside the
/// requested range are rejected rather than clamped.
pub struct ExternalRandomizer {
    service: Option<Box<dyn RandomService>>,
}

impl ExternalRandomizer {
    /// Randomizer with no transport. Every draw fails as unavailable.
    pub fn unconfigured() -> Self {
        Self { service: None }
    }

    pub fn with_service(service: impl RandomService + 'static) -> Self {
        Self {
            service: Some(Box::new(service)),
        }
    }
}

impl Randomizer for ExternalRandomizer {
    fn generate(&mut self, min: u32, max: u32) -> Result<u32, RandomizerError> {
        if min > max {
            return Err(RandomizerError::InvalidRange { min, max });
        }
        let Some(service) = self.service.as_mut() else {
            return Err(RandomizerError::Unavailable {
                reason: "no random service configured".to_string(),
            });
        };

        let value = service.integer(min, max)?;
        if !(min..=max).contains(&value) {
            tracing::warn!(value, min, max, "Random service answered out of range");
            return Err(RandomizerError::OutOfRange { value, min, max });
        }

        Ok(value)
    }
}
