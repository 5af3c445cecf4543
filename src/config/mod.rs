//! Game rules and their on-disk TOML form.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_NUMBERS_PER_TICKET};
pub use types::{LotteryConfig, RandomizerKind};
