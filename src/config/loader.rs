use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use rust_decimal::Decimal;

use crate::config::types::LotteryConfig;

/// Largest ticket size whose top payout, `(2^n)^2`, still fits a decimal.
pub const MAX_NUMBERS_PER_TICKET: usize = 32;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl LotteryConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/basmalotto/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("basmalotto").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `LotteryConfig::default()`.
    /// - Otherwise behaves like [`LotteryConfig::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(LotteryConfig::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: LotteryConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Tickets carry between 1 and [`MAX_NUMBERS_PER_TICKET`] numbers
    /// - A player may hold at least one ticket
    /// - Money amounts are not negative
    /// - The number range is not inverted and can fill a whole draw
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_numbers_per_ticket == 0 {
            return Err(invalid("max_numbers_per_ticket must be at least 1"));
        }

        if self.max_numbers_per_ticket > MAX_NUMBERS_PER_TICKET {
            return Err(invalid(format!(
                "max_numbers_per_ticket must not exceed {}",
                MAX_NUMBERS_PER_TICKET
            )));
        }

        if self.max_player_tickets == 0 {
            return Err(invalid("max_player_tickets must be at least 1"));
        }

        if self.player_starting_money < Decimal::ZERO {
            return Err(invalid("player_starting_money must not be negative"));
        }

        if self.ticket_cost < Decimal::ZERO {
            return Err(invalid("ticket_cost must not be negative"));
        }

        if self.ticket_minimum_number > self.ticket_maximum_number {
            return Err(invalid(format!(
                "ticket_minimum_number ({}) is greater than ticket_maximum_number ({})",
                self.ticket_minimum_number, self.ticket_maximum_number
            )));
        }

        if self.max_numbers_per_ticket as u64 > self.number_range_size() {
            return Err(invalid(format!(
                "Cannot draw {} distinct numbers from {}..={}",
                self.max_numbers_per_ticket, self.ticket_minimum_number, self.ticket_maximum_number
            )));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
