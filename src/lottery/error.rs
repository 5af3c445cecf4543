//! Error taxonomy for lottery operations.
//!
//! Every failure is returned to the caller before any state changes.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::randomizer::RandomizerError;

/// A single reason a ticket was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketViolation {
    #[error("expected {expected} numbers, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: u32, min: u32, max: u32 },

    #[error("{value} appears more than once")]
    Duplicate { value: u32 },

    #[error("ticket limit of {max} reached")]
    TicketLimitReached { max: usize },
}

/// Ticket input was rejected. Lists every violation found, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid ticket: {}", describe(.violations))]
pub struct ValidationError {
    pub violations: Vec<TicketViolation>,
}

fn describe(violations: &[TicketViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Ticket index does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No ticket at index {index} (holding {len})")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// Draw size cannot be satisfied by the number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot draw {requested} distinct numbers from a range of {available}")]
pub struct ConfigurationError {
    pub requested: usize,
    pub available: u64,
}

/// Failure to produce winning numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Randomizer(#[from] RandomizerError),
}

/// Failure of a ticket purchase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Insufficient funds: balance {balance} is below subtotal {subtotal}")]
    InsufficientFunds { balance: Decimal, subtotal: Decimal },

    #[error("No payout defined for {match_count} matches")]
    PayoutOverflow { match_count: usize },

    #[error("Crediting {payout} would overflow balance {balance}")]
    BalanceOverflow { balance: Decimal, payout: Decimal },

    #[error(transparent)]
    Draw(#[from] DrawError),
}
