//! Number-matching lottery built on the reactive [`store`](crate::store).
//!
//! A player holds tickets of distinct numbers. Each purchase debits the
//! ticket subtotal, draws winning numbers, and credits `(2^m)^2` for every
//! ticket with `m > 0` matches.

mod draw;
mod engine;
mod error;
mod session;
mod shared;
mod ticket;

pub use draw::{check_number_match_count, payout_for, PurchaseOutcome, TicketResult};
pub use engine::LotteryEngine;
pub use error::{
    ConfigurationError, DrawError, IndexError, PurchaseError, TicketViolation, ValidationError,
};
pub use session::{SessionKey, SessionSchema, SessionSnapshot, SessionStore, SessionValue};
pub use shared::SharedLottery;
pub use ticket::Ticket;
