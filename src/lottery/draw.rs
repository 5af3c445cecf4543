//! Winning-number draws and payout arithmetic.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::{LotteryConfig, MAX_NUMBERS_PER_TICKET};
use crate::lottery::error::{ConfigurationError, DrawError};
use crate::lottery::ticket::Ticket;
use crate::randomizer::Randomizer;

/// Count of numbers present in both sets. Order and repeats are ignored.
pub fn check_number_match_count(ticket_numbers: &[u32], winning_numbers: &[u32]) -> usize {
    let ticket: HashSet<u32> = ticket_numbers.iter().copied().collect();
    let winning: HashSet<u32> = winning_numbers.iter().copied().collect();
    ticket.intersection(&winning).count()
}

/// Prize for `match_count` matches: `(2^n)^2`, zero for no match.
///
/// `None` when `match_count` exceeds [`MAX_NUMBERS_PER_TICKET`], since no
/// valid ticket can match that many numbers.
pub fn payout_for(match_count: usize) -> Option<Decimal> {
    if match_count == 0 {
        return Some(Decimal::ZERO);
    }
    if match_count > MAX_NUMBERS_PER_TICKET {
        return None;
    }
    let shift = u32::try_from(match_count).ok()?;
    let base = Decimal::from(1u64.checked_shl(shift)?);
    base.checked_mul(base)
}

/// Draw `count` distinct numbers from the configured range.
///
/// Duplicates are discarded and redrawn. Fails up front when the range
/// holds fewer than `count` numbers.
pub fn draw_winning_numbers(
    randomizer: &mut dyn Randomizer,
    config: &LotteryConfig,
    count: usize,
) -> Result<Vec<u32>, DrawError> {
    let available = config.number_range_size();
    if count as u64 > available {
        return Err(ConfigurationError {
            requested: count,
            available,
        }
        .into());
    }

    let mut winning = Vec::with_capacity(count);
    while winning.len() < count {
        let candidate =
            randomizer.generate(config.ticket_minimum_number, config.ticket_maximum_number)?;
        if winning.contains(&candidate) {
            continue;
        }
        winning.push(candidate);
    }

    Ok(winning)
}

/// How one held ticket fared in a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketResult {
    pub ticket: Ticket,
    pub match_count: usize,
    pub payout: Decimal,
}

/// Everything one purchase produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOutcome {
    /// Amount debited for the held tickets.
    pub cost: Decimal,
    pub winning_numbers: Vec<u32>,
    /// One entry per held ticket, in purchase order.
    pub results: Vec<TicketResult>,
}

impl PurchaseOutcome {
    /// Sum of all ticket payouts.
    pub fn total_payout(&self) -> Decimal {
        self.results.iter().map(|r| r.payout).sum()
    }
}
