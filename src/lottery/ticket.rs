use std::collections::HashSet;

use serde::Serialize;

use crate::config::LotteryConfig;
use crate::lottery::error::{TicketViolation, ValidationError};

/// A wager: distinct numbers in the order the player picked them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    numbers: Vec<u32>,
}

impl Ticket {
    /// Check `numbers` against the game rules and build a ticket.
    ///
    /// `held` is the number of tickets the player already owns.
    pub fn validate(
        numbers: &[u32],
        config: &LotteryConfig,
        held: usize,
    ) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        if numbers.len() != config.max_numbers_per_ticket {
            violations.push(TicketViolation::WrongCount {
                expected: config.max_numbers_per_ticket,
                actual: numbers.len(),
            });
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for &value in numbers {
            if !config.in_range(value) {
                violations.push(TicketViolation::OutOfRange {
                    value,
                    min: config.ticket_minimum_number,
                    max: config.ticket_maximum_number,
                });
            }
            if !seen.insert(value) && reported.insert(value) {
                violations.push(TicketViolation::Duplicate { value });
            }
        }

        if held >= config.max_player_tickets {
            violations.push(TicketViolation::TicketLimitReached {
                max: config.max_player_tickets,
            });
        }

        if !violations.is_empty() {
            return Err(ValidationError { violations });
        }

        Ok(Self {
            numbers: numbers.to_vec(),
        })
    }

    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(numbers: &[u32], held: usize) -> Vec<TicketViolation> {
        Ticket::validate(numbers, &LotteryConfig::default(), held)
            .unwrap_err()
            .violations
    }

    #[test]
    fn accepts_valid_numbers_in_order() {
        let ticket = Ticket::validate(&[7, 1, 10, 4], &LotteryConfig::default(), 0).unwrap();
        assert_eq!(ticket.numbers(), &[7, 1, 10, 4]);
    }

    #[test]
    fn rejects_wrong_count() {
        assert_eq!(
            violations(&[1, 2, 3], 0),
            vec![TicketViolation::WrongCount {
                expected: 4,
                actual: 3
            }]
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            violations(&[0, 2, 3, 11], 0),
            vec![
                TicketViolation::OutOfRange {
                    value: 0,
                    min: 1,
                    max: 10
                },
                TicketViolation::OutOfRange {
                    value: 11,
                    min: 1,
                    max: 10
                },
            ]
        );
    }

    #[test]
    fn reports_each_duplicate_once() {
        assert_eq!(
            violations(&[5, 5, 5, 2], 0),
            vec![TicketViolation::Duplicate { value: 5 }]
        );
    }

    #[test]
    fn rejects_when_cap_reached() {
        assert_eq!(
            violations(&[1, 2, 3, 4], 10),
            vec![TicketViolation::TicketLimitReached { max: 10 }]
        );
    }

    #[test]
    fn collects_every_violation() {
        let found = violations(&[1, 1, 42], 10);
        assert_eq!(found.len(), 4);
        assert!(found.contains(&TicketViolation::WrongCount {
            expected: 4,
            actual: 3
        }));
        assert!(found.contains(&TicketViolation::Duplicate { value: 1 }));
        assert!(found.contains(&TicketViolation::TicketLimitReached { max: 10 }));
    }
}
