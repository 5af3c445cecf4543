use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Where winning numbers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RandomizerKind {
    /// In-process pseudo-random generator.
    #[default]
    Local,
    /// Remote true-random service.
    External,
}

/// Game rules. Fixed for the lifetime of an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotteryConfig {
    /// Numbers on each ticket, and numbers drawn per purchase (default: 4).
    #[serde(default = "default_max_numbers_per_ticket")]
    pub max_numbers_per_ticket: usize,
    /// Tickets a player may hold at once (default: 10).
    #[serde(default = "default_max_player_tickets")]
    pub max_player_tickets: usize,
    /// Opening balance (default: 10.00).
    #[serde(default = "default_player_starting_money")]
    pub player_starting_money: Decimal,
    /// Price of one ticket (default: 2.00).
    #[serde(default = "default_ticket_cost")]
    pub ticket_cost: Decimal,
    /// Lowest number a ticket may carry, inclusive (default: 1).
    #[serde(default = "default_ticket_minimum_number")]
    pub ticket_minimum_number: u32,
    /// Highest number a ticket may carry, inclusive (default: 10).
    #[serde(default = "default_ticket_maximum_number")]
    pub ticket_maximum_number: u32,
    #[serde(default)]
    pub randomizer: RandomizerKind,
}

fn default_max_numbers_per_ticket() -> usize {
    4
}

fn default_max_player_tickets() -> usize {
    10
}

fn default_player_starting_money() -> Decimal {
    dec!(10.00)
}

fn default_ticket_cost() -> Decimal {
    dec!(2.00)
}

fn default_ticket_minimum_number() -> u32 {
    1
}

fn default_ticket_maximum_number() -> u32 {
    10
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            max_numbers_per_ticket: default_max_numbers_per_ticket(),
            max_player_tickets: default_max_player_tickets(),
            player_starting_money: default_player_starting_money(),
            ticket_cost: default_ticket_cost(),
            ticket_minimum_number: default_ticket_minimum_number(),
            ticket_maximum_number: default_ticket_maximum_number(),
            randomizer: RandomizerKind::default(),
        }
    }
}

impl LotteryConfig {
    /// Count of distinct numbers in `[ticket_minimum_number, ticket_maximum_number]`.
    ///
    /// Zero when the bounds are inverted.
    pub fn number_range_size(&self) -> u64 {
        if self.ticket_minimum_number > self.ticket_maximum_number {
            return 0;
        }
        u64::from(self.ticket_maximum_number - self.ticket_minimum_number) + 1
    }

    /// Whether `number` falls inside the ticket range.
    pub fn in_range(&self, number: u32) -> bool {
        (self.ticket_minimum_number..=self.ticket_maximum_number).contains(&number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let config = LotteryConfig::default();
        assert_eq!(config.max_numbers_per_ticket, 4);
        assert_eq!(config.max_player_tickets, 10);
        assert_eq!(config.player_starting_money, dec!(10));
        assert_eq!(config.ticket_cost, dec!(2));
        assert_eq!(config.ticket_minimum_number, 1);
        assert_eq!(config.ticket_maximum_number, 10);
        assert_eq!(config.randomizer, RandomizerKind::Local);
    }

    #[test]
    fn range_size_is_inclusive() {
        let config = LotteryConfig::default();
        assert_eq!(config.number_range_size(), 10);

        let single = LotteryConfig {
            ticket_minimum_number: 7,
            ticket_maximum_number: 7,
            ..LotteryConfig::default()
        };
        assert_eq!(single.number_range_size(), 1);
    }

    #[test]
    fn range_size_of_inverted_bounds_is_zero() {
        let config = LotteryConfig {
            ticket_minimum_number: 9,
            ticket_maximum_number: 3,
            ..LotteryConfig::default()
        };
        assert_eq!(config.number_range_size(), 0);
    }

    #[test]
    fn in_range_includes_both_bounds() {
        let config = LotteryConfig::default();
        assert!(config.in_range(1));
        assert!(config.in_range(10));
        assert!(!config.in_range(0));
        assert!(!config.in_range(11));
    }
}
