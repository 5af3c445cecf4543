use rust_decimal::Decimal;

use crate::config::{ConfigError, LotteryConfig};
use crate::lottery::draw::{
    check_number_match_count, draw_winning_numbers, payout_for, PurchaseOutcome, TicketResult,
};
use crate::lottery::error::{DrawError, IndexError, PurchaseError, ValidationError};
use crate::lottery::session::{SessionKey, SessionSnapshot, SessionStore, SessionValue};
use crate::lottery::ticket::Ticket;
use crate::randomizer::{randomizer_for, Randomizer};

/// One player's lottery session.
///
/// Session state lives in a reactive store: every write is broadcast to
/// subscribers, and writes to the ticket list re-derive the ticket count
/// and subtotal before the write returns.
pub struct LotteryEngine {
    store: SessionStore,
    randomizer: Box<dyn Randomizer>,
}

impl LotteryEngine {
    /// Create an engine using the randomizer named in `config`.
    ///
    /// # Errors
    /// Returns error if the configuration fails validation.
    pub fn new(config: LotteryConfig) -> Result<Self, ConfigError> {
        let randomizer = randomizer_for(config.randomizer);
        Self::with_randomizer(config, randomizer)
    }

    /// Create an engine drawing from `randomizer`, whatever `config.randomizer` says.
    pub fn with_randomizer(
        config: LotteryConfig,
        randomizer: Box<dyn Randomizer>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let starting_money = config.player_starting_money;
        let mut store = SessionStore::new(config);
        store.set(SessionKey::Balance, SessionValue::Money(starting_money));
        store.set(SessionKey::Tickets, SessionValue::Tickets(Vec::new()));

        tracing::debug!(balance = %starting_money, "Lottery session started");

        Ok(Self { store, randomizer })
    }

    pub fn config(&self) -> &LotteryConfig {
        self.store.context()
    }

    /// Raw property access, `None` for keys never written.
    pub fn get(&self, key: SessionKey) -> Option<&SessionValue> {
        self.store.get(key)
    }

    pub fn balance(&self) -> Decimal {
        self.money(SessionKey::Balance)
    }

    pub fn tickets(&self) -> &[Ticket] {
        self.get(SessionKey::Tickets)
            .and_then(SessionValue::as_tickets)
            .unwrap_or(&[])
    }

    pub fn ticket_count(&self) -> usize {
        self.get(SessionKey::TicketCount)
            .and_then(SessionValue::as_count)
            .unwrap_or(0)
    }

    pub fn ticket_subtotal(&self) -> Decimal {
        self.money(SessionKey::TicketSubtotal)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            balance: self.balance(),
            tickets: self.tickets().to_vec(),
            ticket_count: self.ticket_count(),
            ticket_subtotal: self.ticket_subtotal(),
        }
    }

    /// Register a callback for every session change, as `(key, value)`.
    ///
    /// Callbacks run after the value is stored and before the operation
    /// that caused it returns.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(SessionKey, &SessionValue) + Send + 'static,
    {
        self.store.subscribe(observer);
    }

    /// Register a callback for changes to `key` alone.
    pub fn subscribe_key<F>(&mut self, key: SessionKey, observer: F)
    where
        F: FnMut(&SessionValue) + Send + 'static,
    {
        self.store.subscribe_key(key, observer);
    }

    /// Validate `numbers` and append them as a new ticket.
    ///
    /// # Errors
    /// Returns every rule the numbers break. State is unchanged on error.
    pub fn add_ticket(&mut self, numbers: &[u32]) -> Result<Ticket, ValidationError> {
        let mut tickets = self.tickets().to_vec();
        let ticket = match Ticket::validate(numbers, self.config(), tickets.len()) {
            Ok(ticket) => ticket,
            Err(error) => {
                tracing::debug!(?numbers, %error, "Ticket rejected");
                return Err(error);
            }
        };

        tickets.push(ticket.clone());
        self.store
            .set(SessionKey::Tickets, SessionValue::Tickets(tickets));

        tracing::debug!(numbers = ?ticket.numbers(), count = self.ticket_count(), "Ticket added");
        Ok(ticket)
    }

    /// Remove the ticket at `index`, keeping the others in order.
    ///
    /// # Errors
    /// Returns error if `index` is out of bounds. State is unchanged on error.
    pub fn delete_ticket(&mut self, index: usize) -> Result<Ticket, IndexError> {
        let mut tickets = self.tickets().to_vec();
        if index >= tickets.len() {
            return Err(IndexError {
                index,
                len: tickets.len(),
            });
        }

        let removed = tickets.remove(index);
        self.store
            .set(SessionKey::Tickets, SessionValue::Tickets(tickets));

        tracing::debug!(index, count = self.ticket_count(), "Ticket deleted");
        Ok(removed)
    }

    /// Draw `count` distinct numbers from the ticket range.
    ///
    /// # Errors
    /// Returns error if the range is smaller than `count`, or if the
    /// randomizer fails.
    pub fn generate_winning_numbers(&mut self, count: usize) -> Result<Vec<u32>, DrawError> {
        let config = self.store.context();
        draw_winning_numbers(self.randomizer.as_mut(), config, count)
    }

    /// Pay for the held tickets, run a draw, and credit any winnings.
    ///
    /// Tickets are kept after the draw and take part in every later
    /// purchase too. Observers see no balance change until the draw has
    /// succeeded; then one debit, followed by one credit per winning ticket.
    ///
    /// # Errors
    /// Returns error if the balance cannot cover the subtotal, the draw
    /// fails, or a payout cannot be represented. Nothing is debited on error.
    pub fn buy_tickets(&mut self) -> Result<PurchaseOutcome, PurchaseError> {
        let balance = self.balance();
        let subtotal = self.ticket_subtotal();

        if balance < subtotal {
            tracing::warn!(%balance, %subtotal, "Purchase rejected: insufficient funds");
            return Err(PurchaseError::InsufficientFunds { balance, subtotal });
        }

        let winning_numbers =
            self.generate_winning_numbers(self.config().max_numbers_per_ticket)?;
        let results = score_tickets(self.tickets(), &winning_numbers)?;

        // Settle every balance step up front so a failure writes nothing.
        let debited = balance - subtotal;
        let mut credits = Vec::new();
        let mut running = debited;
        for result in results.iter().filter(|r| r.match_count > 0) {
            running = running
                .checked_add(result.payout)
                .ok_or(PurchaseError::BalanceOverflow {
                    balance: running,
                    payout: result.payout,
                })?;
            credits.push(running);
        }

        self.store
            .set(SessionKey::Balance, SessionValue::Money(debited));
        for credited in credits {
            self.store
                .set(SessionKey::Balance, SessionValue::Money(credited));
        }

        let outcome = PurchaseOutcome {
            cost: subtotal,
            winning_numbers,
            results,
        };

        tracing::info!(
            cost = %outcome.cost,
            winning_numbers = ?outcome.winning_numbers,
            payout = %outcome.total_payout(),
            balance = %self.balance(),
            "Tickets purchased"
        );

        Ok(outcome)
    }

    fn money(&self, key: SessionKey) -> Decimal {
        self.get(key)
            .and_then(SessionValue::as_money)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Match every ticket against `winning_numbers`, in ticket order.
fn score_tickets(
    tickets: &[Ticket],
    winning_numbers: &[u32],
) -> Result<Vec<TicketResult>, PurchaseError> {
    tickets
        .iter()
        .map(|ticket| {
            let match_count = check_number_match_count(ticket.numbers(), winning_numbers);
            let payout =
                payout_for(match_count).ok_or(PurchaseError::PayoutOverflow { match_count })?;
            Ok(TicketResult {
                ticket: ticket.clone(),
                match_count,
                payout,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::randomizer::LocalRandomizer;
    use rust_decimal_macros::dec;

    fn engine() -> LotteryEngine {
        LotteryEngine::with_randomizer(
            LotteryConfig::default(),
            Box::new(LocalRandomizer::seeded(3)),
        )
        .unwrap()
    }

    #[test]
    fn starts_with_configured_balance_and_no_tickets() {
        let engine = engine();
        assert_eq!(engine.balance(), dec!(10));
        assert!(engine.tickets().is_empty());
        assert_eq!(engine.ticket_count(), 0);
        assert_eq!(engine.ticket_subtotal(), Decimal::ZERO);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = LotteryConfig {
            max_player_tickets: 0,
            ..LotteryConfig::default()
        };
        assert!(matches!(
            LotteryEngine::new(config),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn add_ticket_updates_derived_totals() {
        let mut engine = engine();
        engine.add_ticket(&[1, 2, 3, 4]).unwrap();
        engine.add_ticket(&[5, 6, 7, 8]).unwrap();
        assert_eq!(engine.ticket_count(), 2);
        assert_eq!(engine.ticket_subtotal(), dec!(4));
        assert_eq!(engine.balance(), dec!(10));
    }

    #[test]
    fn delete_ticket_compacts_in_order() {
        let mut engine = engine();
        engine.add_ticket(&[1, 2, 3, 4]).unwrap();
        engine.add_ticket(&[5, 6, 7, 8]).unwrap();
        engine.add_ticket(&[9, 10, 1, 2]).unwrap();

        let removed = engine.delete_ticket(1).unwrap();

        assert_eq!(removed.numbers(), &[5, 6, 7, 8]);
        let remaining: Vec<&[u32]> = engine.tickets().iter().map(Ticket::numbers).collect();
        assert_eq!(remaining, vec![&[1u32, 2, 3, 4][..], &[9u32, 10, 1, 2][..]]);
        assert_eq!(engine.ticket_count(), 2);
    }

    #[test]
    fn generated_numbers_are_distinct_and_in_range() {
        let mut engine = engine();
        for count in 1..=10 {
            let mut drawn = engine.generate_winning_numbers(count).unwrap();
            assert_eq!(drawn.len(), count);
            assert!(drawn.iter().all(|n| (1..=10).contains(n)));
            drawn.sort_unstable();
            drawn.dedup();
            assert_eq!(drawn.len(), count);
        }
    }

    #[test]
    fn purchase_keeps_tickets() {
        let mut engine = engine();
        engine.add_ticket(&[1, 2, 3, 4]).unwrap();
        engine.buy_tickets().unwrap();
        engine.buy_tickets().unwrap();
        assert_eq!(engine.ticket_count(), 1);
    }

    #[test]
    fn purchase_with_no_tickets_costs_nothing() {
        let mut engine = engine();
        let outcome = engine.buy_tickets().unwrap();
        assert_eq!(outcome.cost, Decimal::ZERO);
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.winning_numbers.len(), 4);
        assert_eq!(engine.balance(), dec!(10));
    }

    #[test]
    fn balance_reflects_outcome() {
        let mut engine = engine();
        engine.add_ticket(&[1, 2, 3, 4]).unwrap();
        engine.add_ticket(&[7, 8, 9, 10]).unwrap();

        let outcome = engine.buy_tickets().unwrap();

        assert_eq!(
            engine.balance(),
            dec!(10) - dec!(4) + outcome.total_payout()
        );
        for result in &outcome.results {
            assert_eq!(
                result.match_count,
                check_number_match_count(result.ticket.numbers(), &outcome.winning_numbers)
            );
            assert_eq!(Some(result.payout), payout_for(result.match_count));
        }
    }

    #[test]
    fn scoring_rejects_unpayable_match_counts() {
        let config = LotteryConfig {
            max_numbers_per_ticket: 40,
            ticket_minimum_number: 0,
            ticket_maximum_number: 100,
            ..LotteryConfig::default()
        };
        let numbers: Vec<u32> = (0..40).collect();
        let ticket = Ticket::validate(&numbers, &config, 0).unwrap();
        assert_eq!(
            score_tickets(&[ticket], &numbers),
            Err(PurchaseError::PayoutOverflow { match_count: 40 })
        );
    }

    #[test]
    fn scoring_keeps_ticket_order() {
        let config = LotteryConfig::default();
        let first = Ticket::validate(&[1, 2, 3, 4], &config, 0).unwrap();
        let second = Ticket::validate(&[5, 6, 7, 8], &config, 0).unwrap();
        let results = score_tickets(&[first.clone(), second.clone()], &[1, 2, 5, 9]).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].ticket, first);
        assert_eq!(results[0].payout, dec!(16));
        assert_eq!(results[1].ticket, second);
        assert_eq!(results[1].payout, dec!(4));
    }
}
