//! Observable session state and the rule that derives ticket totals.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::LotteryConfig;
use crate::lottery::ticket::Ticket;
use crate::store::{Hook, Schema, Store};

/// Observable properties of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKey {
    Balance,
    Tickets,
    /// Derived: number of held tickets.
    TicketCount,
    /// Derived: `ticket_cost * ticket_count`.
    TicketSubtotal,
}

impl SessionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::Balance => "balance",
            SessionKey::Tickets => "tickets",
            SessionKey::TicketCount => "ticket_count",
            SessionKey::TicketSubtotal => "ticket_subtotal",
        }
    }

    /// Name of the per-key change event, e.g. `changed:balance`.
    pub fn event_name(&self) -> String {
        format!("changed:{}", self.as_str())
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value carried by a [`SessionKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SessionValue {
    Money(Decimal),
    Count(usize),
    Tickets(Vec<Ticket>),
}

impl SessionValue {
    pub fn as_money(&self) -> Option<Decimal> {
        match self {
            SessionValue::Money(amount) => Some(*amount),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self {
            SessionValue::Count(count) => Some(*count),
            _ => None,
        }
    }

    pub fn as_tickets(&self) -> Option<&[Ticket]> {
        match self {
            SessionValue::Tickets(tickets) => Some(tickets),
            _ => None,
        }
    }
}

impl fmt::Display for SessionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionValue::Money(amount) => write!(f, "{}", amount),
            SessionValue::Count(count) => write!(f, "{}", count),
            SessionValue::Tickets(tickets) => {
                let rendered: Vec<String> = tickets
                    .iter()
                    .map(|ticket| format!("{:?}", ticket.numbers()))
                    .collect();
                write!(f, "[{}]", rendered.join(", "))
            }
        }
    }
}

/// Schema binding session keys to their derived-property hooks.
pub struct SessionSchema;

/// Session store. Its context is the game configuration.
pub type SessionStore = Store<SessionSchema>;

const TICKETS_HOOKS: &[Hook<SessionSchema>] = &[recompute_ticket_totals];

impl Schema for SessionSchema {
    type Key = SessionKey;
    type Value = SessionValue;
    type Context = LotteryConfig;

    fn hooks(key: SessionKey) -> &'static [Hook<Self>] {
        match key {
            SessionKey::Tickets => TICKETS_HOOKS,
            SessionKey::Balance | SessionKey::TicketCount | SessionKey::TicketSubtotal => &[],
        }
    }
}

/// Rewrite `ticket_count` and `ticket_subtotal` from the current tickets.
fn recompute_ticket_totals(store: &mut SessionStore) {
    let count = store
        .get(SessionKey::Tickets)
        .and_then(SessionValue::as_tickets)
        .map_or(0, <[Ticket]>::len);
    let subtotal = store.context().ticket_cost * Decimal::from(count);

    store.set(SessionKey::TicketCount, SessionValue::Count(count));
    store.set(SessionKey::TicketSubtotal, SessionValue::Money(subtotal));
}

/// Point-in-time copy of the session, for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub balance: Decimal,
    pub tickets: Vec<Ticket>,
    pub ticket_count: usize,
    pub ticket_subtotal: Decimal,
}
