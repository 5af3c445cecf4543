//! Lottery engine shared across threads.
//!
//! The engine itself is single-threaded. This wrapper serialises every
//! public operation behind one mutex, so a store write and the hooks it
//! triggers are never interleaved with another caller.

use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;

use crate::lottery::draw::PurchaseOutcome;
use crate::lottery::engine::LotteryEngine;
use crate::lottery::error::{DrawError, IndexError, PurchaseError, ValidationError};
use crate::lottery::session::{SessionKey, SessionSnapshot, SessionValue};
use crate::lottery::ticket::Ticket;

/// Cloneable, thread-safe handle to one [`LotteryEngine`].
///
/// Observers run while the lock is held and must not call back into the
/// same handle.
#[derive(Clone)]
pub struct SharedLottery {
    inner: Arc<Mutex<LotteryEngine>>,
}

impl SharedLottery {
    pub fn new(engine: LotteryEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn add_ticket(&self, numbers: &[u32]) -> Result<Ticket, ValidationError> {
        self.inner.lock().add_ticket(numbers)
    }

    pub fn delete_ticket(&self, index: usize) -> Result<Ticket, IndexError> {
        self.inner.lock().delete_ticket(index)
    }

    pub fn generate_winning_numbers(&self, count: usize) -> Result<Vec<u32>, DrawError> {
        self.inner.lock().generate_winning_numbers(count)
    }

    pub fn buy_tickets(&self) -> Result<PurchaseOutcome, PurchaseError> {
        self.inner.lock().buy_tickets()
    }

    pub fn balance(&self) -> Decimal {
        self.inner.lock().balance()
    }

    /// Consistent view of the whole session, taken under one lock.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.lock().snapshot()
    }

    pub fn subscribe<F>(&self, observer: F)
    where
        F: FnMut(SessionKey, &SessionValue) + Send + 'static,
    {
        self.inner.lock().subscribe(observer);
    }
}
