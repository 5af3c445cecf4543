//! Keyed reactive property store.
//!
//! # Architecture
//!
//! ```text
//! set(key, value) ──→ values ──→ observers (key, value)
//!                                   │
//!                                   └──→ key observers ──→ hooks (may set again)
//! ```
//!
//! - **Schema**: compile-time description of keys, values and the hooks bound
//!   to each key
//! - **Observers**: presentation-side callbacks, notified in registration order
//! - **Hooks**: derived-property rules that run inline and may write back
//!
//! Hooks run synchronously inside the triggering `set`. A hook that writes
//! the key it is bound to (directly or through another hook) recurses
//! without bound; schemas must keep their hook graph acyclic.

mod property;

pub use property::{Hook, KeyObserver, Observer, Schema, SetOptions, Store};
