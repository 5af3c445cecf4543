//! Number-matching lottery simulation on a reactive property store.
//!
//! - [`store`]: keyed property bag with observers and key-bound hooks
//! - [`lottery`]: tickets, draws and payouts on top of the store
//! - [`randomizer`]: pluggable number sources
//! - [`config`]: game rules, loaded from TOML

pub mod config;
pub mod logging;
pub mod lottery;
pub mod randomizer;
pub mod store;
