//! Shared test utilities and scripted randomness.

#![allow(dead_code, unused_imports)]

use basmalotto::config::LotteryConfig;
use basmalotto::lottery::{LotteryEngine, SessionKey, SessionValue};
use basmalotto::randomizer::{Randomizer, RandomizerError};
use parking_lot::Mutex;
use rust_decimal_macros::dec;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub type EventLog = Arc<Mutex<Vec<(SessionKey, SessionValue)>>>;

/// Randomizer that replays a fixed sequence, then reports itself unavailable.
pub struct ScriptedRandomizer {
    values: VecDeque<u32>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedRandomizer {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Counter of `generate` calls, readable after the randomizer is moved.
    pub fn calls(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.calls)
    }
}

impl Randomizer for ScriptedRandomizer {
    fn generate(&mut self, _min: u32, _max: u32) -> Result<u32, RandomizerError> {
        *self.calls.lock() += 1;
        self.values
            .pop_front()
            .ok_or_else(|| RandomizerError::Unavailable {
                reason: "script exhausted".to_string(),
            })
    }
}

/// The worked example: numbers 1..=10, tickets of 4 costing 2.0, 10.0 to start.
pub fn example_config() -> LotteryConfig {
    LotteryConfig {
        max_numbers_per_ticket: 4,
        max_player_tickets: 10,
        player_starting_money: dec!(10.0),
        ticket_cost: dec!(2.0),
        ticket_minimum_number: 1,
        ticket_maximum_number: 10,
        ..LotteryConfig::default()
    }
}

/// Engine over `config` whose draws replay `script`.
pub fn scripted_engine(config: LotteryConfig, script: &[u32]) -> LotteryEngine {
    LotteryEngine::with_randomizer(config, Box::new(ScriptedRandomizer::new(script)))
        .expect("valid test config")
}

/// Record every general change event.
pub fn record_events(engine: &mut LotteryEngine) -> EventLog {
    let log: EventLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    engine.subscribe(move |key, value| sink.lock().push((key, value.clone())));
    log
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
