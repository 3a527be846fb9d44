use othello_core::engine::config::{EngineConfig, Strategy};
use othello_core::engine::SearchLimit;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Settings for a series of games between two seats.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub games: u32,
    pub seed: u64,
    /// Random plies played before the seats take over, so games differ.
    pub random_plies: u32,
    pub time_budget_ms: Option<u64>,
    /// `None` seats a random mover.
    pub first: Option<EngineConfig>,
    pub second: Option<EngineConfig>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            seed: 0x07e1_1000,
            random_plies: 4,
            time_budget_ms: Some(1000),
            first: Some(EngineConfig::with_strategy(Strategy::Adversarial)),
            second: Some(EngineConfig::with_strategy(Strategy::Greedy)),
        }
    }
}

impl MatchConfig {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    pub fn limit(&self) -> SearchLimit {
        self.time_budget_ms
            .map_or(SearchLimit::Unbounded, SearchLimit::Time)
    }
}
