use crate::engine::eval_constants::{
    DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH, WEIGHT_CORNER, WEIGHT_C_SQUARE, WEIGHT_EDGE,
    WEIGHT_X_SQUARE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Greedy,
    Lookahead,
    #[default]
    Adversarial,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub strategy: Strategy,
    pub search_depth: u8, // Lookahead only

    // Evaluation Parameters
    pub corner_weight: i32,
    pub edge_weight: i32,
    pub x_square_weight: i32,
    pub c_square_weight: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            search_depth: DEFAULT_SEARCH_DEPTH,

            corner_weight: WEIGHT_CORNER,
            edge_weight: WEIGHT_EDGE,
            x_square_weight: WEIGHT_X_SQUARE,
            c_square_weight: WEIGHT_C_SQUARE,
        }
    }
}

#[derive(Deserialize)]
struct EngineConfigJson {
    strategy: Option<Strategy>,
    search_depth: Option<u8>,

    corner_weight: Option<f32>,
    edge_weight: Option<f32>,
    x_square_weight: Option<f32>,
    c_square_weight: Option<f32>,
}

impl EngineConfig {
    #[must_use]
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Loads a config where weights are scale factors on the reference
    /// magnitudes. Missing fields keep their defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        let json_config: EngineConfigJson = serde_json::from_str(json_str)?;
        let default = Self::default();

        Ok(Self {
            strategy: json_config.strategy.unwrap_or(default.strategy),
            search_depth: json_config.search_depth.unwrap_or(default.search_depth),

            corner_weight: apply_scale(default.corner_weight, json_config.corner_weight),
            edge_weight: apply_scale(default.edge_weight, json_config.edge_weight),
            x_square_weight: apply_scale(default.x_square_weight, json_config.x_square_weight),
            c_square_weight: apply_scale(default.c_square_weight, json_config.c_square_weight),
        })
    }

    pub fn effective_depth(&self) -> u8 {
        match self.strategy {
            Strategy::Greedy => 1,
            Strategy::Adversarial => 2,
            Strategy::Lookahead => self.search_depth.clamp(1, MAX_SEARCH_DEPTH),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn apply_scale(default_val: i32, scale: Option<f32>) -> i32 {
    scale.map_or(default_val, |s| (default_val as f32 * s) as i32)
}
