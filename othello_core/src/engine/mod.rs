use crate::logic::board::{Board, Position, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod eval;
pub mod eval_constants;
pub mod move_list;
pub mod movegen;
pub mod player;
pub mod predict;
pub mod search;

#[cfg(test)]
mod selection_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub side: Side,
}

impl Move {
    pub const fn new(position: Position, side: Side) -> Self {
        Self { position, side }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.side.symbol(), self.position)
    }
}

/// Per-move time budget handed in by the turn driver. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchLimit {
    Time(u64), // milliseconds
    Unbounded,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
    pub score: i32,
    pub time_ms: u64,
}

pub trait Evaluator {
    fn score(&self, mv: &Move, board: &Board, side: Side) -> i32;
}

pub trait Searcher {
    fn search(
        &mut self,
        board: &Board,
        side: Side,
        limit: SearchLimit,
    ) -> Option<(Move, SearchStats)>;
}
