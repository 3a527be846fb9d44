use crate::engine::config::EngineConfig;
use crate::engine::{Evaluator, Move};
use crate::logic::board::{Board, Position, Side};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    Corner,
    Edge,
    /// Diagonal neighbour of a corner.
    XSquare,
    CSquare,
    Interior,
}

impl CellClass {
    /// First matching rule wins: corner, edge, X-square, C-square.
    pub const fn classify(pos: Position) -> Self {
        let (col, row) = (pos.col(), pos.row());
        let col_rim = is_rim(col);
        let row_rim = is_rim(row);

        if col_rim && row_rim {
            Self::Corner
        } else if (col_rim && is_mid_edge(row)) || (row_rim && is_mid_edge(col)) {
            Self::Edge
        } else if is_next_to_rim(col) && is_next_to_rim(row) {
            Self::XSquare
        } else if (col_rim && is_next_to_rim(row)) || (row_rim && is_next_to_rim(col)) {
            Self::CSquare
        } else {
            Self::Interior
        }
    }
}

const fn is_rim(x: u8) -> bool {
    x == 0 || x == 7
}

const fn is_next_to_rim(x: u8) -> bool {
    x == 1 || x == 6
}

const fn is_mid_edge(x: u8) -> bool {
    x >= 2 && x <= 5
}

#[allow(clippy::cast_possible_wrap)]
pub const fn disc_differential(board: &Board, side: Side) -> i32 {
    board.count(side) as i32 - board.count(side.opposite()) as i32
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DiscDifferential;

impl Evaluator for DiscDifferential {
    fn score(&self, _mv: &Move, board: &Board, side: Side) -> i32 {
        disc_differential(board, side)
    }
}

/// Disc differential modulated by the class of the cell the move lands on.
pub struct PositionalEvaluator {
    config: Arc<EngineConfig>,
}

impl PositionalEvaluator {
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }
}

impl Evaluator for PositionalEvaluator {
    fn score(&self, mv: &Move, board: &Board, side: Side) -> i32 {
        let base = disc_differential(board, side);
        match CellClass::classify(mv.position) {
            CellClass::Corner => favour(base, self.config.corner_weight),
            CellClass::Edge => favour(base, self.config.edge_weight),
            CellClass::XSquare => discourage(base, self.config.x_square_weight),
            CellClass::CSquare => discourage(base, self.config.c_square_weight),
            CellClass::Interior => base,
        }
    }
}

// Weights below 1 would divide by zero or flip signs.
fn favour(base: i32, weight: i32) -> i32 {
    let weight = weight.max(1);
    if base > 0 {
        base.saturating_mul(weight)
    } else {
        base / weight
    }
}

fn discourage(base: i32, weight: i32) -> i32 {
    let weight = weight.max(1);
    if base > 0 {
        base / weight
    } else {
        base.saturating_mul(weight)
    }
}
