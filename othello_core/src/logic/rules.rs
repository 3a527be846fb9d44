use crate::logic::board::{Bitboard, Board, Position, Side};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    Occupied,
    NoCapture,
    NotYourTurn,
    GameOver,
    CannotPass,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Occupied => "target cell is occupied",
            Self::NoCapture => "move captures no discs",
            Self::NotYourTurn => "move played by the wrong side",
            Self::GameOver => "game is already finished",
            Self::CannotPass => "passing is only allowed without a legal move",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for MoveError {}

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Discs `side` would capture by playing at `pos`. Zero when the cell is
/// taken or nothing is bracketed.
pub fn flips(board: &Board, pos: Position, side: Side) -> Bitboard {
    if board.occupied() & pos.bit() != 0 {
        return 0;
    }

    let own = board.discs(side);
    let enemy = board.discs(side.opposite());
    let mut captured = 0;

    for (dc, dr) in DIRECTIONS {
        let mut line = 0;
        let mut cursor = pos.offset(dc, dr);
        while let Some(cell) = cursor {
            let bit = cell.bit();
            if enemy & bit != 0 {
                line |= bit;
                cursor = cell.offset(dc, dr);
            } else {
                if own & bit != 0 {
                    captured |= line;
                }
                break;
            }
        }
    }

    captured
}

/// Whether `side` may play at `pos` on `board`.
pub fn is_legal(board: &Board, pos: Position, side: Side) -> bool {
    flips(board, pos, side) != 0
}

/// Like [`is_legal`], but reports why a move is rejected and hands back the
/// captured discs on success.
pub fn check_move(board: &Board, pos: Position, side: Side) -> Result<Bitboard, MoveError> {
    if board.cell(pos).is_some() {
        return Err(MoveError::Occupied);
    }
    match flips(board, pos, side) {
        0 => Err(MoveError::NoCapture),
        captured => Ok(captured),
    }
}
