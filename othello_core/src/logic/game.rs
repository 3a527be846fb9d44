use crate::engine::movegen::has_legal_move;
use crate::engine::Move;
use crate::logic::board::{Board, Position, Side};
use crate::logic::rules::MoveError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    /// `winner` is `None` for a draw.
    Finished { winner: Option<Side> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub side: Side,
    /// `None` for a pass.
    pub position: Option<Position>,
    pub flipped: u32,
    pub first_count: u32,
    pub second_count: u32,
}

/// A whole game: board, side to move, and what has been played so far.
/// Passes are explicit; the game ends once neither side can move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Side,
    pub status: GameStatus,
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::First)
    }

    #[must_use]
    pub fn from_board(board: Board, turn: Side) -> Self {
        let mut game = Self {
            board,
            turn,
            status: GameStatus::Playing,
            history: Vec::new(),
        };
        game.update_status();
        game
    }

    /// Plays `mv` for the side to move. Returns the number of discs flipped.
    pub fn make_move(&mut self, mv: Move) -> Result<u32, MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }
        if mv.side != self.turn {
            return Err(MoveError::NotYourTurn);
        }

        let flipped = self.board.try_apply(mv)?;
        self.record(Some(mv.position), flipped);
        self.turn = self.turn.opposite();
        self.update_status();
        Ok(flipped)
    }

    /// Skips the turn. Only allowed when the side to move has no legal move.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }
        if self.must_pass() {
            self.record(None, 0);
            self.turn = self.turn.opposite();
            self.update_status();
            Ok(())
        } else {
            Err(MoveError::CannotPass)
        }
    }

    pub fn must_pass(&self) -> bool {
        !has_legal_move(&self.board, self.turn)
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Disc counts as `(first, second)`.
    pub const fn score(&self) -> (u32, u32) {
        (
            self.board.count(Side::First),
            self.board.count(Side::Second),
        )
    }

    fn record(&mut self, position: Option<Position>, flipped: u32) {
        let (first_count, second_count) = self.score();
        self.history.push(MoveRecord {
            side: self.turn,
            position,
            flipped,
            first_count,
            second_count,
        });
    }

    fn update_status(&mut self) {
        if has_legal_move(&self.board, self.turn)
            || has_legal_move(&self.board, self.turn.opposite())
        {
            return;
        }

        let (first, second) = self.score();
        let winner = match first.cmp(&second) {
            Ordering::Greater => Some(Side::First),
            Ordering::Less => Some(Side::Second),
            Ordering::Equal => None,
        };
        log::debug!("game over: {first}-{second}, winner {winner:?}");
        self.status = GameStatus::Finished { winner };
    }
}
