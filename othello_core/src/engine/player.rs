use crate::engine::config::EngineConfig;
use crate::engine::search::MoveSelector;
use crate::engine::{Move, SearchLimit, SearchStats, Searcher};
use crate::logic::board::{Board, Side};
use crate::logic::rules::MoveError;
use std::sync::Arc;

/// An engine seat in a game. Keeps its own copy of the board, which changes
/// only through the opponent's reported moves and its own chosen moves.
pub struct Player {
    side: Side,
    board: Board,
    selector: MoveSelector,
    last_stats: Option<SearchStats>,
}

impl Player {
    pub fn new(side: Side) -> Self {
        Self::with_config(side, Arc::new(EngineConfig::default()))
    }

    pub fn with_config(side: Side, config: Arc<EngineConfig>) -> Self {
        Self::from_board(side, Board::new(), config)
    }

    pub fn from_board(side: Side, board: Board, config: Arc<EngineConfig>) -> Self {
        log::info!("{side:?} engine ready ({:?})", config.strategy);
        Self {
            side,
            board,
            selector: MoveSelector::new(config),
            last_stats: None,
        }
    }

    pub const fn side(&self) -> Side {
        self.side
    }

    pub const fn opponent(&self) -> Side {
        self.side.opposite()
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        self.selector.config()
    }

    pub const fn last_stats(&self) -> Option<SearchStats> {
        self.last_stats
    }

    /// Plays one turn. `opponent_last_move` is `None` on the very first turn
    /// or when the opponent passed. Returns the move played, or `None` when
    /// this side has to pass.
    pub fn take_turn(
        &mut self,
        opponent_last_move: Option<Move>,
        limit: SearchLimit,
    ) -> Result<Option<Move>, MoveError> {
        if let Some(mv) = opponent_last_move {
            if mv.side != self.opponent() {
                return Err(MoveError::NotYourTurn);
            }
            self.board.try_apply(mv)?;
        }

        let Some((mv, stats)) = self.selector.search(&self.board, self.side, limit) else {
            log::info!("{:?} passes", self.side);
            self.last_stats = None;
            return Ok(None);
        };

        self.board.apply(mv);
        self.last_stats = Some(stats);
        Ok(Some(mv))
    }
}
