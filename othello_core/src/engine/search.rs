use crate::engine::config::{EngineConfig, Strategy};
use crate::engine::eval::{disc_differential, PositionalEvaluator};
use crate::engine::movegen::legal_moves;
use crate::engine::predict::predict_reply;
use crate::engine::{Evaluator, Move, SearchLimit, SearchStats, Searcher};
use crate::logic::board::{Board, Side};
use std::sync::Arc;
use std::time::Instant;

// Candidates are explored on board copies; the caller's board is never touched.
pub struct MoveSelector {
    config: Arc<EngineConfig>,
    evaluator: PositionalEvaluator,
    nodes_searched: u32,
}

impl MoveSelector {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            evaluator: PositionalEvaluator::new(config.clone()),
            config,
            nodes_searched: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // Past the first ply the opponent answers with the same rule one level
    // shallower, and the own move is scored on the board after that answer.
    fn weighted(&mut self, board: &Board, side: Side, depth: u8) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;

        for mv in legal_moves(board, side) {
            self.nodes_searched += 1;
            let mut next = board.clone();
            next.apply(mv);

            if depth > 1 {
                // No answer means the opponent passes.
                if let Some((reply, _)) = self.weighted(&next, side.opposite(), depth - 1) {
                    next.apply(reply);
                }
            }

            let score = self.evaluator.score(&mv, &next, side);
            log::trace!("depth {depth} candidate {mv} scored {score}");
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }

        best
    }

    fn adversarial(&mut self, board: &Board, side: Side) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;

        for mv in legal_moves(board, side) {
            self.nodes_searched += 1;
            let mut next = board.clone();
            next.apply(mv);

            if let Some(prediction) = predict_reply(&next, side.opposite()) {
                self.nodes_searched += prediction.considered;
                next.apply(prediction.reply);
            }

            let score = disc_differential(&next, side);
            log::trace!("candidate {mv} scored {score} after predicted reply");
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }

        best
    }
}

impl Searcher for MoveSelector {
    fn search(
        &mut self,
        board: &Board,
        side: Side,
        limit: SearchLimit,
    ) -> Option<(Move, SearchStats)> {
        self.nodes_searched = 0;
        let start_time = Instant::now();
        let depth = self.config.effective_depth();

        let best = match self.config.strategy {
            Strategy::Greedy | Strategy::Lookahead => self.weighted(board, side, depth),
            Strategy::Adversarial => self.adversarial(board, side),
        };

        let time_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);
        if let SearchLimit::Time(budget) = limit {
            if time_ms > budget {
                log::warn!("{side:?} took {time_ms}ms, over the {budget}ms budget");
            }
        }

        let Some((mv, score)) = best else {
            log::debug!("{side:?} has no legal move");
            return None;
        };

        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
            score,
            time_ms,
        };
        log::debug!(
            "{:?} picked {} (score {}, depth {}, {} nodes, {}ms)",
            self.config.strategy,
            mv,
            stats.score,
            stats.depth,
            stats.nodes,
            stats.time_ms
        );
        Some((mv, stats))
    }
}
