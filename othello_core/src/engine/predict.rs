use crate::engine::eval::DiscDifferential;
use crate::engine::movegen::legal_moves;
use crate::engine::{Evaluator, Move};
use crate::logic::board::{Board, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub reply: Move,
    pub differential: i32,
    pub considered: u32,
}

/// Predicts `opponent`'s reply on a hypothetical `board`, scoring replies by
/// raw disc count only. The first reply with the best count wins. `None`
/// means the opponent has to pass.
pub fn predict_reply(board: &Board, opponent: Side) -> Option<Prediction> {
    let mut best: Option<Prediction> = None;
    let mut considered = 0;

    for reply in legal_moves(board, opponent) {
        considered += 1;
        let mut next = board.clone();
        next.apply(reply);
        let differential = DiscDifferential.score(&reply, &next, opponent);

        if best.map_or(true, |b| differential > b.differential) {
            best = Some(Prediction {
                reply,
                differential,
                considered: 0,
            });
        }
    }

    best.map(|prediction| Prediction {
        considered,
        ..prediction
    })
}
