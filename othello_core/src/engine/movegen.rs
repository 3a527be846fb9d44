use crate::engine::move_list::MoveList;
use crate::engine::Move;
use crate::logic::board::{Board, Position, Side};
use crate::logic::rules::is_legal;

/// Every legal move for `side`, in scan order (column by column). An empty
/// list means `side` has to pass.
pub fn legal_moves(board: &Board, side: Side) -> MoveList {
    let mut moves = MoveList::new();
    for pos in Position::all() {
        if is_legal(board, pos, side) {
            moves.push(Move::new(pos, side));
        }
    }
    moves
}

pub fn has_legal_move(board: &Board, side: Side) -> bool {
    Position::all().any(|pos| is_legal(board, pos, side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn pos(col: u8, row: u8) -> Position {
        Position::new(col, row).unwrap()
    }

    #[test]
    fn test_opening_moves_in_scan_order() {
        let board = Board::new();
        let moves: Vec<Position> = legal_moves(&board, Side::First)
            .into_iter()
            .map(|mv| mv.position)
            .collect();
        assert_eq!(moves, vec![pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)]);
        assert!(has_legal_move(&board, Side::Second));
    }

    #[test]
    fn test_no_moves_is_empty_list() {
        let board = Board::from_diagram(
            "OO......
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        assert!(legal_moves(&board, Side::First).is_empty());
        assert!(!has_legal_move(&board, Side::First));
        assert!(legal_moves(&board, Side::Second).is_empty());
    }

    #[test]
    fn test_enumeration_does_not_mutate() {
        let board = Board::new();
        let before = board.clone();
        let _ = legal_moves(&board, Side::First);
        let _ = legal_moves(&board, Side::Second);
        assert_eq!(board, before);
    }

    #[test]
    fn test_random_playouts_yield_distinct_legal_moves() {
        let mut rng = StdRng::seed_from_u64(0x07e1_1000);
        for _ in 0..20 {
            let mut board = Board::new();
            let mut side = Side::First;
            let mut passes = 0;
            while passes < 2 {
                let moves = legal_moves(&board, side);
                let unique: HashSet<Position> = moves.iter().map(|mv| mv.position).collect();
                assert_eq!(unique.len(), moves.len());
                for mv in &moves {
                    assert_eq!(mv.side, side);
                    assert!(is_legal(&board, mv.position, side));
                }
                assert_eq!(moves.is_empty(), !has_legal_move(&board, side));

                if moves.is_empty() {
                    passes += 1;
                } else {
                    passes = 0;
                    let pick = moves.get(rng.gen_range(0..moves.len())).unwrap();
                    board.apply(pick);
                }
                side = side.opposite();
            }
            assert!(board.count(Side::First) + board.count(Side::Second) <= 64);
        }
    }
}
