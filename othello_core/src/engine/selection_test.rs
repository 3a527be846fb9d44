use crate::engine::config::{EngineConfig, Strategy};
use crate::engine::eval::PositionalEvaluator;
use crate::engine::movegen::legal_moves;
use crate::engine::player::Player;
use crate::engine::search::MoveSelector;
use crate::engine::{Evaluator, Move, SearchLimit, Searcher};
use crate::logic::board::{Board, Position, Side};
use std::sync::Arc;

fn pos(col: u8, row: u8) -> Position {
    Position::new(col, row).unwrap()
}

fn selector(strategy: Strategy) -> MoveSelector {
    MoveSelector::new(Arc::new(EngineConfig::with_strategy(strategy)))
}

fn pick(strategy: Strategy, board: &Board, side: Side) -> Option<Move> {
    selector(strategy)
        .search(board, side, SearchLimit::Unbounded)
        .map(|(mv, _)| mv)
}

// Corner (7,7) nets +2, interior (3,3) nets +4 and is scanned first.
const CORNER_BOARD: &str = "
    ........
    ........
    ........
    ....OOX.
    ........
    ........
    ........
    .....XO.";

// Both moves net +3. After (5,4) the reply on (5,7) flips three discs back;
// after (6,3) it flips one.
const TRAP_BOARD: &str = "
    ........
    ........
    ........
    ....XO..
    ........
    .....O..
    .....X..
    ........";

#[test]
fn test_opening_moves_score_identically() {
    let board = Board::new();
    let config = Arc::new(EngineConfig::default());
    let evaluator = PositionalEvaluator::new(config);

    let scores: Vec<i32> = legal_moves(&board, Side::First)
        .into_iter()
        .map(|mv| {
            let mut next = board.clone();
            next.apply(mv);
            evaluator.score(&mv, &next, Side::First)
        })
        .collect();
    assert_eq!(scores, vec![3, 3, 3, 3]);

    for strategy in [Strategy::Greedy, Strategy::Lookahead, Strategy::Adversarial] {
        let (mv, stats) = selector(strategy)
            .search(&board, Side::First, SearchLimit::Unbounded)
            .unwrap();
        assert_eq!(mv, Move::new(pos(2, 3), Side::First), "{strategy:?}");
        if strategy == Strategy::Greedy {
            assert_eq!(stats.score, 3);
            assert_eq!(stats.nodes, 4);
        } else {
            assert_eq!(stats.score, 0);
        }
    }
}

#[test]
fn test_greedy_prefers_corner_over_larger_capture() {
    let board = Board::from_diagram(CORNER_BOARD).unwrap();
    let (mv, stats) = selector(Strategy::Greedy)
        .search(&board, Side::First, SearchLimit::Unbounded)
        .unwrap();
    assert_eq!(mv, Move::new(pos(7, 7), Side::First));
    assert_eq!(stats.score, 80);
    assert_eq!(stats.depth, 1);
}

#[test]
fn test_corner_loses_with_flat_weights() {
    let board = Board::from_diagram(CORNER_BOARD).unwrap();
    let config = EngineConfig {
        strategy: Strategy::Greedy,
        corner_weight: 1,
        ..EngineConfig::default()
    };
    let mut selector = MoveSelector::new(Arc::new(config));
    let (mv, stats) = selector
        .search(&board, Side::First, SearchLimit::Unbounded)
        .unwrap();
    assert_eq!(mv, Move::new(pos(3, 3), Side::First));
    assert_eq!(stats.score, 4);
}

#[test]
fn test_adversarial_avoids_strong_reply() {
    let board = Board::from_diagram(TRAP_BOARD).unwrap();
    assert_eq!(
        pick(Strategy::Greedy, &board, Side::First),
        Some(Move::new(pos(5, 4), Side::First))
    );

    let (mv, stats) = selector(Strategy::Adversarial)
        .search(&board, Side::First, SearchLimit::Unbounded)
        .unwrap();
    assert_eq!(mv, Move::new(pos(6, 3), Side::First));
    assert_eq!(stats.score, 0);
    assert_eq!(stats.depth, 2);
}

#[test]
fn test_lookahead_depth_one_matches_greedy() {
    let board = Board::from_diagram(TRAP_BOARD).unwrap();
    let config = EngineConfig {
        strategy: Strategy::Lookahead,
        search_depth: 1,
        ..EngineConfig::default()
    };
    let mut lookahead = MoveSelector::new(Arc::new(config));
    let (mv, stats) = lookahead
        .search(&board, Side::First, SearchLimit::Unbounded)
        .unwrap();
    let (greedy_mv, greedy_stats) = selector(Strategy::Greedy)
        .search(&board, Side::First, SearchLimit::Unbounded)
        .unwrap();
    assert_eq!(mv, greedy_mv);
    assert_eq!(stats.score, greedy_stats.score);
}

#[test]
fn test_lookahead_sees_reply_to_corner() {
    // After the corner the opponent takes the edge at (7,3) and flips (6,3);
    // after the interior move its only answer, (4,7), flips one disc.
    let board = Board::from_diagram(CORNER_BOARD).unwrap();
    let (mv, stats) = selector(Strategy::Lookahead)
        .search(&board, Side::First, SearchLimit::Unbounded)
        .unwrap();
    assert_eq!(mv, Move::new(pos(3, 3), Side::First));
    assert_eq!(stats.score, 1);
    assert_eq!(stats.depth, 2);
}

#[test]
fn test_search_is_deterministic_and_pure() {
    let board = Board::from_diagram(TRAP_BOARD).unwrap();
    let before = board.clone();
    for strategy in [Strategy::Greedy, Strategy::Lookahead, Strategy::Adversarial] {
        let mut engine = selector(strategy);
        let first = engine.search(&board, Side::First, SearchLimit::Unbounded);
        let second = engine.search(&board, Side::First, SearchLimit::Unbounded);
        assert_eq!(
            first.map(|(mv, s)| (mv, s.score, s.nodes)),
            second.map(|(mv, s)| (mv, s.score, s.nodes))
        );
        assert_eq!(board, before);
    }
}

#[test]
fn test_no_legal_move_is_a_pass() {
    let board = Board::from_diagram(
        "OOO.....
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    )
    .unwrap();
    for strategy in [Strategy::Greedy, Strategy::Lookahead, Strategy::Adversarial] {
        assert_eq!(pick(strategy, &board, Side::First), None);
    }
}

#[test]
fn test_lookahead_handles_opponent_pass() {
    // Taking (2,0) wipes out every Second disc, so the simulated reply is a pass.
    let board = Board::from_diagram(
        "XO......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    )
    .unwrap();
    for strategy in [Strategy::Lookahead, Strategy::Adversarial] {
        assert_eq!(
            pick(strategy, &board, Side::First),
            Some(Move::new(pos(2, 0), Side::First))
        );
    }
}

#[test]
fn test_player_pass_keeps_board() {
    // Second plays (2,0) and captures the last First disc.
    let board = Board::from_diagram(
        "OX......
         ........
         ........
         ........
         ........
         ........
         ........
         ........",
    )
    .unwrap();
    let mut player = Player::from_board(Side::First, board, Arc::new(EngineConfig::default()));
    let reply = player
        .take_turn(
            Some(Move::new(pos(2, 0), Side::Second)),
            SearchLimit::Time(50),
        )
        .unwrap();
    assert_eq!(reply, None);
    assert_eq!(player.board().count(Side::First), 0);
    assert_eq!(player.board().count(Side::Second), 3);
    assert!(player.last_stats().is_none());
}

#[test]
fn test_predicted_reply_stays_off_the_board() {
    // First has one move, (3,4); Second's only answer would be (3,3).
    let board = Board::from_diagram(
        "........
         ........
         .X......
         ..O.....
         ........
         ...O....
         ........
         ........",
    )
    .unwrap();
    let mut player = Player::from_board(
        Side::First,
        board.clone(),
        Arc::new(EngineConfig::with_strategy(Strategy::Adversarial)),
    );
    let mv = player.take_turn(None, SearchLimit::Unbounded).unwrap();
    assert_eq!(mv, Some(Move::new(pos(3, 4), Side::First)));

    let mut expected = board;
    expected.apply(Move::new(pos(3, 4), Side::First));
    assert_eq!(player.board(), &expected);
    assert_eq!(player.board().cell(pos(3, 3)), None);
    assert_eq!(player.last_stats().map(|s| s.score), Some(-1));
}

#[test]
fn test_player_pass_without_opponent_move() {
    // First has no capture anywhere, and nothing was reported this turn.
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
    for strategy in [Strategy::Greedy, Strategy::Lookahead, Strategy::Adversarial] {
        let mut player = Player::from_board(
            Side::First,
            board.clone(),
            Arc::new(EngineConfig::with_strategy(strategy)),
        );
        assert_eq!(player.take_turn(None, SearchLimit::Unbounded), Ok(None));
        assert_eq!(player.board(), &board);
        assert!(player.last_stats().is_none());
    }
}
