use crate::config::MatchConfig;
use othello_core::engine::config::EngineConfig;
use othello_core::engine::movegen::legal_moves;
use othello_core::engine::player::Player;
use othello_core::engine::{Move, SearchLimit};
use othello_core::logic::board::{Board, Side};
use othello_core::logic::game::{GameState, GameStatus};
use othello_core::logic::rules::MoveError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub game: u32,
    pub winner: Option<Side>,
    pub first_discs: u32,
    pub second_discs: u32,
    pub plies: usize,
    pub passes: usize,
    pub first_nodes: u64,
    pub second_nodes: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchReport {
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,
    pub games: Vec<GameSummary>,
}

enum Seat {
    Engine(Player),
    Random,
}

impl Seat {
    fn new(side: Side, config: Option<&EngineConfig>, board: &Board) -> Self {
        config.map_or(Self::Random, |config| {
            let player = Player::from_board(side, board.clone(), Arc::new(config.clone()));
            tracing::debug!(
                ?side,
                depth = player.config().effective_depth(),
                "engine seated"
            );
            Self::Engine(player)
        })
    }

    fn play(
        &mut self,
        side: Side,
        pending: Option<Move>,
        board: &Board,
        limit: SearchLimit,
        rng: &mut StdRng,
    ) -> Result<Option<Move>, MoveError> {
        match self {
            Self::Engine(player) => player.take_turn(pending, limit),
            Self::Random => Ok(random_move(board, side, rng)),
        }
    }

    fn last_nodes(&self) -> u64 {
        match self {
            Self::Engine(player) => player.last_stats().map_or(0, |s| u64::from(s.nodes)),
            Self::Random => 0,
        }
    }
}

fn random_move(board: &Board, side: Side, rng: &mut StdRng) -> Option<Move> {
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        return None;
    }
    moves.get(rng.gen_range(0..moves.len()))
}

fn commit(game: &mut GameState, played: Option<Move>) -> Result<(), MoveError> {
    match played {
        Some(mv) => game.make_move(mv).map(|_| ()),
        None => game.pass(),
    }
}

fn play_game(
    config: &MatchConfig,
    index: u32,
    rng: &mut StdRng,
) -> Result<GameSummary, MoveError> {
    let mut game = GameState::new();
    for _ in 0..config.random_plies {
        if game.is_over() {
            break;
        }
        let played = random_move(&game.board, game.turn, rng);
        commit(&mut game, played)?;
    }

    let mut first = Seat::new(Side::First, config.first.as_ref(), &game.board);
    let mut second = Seat::new(Side::Second, config.second.as_ref(), &game.board);
    let limit = config.limit();
    let mut pending = None;
    let mut nodes = [0_u64; 2];

    while !game.is_over() {
        let side = game.turn;
        let seat = match side {
            Side::First => &mut first,
            Side::Second => &mut second,
        };
        let played = seat.play(side, pending, &game.board, limit, rng)?;
        if let Some(total) = nodes.get_mut(side.index()) {
            *total += seat.last_nodes();
        }
        match played {
            Some(mv) => tracing::debug!(game = index, %mv, "move"),
            None => tracing::debug!(game = index, ?side, "pass"),
        }
        commit(&mut game, played)?;
        pending = played;
    }

    let (first_discs, second_discs) = game.score();
    let winner = match game.status {
        GameStatus::Finished { winner } => winner,
        GameStatus::Playing => None,
    };
    let passes = game
        .history
        .iter()
        .filter(|record| record.position.is_none())
        .count();
    tracing::info!(
        game = index,
        ?winner,
        first_discs,
        second_discs,
        "game finished"
    );

    let [first_nodes, second_nodes] = nodes;
    Ok(GameSummary {
        game: index,
        winner,
        first_discs,
        second_discs,
        plies: game.history.len() - passes,
        passes,
        first_nodes,
        second_nodes,
    })
}

/// Plays `config.games` games with one seeded generator shared by the
/// random openings and any random seats.
pub fn run_match(config: &MatchConfig) -> Result<MatchReport, MoveError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut report = MatchReport::default();

    for index in 0..config.games {
        let summary = play_game(config, index, &mut rng)?;
        match summary.winner {
            Some(Side::First) => report.first_wins += 1,
            Some(Side::Second) => report.second_wins += 1,
            None => report.draws += 1,
        }
        report.games.push(summary);
    }

    tracing::info!(
        first_wins = report.first_wins,
        second_wins = report.second_wins,
        draws = report.draws,
        "match finished"
    );
    Ok(report)
}
