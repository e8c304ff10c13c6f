//! Property tests over randomly played games.
//!
//! A seeded session plays a random number of moves; after every step the
//! board must still satisfy its structural invariants.

use proptest::prelude::*;

use ludo_engine::core::{BoardConfig, Color, Move, Position, TokenId, MAX_TOKENS_PER_CELL};
use ludo_engine::rules::{Board, RulesEngine};
use ludo_engine::session::{Session, SessionConfig, UniformRandom};

fn played_board(seed: u64, moves: usize) -> Board {
    let board = Board::new(BoardConfig::default_four_players()).unwrap();
    let config = SessionConfig::new().with_seed(seed).with_max_moves(moves);
    let mut session = Session::seeded(board, UniformRandom, config);
    session.play();
    session.engine().clone()
}

fn assert_well_formed(board: &Board) {
    let config = board.config();
    let state = board.state();

    for cell in 0..config.track_length {
        assert!(
            state.count_on_cell(config, cell) <= MAX_TOKENS_PER_CELL,
            "cell {} overcrowded",
            cell
        );
    }
    for token in TokenId::all() {
        match state.position(token) {
            Position::Track(cell) => {
                assert!(cell < config.track_length);
                assert_ne!(cell, config.start_index(token.color));
            }
            Position::HomeLane(lane) => assert!(lane < config.home_lane_length),
            _ => {}
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Invariant: occupancy cap and position ranges hold after every step.
    #[test]
    fn board_stays_well_formed(seed in any::<u64>(), max_moves in 1usize..400) {
        let board = Board::new(BoardConfig::default_four_players()).unwrap();
        let config = SessionConfig::new().with_seed(seed).with_max_moves(max_moves);
        let mut session = Session::seeded(board, UniformRandom, config);

        while !session.is_over() {
            session.step();
            assert_well_formed(session.engine());
        }
    }

    /// Invariant: a token that reached Home never leaves it.
    #[test]
    fn home_is_final(seed in any::<u64>(), max_moves in 50usize..600) {
        let board = Board::new(BoardConfig::default_four_players()).unwrap();
        let config = SessionConfig::new().with_seed(seed).with_max_moves(max_moves);
        let mut session = Session::seeded(board, UniformRandom, config);

        let mut home: Vec<TokenId> = Vec::new();
        while !session.is_over() {
            session.step();
            for &token in &home {
                prop_assert_eq!(session.engine().position(token), Position::Home);
            }
            home = TokenId::all()
                .filter(|&t| session.engine().position(t) == Position::Home)
                .collect();
        }
    }

    /// Invariant: applying a move outside the legal list changes nothing.
    #[test]
    fn illegal_move_is_noop(
        seed in any::<u64>(),
        moves in 0usize..200,
        color_index in 0usize..4,
        slot in 0usize..4,
        roll in 1u8..=6,
        steps in 0u8..=7,
    ) {
        let mut board = played_board(seed, moves);
        let color = Color::ALL[color_index];
        let mv = Move::new(TokenId::new(color, slot), steps);
        prop_assume!(!board.legal_moves(color, roll).contains(&mv));

        let before = board.state().clone();
        let outcome = board.apply_move(color, roll, mv);

        prop_assert!(outcome.is_uneventful());
        prop_assert_eq!(board.state(), &before);
    }

    /// Invariant: no target lies beyond Home.
    #[test]
    fn exact_entry(seed in any::<u64>(), moves in 0usize..300, steps in 1u8..=20) {
        let board = played_board(seed, moves);
        let home_distance = board.config().home_distance();

        for token in TokenId::all() {
            let Some(distance) = board.distance_from_start(token) else {
                continue;
            };
            let target = board.target_of(token, steps);
            if distance + usize::from(steps) > home_distance {
                prop_assert_eq!(target, None);
            }
            if distance + usize::from(steps) == home_distance {
                prop_assert_eq!(target, Some(Position::Home));
            }
        }
    }
}
