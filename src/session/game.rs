//! Turn sequencing on top of a rules engine.
//!
//! A `Session` is the outer state machine: it rolls, asks the engine for
//! legal moves, lets a policy choose, applies the move, spends any bonus,
//! and decides who rolls next. It holds no board data of its own; every
//! decision re-queries the engine.

use serde::{Deserialize, Serialize};

use crate::core::{Color, DiceSource, GameRng, Move};
use crate::rules::{RulesEngine, TurnOutcome};

use super::config::SessionConfig;
use super::policy::MovePolicy;

/// What happened on one entry of the session log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// No legal move for the roll.
    Pass,
    /// The rolled move.
    Moved { mv: Move, outcome: TurnOutcome },
    /// A bonus spent right after the rolled move.
    Bonus { mv: Move, outcome: TurnOutcome },
    /// A bonus no token could use.
    BonusUnused { steps: u8 },
}

/// One entry of the session log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Color acting.
    pub color: Color,
    /// The roll this entry belongs to.
    pub roll: u8,
    /// What happened.
    pub event: TurnEvent,
}

/// Result of a finished (or abandoned) session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Applied moves, bonus moves included.
    pub moves: usize,
    /// Winning color, or `None` if a cap was hit first.
    pub winner: Option<Color>,
}

/// A single game being played.
pub struct Session<E, P, D> {
    engine: E,
    policy: P,
    dice: D,
    rng: GameRng,
    config: SessionConfig,
    seat: usize,
    moves: usize,
    rolls: usize,
    winner: Option<Color>,
    history: Vec<TurnRecord>,
}

impl<E: RulesEngine, P: MovePolicy<E>> Session<E, P, GameRng> {
    /// Create a session whose dice and policy randomness both derive from
    /// `config.seed`.
    pub fn seeded(engine: E, policy: P, config: SessionConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let dice = rng.fork();
        Self::with_parts(engine, policy, dice, rng, config)
    }
}

impl<E: RulesEngine, P: MovePolicy<E>, D: DiceSource> Session<E, P, D> {
    /// Create a session with an explicit dice source.
    pub fn new(engine: E, policy: P, dice: D, config: SessionConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_parts(engine, policy, dice, rng, config)
    }

    fn with_parts(engine: E, policy: P, dice: D, rng: GameRng, config: SessionConfig) -> Self {
        Self {
            engine,
            policy,
            dice,
            rng,
            config,
            seat: 0,
            moves: 0,
            rolls: 0,
            winner: None,
            history: Vec::new(),
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Color due to roll next.
    pub fn current_player(&self) -> Color {
        self.engine.config().players[self.seat]
    }

    /// Applied moves so far, bonus moves included.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Session log, oldest first.
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Has the game been won or a cap been reached?
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
            || self.moves >= self.config.max_moves
            || self.rolls >= self.config.max_rolls
    }

    /// Result so far.
    pub fn result(&self) -> GameResult {
        GameResult {
            moves: self.moves,
            winner: self.winner,
        }
    }

    /// Play one roll. Does nothing once the session is over.
    pub fn step(&mut self) {
        if self.is_over() {
            return;
        }

        let color = self.current_player();
        let roll = self.dice.roll();
        self.rolls += 1;

        let legal = self.engine.legal_moves(color, roll);
        let Some(mv) = self.policy.choose(&self.engine, color, &legal, &mut self.rng) else {
            if roll != 6 {
                self.engine.reset_consecutive_sixes(color);
            }
            self.record(color, roll, TurnEvent::Pass);
            self.advance_seat();
            return;
        };

        let outcome = self.engine.apply_move(color, roll, mv);
        self.moves += 1;
        self.record(color, roll, TurnEvent::Moved { mv, outcome });

        if self.config.apply_bonuses && outcome.bonus_steps > 0 && outcome.winner.is_none() {
            self.spend_bonus(color, roll, outcome.bonus_steps);
        }

        self.winner = self.engine.winner_if_any();
        if self.winner.is_some() {
            return;
        }

        if roll == 6 && self.config.extra_turn_on_six && !outcome.forfeited {
            return;
        }
        self.advance_seat();
    }

    /// Play until a winner or a cap.
    pub fn play(&mut self) -> GameResult {
        while !self.is_over() {
            self.step();
        }
        self.result()
    }

    fn spend_bonus(&mut self, color: Color, roll: u8, steps: u8) {
        let options = self.engine.legal_bonus_moves(color, steps);
        match self.policy.choose(&self.engine, color, &options, &mut self.rng) {
            Some(mv) => {
                let outcome = self.engine.apply_bonus(color, mv);
                self.moves += 1;
                self.record(color, roll, TurnEvent::Bonus { mv, outcome });
            }
            None => self.record(color, roll, TurnEvent::BonusUnused { steps }),
        }
    }

    fn record(&mut self, color: Color, roll: u8, event: TurnEvent) {
        self.history.push(TurnRecord { color, roll, event });
    }

    fn advance_seat(&mut self) {
        self.seat = (self.seat + 1) % self.engine.config().players.len();
    }
}
