//! Move selection policies.
//!
//! Choosing among legal moves is not a rule: the engine only says what is
//! allowed. Policies are trait-based so sessions can swap them freely.

use crate::core::{Color, GameRng, Move};
use crate::rules::RulesEngine;

/// Policy for picking one move out of a legal set.
///
/// Used both for the rolled move and for spending bonus steps.
pub trait MovePolicy<E: RulesEngine> {
    /// Choose a move from `moves`.
    ///
    /// Returns `None` only if `moves` is empty.
    fn choose(&self, engine: &E, color: Color, moves: &[Move], rng: &mut GameRng) -> Option<Move>;
}

/// Always takes the first legal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegal;

impl<E: RulesEngine> MovePolicy<E> for FirstLegal {
    fn choose(&self, _engine: &E, _color: Color, moves: &[Move], _rng: &mut GameRng) -> Option<Move> {
        moves.first().copied()
    }
}

/// Uniform random policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl<E: RulesEngine> MovePolicy<E> for UniformRandom {
    fn choose(&self, _engine: &E, _color: Color, moves: &[Move], rng: &mut GameRng) -> Option<Move> {
        rng.choose(moves).copied()
    }
}
