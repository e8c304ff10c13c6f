//! Rules engine trait and per-move outcome.
//!
//! Orchestrators drive a game exclusively through `RulesEngine`:
//! - What moves are legal for a roll
//! - Applying a chosen move (the only state mutation)
//! - Win detection
//!
//! They never hold copies of position data beyond what they query.

use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, BoardState, Color, Move, MoveList, Position, TokenId};

/// Bonus steps earned by capturing an enemy token.
pub const CAPTURE_BONUS: u8 = 20;

/// Bonus steps earned by bringing a token home.
pub const HOME_BONUS: u8 = 10;

/// What one applied move did.
///
/// Produced once per applied move and not stored by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// An enemy token was sent back to Base.
    pub capture: bool,

    /// The moved token finished.
    pub reached_home: bool,

    /// Extra steps the mover is entitled to: 20, 10 or 0.
    pub bonus_steps: u8,

    /// First color in turn order with every token home, if any.
    pub winner: Option<Color>,

    /// The move was cancelled by the third consecutive six.
    pub forfeited: bool,
}

impl TurnOutcome {
    /// Outcome of a move that took effect. Capture outranks home arrival.
    #[must_use]
    pub fn new(capture: bool, reached_home: bool, winner: Option<Color>) -> Self {
        let bonus_steps = if capture {
            CAPTURE_BONUS
        } else if reached_home {
            HOME_BONUS
        } else {
            0
        };
        Self {
            capture,
            reached_home,
            bonus_steps,
            winner,
            forfeited: false,
        }
    }

    /// Outcome of a triple-six forfeiture.
    #[must_use]
    pub fn forfeit() -> Self {
        Self {
            forfeited: true,
            ..Self::default()
        }
    }

    /// Did nothing noteworthy happen?
    ///
    /// True for rejected moves as well as for legal moves that neither
    /// captured, finished, nor won.
    #[must_use]
    pub fn is_uneventful(&self) -> bool {
        *self == Self::default()
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty if the roll forces a pass
/// - `apply_move`: Reject anything absent from `legal_moves` with a
///   default outcome and no state change
/// - `apply_bonus`: Same contract, validated against `legal_bonus_moves`
pub trait RulesEngine {
    /// Get the board configuration.
    fn config(&self) -> &BoardConfig;

    /// Read-only view of the live board.
    fn state(&self) -> &BoardState;

    /// Legal moves for `color` on `roll` (1..=6).
    fn legal_moves(&self, color: Color, roll: u8) -> MoveList;

    /// Apply a move for the roll it was derived from.
    fn apply_move(&mut self, color: Color, roll: u8, mv: Move) -> TurnOutcome;

    /// Moves that can spend a bonus of exactly `steps`.
    fn legal_bonus_moves(&self, color: Color, steps: u8) -> MoveList;

    /// Spend a bonus. Does not count as a roll.
    fn apply_bonus(&mut self, color: Color, mv: Move) -> TurnOutcome;

    /// Clear a color's six streak, for turns that end without a move.
    fn reset_consecutive_sixes(&mut self, color: Color);

    // === Convenience Methods ===

    /// Current position of a token.
    fn position(&self, token: TokenId) -> Position {
        self.state().position(token)
    }

    /// First color in turn order whose tokens are all home.
    fn winner_if_any(&self) -> Option<Color> {
        let state = self.state();
        self.config()
            .players
            .iter()
            .copied()
            .find(|&color| state.all_home(color))
    }

    /// Does `color` have anything to do on `roll`?
    fn has_any_legal_move(&self, color: Color, roll: u8) -> bool {
        !self.legal_moves(color, roll).is_empty()
    }

    /// Can this particular token move on `roll`?
    fn is_movable(&self, token: TokenId, roll: u8) -> bool {
        self.legal_moves(token.color, roll)
            .iter()
            .any(|mv| mv.token == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_bonus_priority() {
        assert_eq!(TurnOutcome::new(true, false, None).bonus_steps, CAPTURE_BONUS);
        assert_eq!(TurnOutcome::new(false, true, None).bonus_steps, HOME_BONUS);
        assert_eq!(TurnOutcome::new(true, true, None).bonus_steps, CAPTURE_BONUS);
        assert_eq!(TurnOutcome::new(false, false, None).bonus_steps, 0);
    }

    #[test]
    fn test_outcome_uneventful() {
        assert!(TurnOutcome::default().is_uneventful());
        assert!(TurnOutcome::new(false, false, None).is_uneventful());
        assert!(!TurnOutcome::new(false, true, None).is_uneventful());
        assert!(!TurnOutcome::forfeit().is_uneventful());
    }

    #[test]
    fn test_forfeit_outcome_is_empty() {
        let outcome = TurnOutcome::forfeit();

        assert!(outcome.forfeited);
        assert!(!outcome.capture);
        assert!(!outcome.reached_home);
        assert_eq!(outcome.bonus_steps, 0);
        assert_eq!(outcome.winner, None);
    }
}
