//! Die sources.
//!
//! The rule engine never rolls dice itself. Orchestrators take a
//! `DiceSource` so games can be driven by a seeded RNG or replayed from a
//! fixed script.

use std::collections::VecDeque;

use super::rng::GameRng;

/// Anything that produces die rolls in `1..=6`.
pub trait DiceSource {
    /// Roll once.
    fn roll(&mut self) -> u8;
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> u8 {
        self.roll_die()
    }
}

/// A fixed sequence of rolls, repeated once exhausted.
///
/// ```
/// use ludo_engine::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 2]);
/// assert_eq!(dice.roll(), 6);
/// assert_eq!(dice.roll(), 2);
/// assert_eq!(dice.roll(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    rolls: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create from a script.
    ///
    /// Panics if the script is empty or holds a value outside `1..=6`.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let rolls: VecDeque<u8> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "Dice script must not be empty");
        assert!(
            rolls.iter().all(|r| (1..=6).contains(r)),
            "Dice script values must be in 1..=6"
        );
        Self { rolls }
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let roll = self.rolls[0];
        self.rolls.rotate_left(1);
        roll
    }
}
