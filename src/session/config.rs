//! Session configuration.

use serde::{Deserialize, Serialize};

/// Turn-sequencing options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum applied moves (bonus moves included) before giving up.
    pub max_moves: usize,

    /// Maximum die rolls, passes included, before giving up.
    pub max_rolls: usize,

    /// A roll of 6 grants the same color another roll.
    pub extra_turn_on_six: bool,

    /// Spend capture/home bonuses as an immediate extra move.
    pub apply_bonuses: bool,

    /// Seed for dice and policy randomness.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_moves: 10_000,
            max_rolls: 100_000,
            extra_turn_on_six: true,
            apply_bonuses: true,
            seed: 0,
        }
    }
}

impl SessionConfig {
    /// Create a new session config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the move cap.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the roll cap.
    pub fn with_max_rolls(mut self, max: usize) -> Self {
        self.max_rolls = max;
        self
    }

    /// Enable or disable the extra roll on a 6.
    pub fn with_extra_turn_on_six(mut self, enabled: bool) -> Self {
        self.extra_turn_on_six = enabled;
        self
    }

    /// Enable or disable bonus moves.
    pub fn with_bonuses(mut self, enabled: bool) -> Self {
        self.apply_bonuses = enabled;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
