//! Move representation: token + step count.
//!
//! A step count of `0` is reserved: it means "leave Base onto Start"
//! rather than a displacement along the route.
//!
//! ## Example
//!
//! ```
//! use ludo_engine::core::{Color, Move, TokenId};
//!
//! let token = TokenId::new(Color::Red, 1);
//!
//! let exit = Move::exit(token);
//! assert!(exit.is_exit());
//!
//! let step = Move::new(token, 4);
//! assert_eq!(step.steps, 4);
//! assert!(!step.is_exit());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::token::TokenId;

/// Step count that marks a Base exit.
pub const EXIT_STEPS: u8 = 0;

/// Legal moves for one roll.
///
/// Four exits plus four step moves is the most a single roll can produce.
pub type MoveList = SmallVec<[Move; 8]>;

/// A move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The token to move.
    pub token: TokenId,

    /// Cells to advance, or `EXIT_STEPS` to leave Base.
    pub steps: u8,
}

impl Move {
    /// Create a step move.
    #[must_use]
    pub const fn new(token: TokenId, steps: u8) -> Self {
        Self { token, steps }
    }

    /// Create a Base exit move.
    #[must_use]
    pub const fn exit(token: TokenId) -> Self {
        Self {
            token,
            steps: EXIT_STEPS,
        }
    }

    /// Is this a Base exit?
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        self.steps == EXIT_STEPS
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_exit() {
            write!(f, "{} exits base", self.token)
        } else {
            write!(f, "{} +{}", self.token, self.steps)
        }
    }
}
