//! Token identification.
//!
//! Every color owns exactly `TOKENS_PER_COLOR` tokens, addressed by slot.
//! A `TokenId` is a stable key for the whole game: tokens are never
//! created or destroyed after setup, only their `Position` changes.
//!
//! ## Usage
//!
//! ```
//! use ludo_engine::core::{Color, TokenId};
//!
//! let token = TokenId::new(Color::Blue, 2);
//! assert_eq!(token.color, Color::Blue);
//! assert_eq!(token.slot(), 2);
//! assert_eq!(format!("{}", token), "BLUE#2");
//!
//! let reds: Vec<_> = TokenId::all_of(Color::Red).collect();
//! assert_eq!(reds.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Number of tokens each color plays with.
pub const TOKENS_PER_COLOR: usize = 4;

/// Identifier of one token: owner color plus slot 0..3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId {
    /// Owning color.
    pub color: Color,
    slot: u8,
}

impl TokenId {
    /// Create a token ID.
    ///
    /// Panics if `slot` is not in `0..TOKENS_PER_COLOR`.
    #[must_use]
    pub fn new(color: Color, slot: usize) -> Self {
        assert!(
            slot < TOKENS_PER_COLOR,
            "Token slot {} out of range for {} (0..{})",
            slot,
            color,
            TOKENS_PER_COLOR
        );
        Self {
            color,
            slot: slot as u8,
        }
    }

    /// Get the slot index (0-based).
    #[must_use]
    pub const fn slot(self) -> usize {
        self.slot as usize
    }

    /// Iterate over all tokens of a color, in slot order.
    pub fn all_of(color: Color) -> impl Iterator<Item = TokenId> {
        (0..TOKENS_PER_COLOR as u8).map(move |slot| TokenId { color, slot })
    }

    /// Iterate over every token of every color.
    pub fn all() -> impl Iterator<Item = TokenId> {
        Color::ALL.into_iter().flat_map(TokenId::all_of)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.color, self.slot)
    }
}
