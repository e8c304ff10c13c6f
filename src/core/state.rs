//! Board state: where every token is, plus the consecutive-six counters.
//!
//! ## Layout
//!
//! Positions live in a fixed arena: one `[Position; TOKENS_PER_COLOR]` per
//! color, indexed by slot. Every token always has an entry; colors that are
//! not seated simply keep all four tokens at `Base` and never move.
//!
//! `BoardState` is a plain value. It carries no rule logic beyond
//! occupancy queries; the rules engine is the only writer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::{Color, ColorMap};
use super::config::BoardConfig;
use super::position::Position;
use super::token::{TokenId, TOKENS_PER_COLOR};

/// Tokens found on one ring cell.
pub type CellOccupants = SmallVec<[TokenId; 4]>;

/// Complete board state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    positions: ColorMap<[Position; TOKENS_PER_COLOR]>,
    consecutive_sixes: ColorMap<u8>,
}

impl BoardState {
    /// Create the initial layout for a configuration.
    ///
    /// For each seated color the first `tokens_on_start` slots sit on
    /// Start and the rest at Base.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        let on_start = usize::from(config.tokens_on_start);
        let positions = ColorMap::new(|color| {
            let mut slots = [Position::Base; TOKENS_PER_COLOR];
            if config.is_seated(color) {
                for slot in slots.iter_mut().take(on_start) {
                    *slot = Position::Start;
                }
            }
            slots
        });

        Self {
            positions,
            consecutive_sixes: ColorMap::with_value(0),
        }
    }

    /// Current position of a token.
    #[must_use]
    pub fn position(&self, token: TokenId) -> Position {
        self.positions[token.color][token.slot()]
    }

    /// Overwrite a token's position.
    pub(crate) fn set_position(&mut self, token: TokenId, position: Position) {
        self.positions[token.color][token.slot()] = position;
    }

    /// All tokens of a color with their positions, in slot order.
    pub fn tokens_of(&self, color: Color) -> impl Iterator<Item = (TokenId, Position)> + '_ {
        TokenId::all_of(color).map(move |t| (t, self.position(t)))
    }

    /// Number of a color's tokens at Base.
    #[must_use]
    pub fn tokens_at_base(&self, color: Color) -> usize {
        self.positions[color]
            .iter()
            .filter(|p| **p == Position::Base)
            .count()
    }

    /// Number of a color's tokens that have finished.
    #[must_use]
    pub fn tokens_home(&self, color: Color) -> usize {
        self.positions[color].iter().filter(|p| p.is_home()).count()
    }

    /// Have all of a color's tokens finished?
    #[must_use]
    pub fn all_home(&self, color: Color) -> bool {
        self.tokens_home(color) == TOKENS_PER_COLOR
    }

    /// Absolute ring cell of a token, if it is on the ring.
    #[must_use]
    pub fn absolute_cell(&self, config: &BoardConfig, token: TokenId) -> Option<usize> {
        match self.position(token) {
            Position::Start => Some(config.start_index(token.color)),
            Position::Track(cell) => Some(cell),
            _ => None,
        }
    }

    /// Tokens currently on a ring cell, in color then slot order.
    #[must_use]
    pub fn tokens_on_cell(&self, config: &BoardConfig, cell: usize) -> CellOccupants {
        config
            .players
            .iter()
            .flat_map(|&color| TokenId::all_of(color))
            .filter(|&t| self.absolute_cell(config, t) == Some(cell))
            .collect()
    }

    /// Number of tokens on a ring cell.
    #[must_use]
    pub fn count_on_cell(&self, config: &BoardConfig, cell: usize) -> usize {
        self.tokens_on_cell(config, cell).len()
    }

    /// Consecutive sixes rolled by a color.
    #[must_use]
    pub fn consecutive_sixes(&self, color: Color) -> u8 {
        self.consecutive_sixes[color]
    }

    pub(crate) fn set_consecutive_sixes(&mut self, color: Color, count: u8) {
        self.consecutive_sixes[color] = count;
    }
}
