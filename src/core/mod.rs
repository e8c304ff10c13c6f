//! Core board types: colors, tokens, positions, moves, state, RNG, configuration.
//!
//! These are plain values with no rule logic. The `rules` module is the
//! only place that interprets them.

pub mod color;
pub mod token;
pub mod position;
pub mod config;
pub mod action;
pub mod state;
pub mod rng;
pub mod dice;

pub use color::{Color, ColorMap, COLOR_COUNT};
pub use token::{TokenId, TOKENS_PER_COLOR};
pub use position::Position;
pub use config::{BoardConfig, ColorStart, MAX_TOKENS_PER_CELL};
pub use action::{Move, MoveList, EXIT_STEPS};
pub use state::{BoardState, CellOccupants};
pub use rng::{GameRng, GameRngState};
pub use dice::{DiceSource, ScriptedDice};
