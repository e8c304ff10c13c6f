//! Movement rules and the live board.
//!
//! - `engine`: the `RulesEngine` contract and `TurnOutcome`
//! - `movement`: route distances, blocks, target computation
//! - `board`: `Board`, the authoritative implementation

pub mod engine;
pub mod movement;
pub mod board;

pub use engine::{RulesEngine, TurnOutcome, CAPTURE_BONUS, HOME_BONUS};
pub use board::{Board, SIXES_TO_FORFEIT};
