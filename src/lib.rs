//! # ludo-engine
//!
//! A rule engine for four-player cross-and-circle race games.
//!
//! ## Design Principles
//!
//! 1. **Single Source of Truth**: `Board` owns every token position. Callers
//!    query it; they never keep their own copy.
//!
//! 2. **Configuration Over Convention**: Ring length, lane length, safe
//!    cells, exits and seating come from `BoardConfig`.
//!
//! 3. **Illegal Means No-Op**: Applying a move that is not currently legal
//!    changes nothing and returns an empty `TurnOutcome`.
//!
//! ## Modules
//!
//! - `core`: Colors, tokens, positions, moves, board state, RNG, configuration
//! - `rules`: The `RulesEngine` contract and the `Board` that implements it
//! - `session`: Turn sequencing, move policies, batch simulation

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardState, Color, ColorMap, ColorStart,
    DiceSource, GameRng, GameRngState, ScriptedDice,
    Move, MoveList, Position, TokenId,
};

pub use crate::error::ConfigError;

pub use crate::rules::{Board, RulesEngine, TurnOutcome};

pub use crate::session::{
    simulate, FirstLegal, GameResult, MovePolicy, Session, SessionConfig,
    SimulationSummary, TurnEvent, TurnRecord, UniformRandom,
};
