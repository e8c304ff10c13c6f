//! Game orchestration outside the rules engine.
//!
//! ## Overview
//!
//! The engine answers "what is legal" and "what happened"; a session
//! decides everything else:
//!
//! - **Dice**: any `DiceSource`, seeded or scripted
//! - **Move choice**: a `MovePolicy`, also used to place bonus steps
//! - **Turn order**: extra roll on a 6, none after a triple-six forfeit
//! - **Log**: every roll recorded as a `TurnRecord`
//!
//! ## Usage
//!
//! ```rust
//! use ludo_engine::core::BoardConfig;
//! use ludo_engine::rules::Board;
//! use ludo_engine::session::{Session, SessionConfig, UniformRandom};
//!
//! let board = Board::new(BoardConfig::default_four_players()).unwrap();
//! let mut session = Session::seeded(board, UniformRandom, SessionConfig::new().with_seed(7));
//!
//! let result = session.play();
//! println!("{:?} after {} moves", result.winner, result.moves);
//! ```

pub mod config;
pub mod policy;
pub mod game;
pub mod simulate;

pub use config::SessionConfig;
pub use policy::{FirstLegal, MovePolicy, UniformRandom};
pub use game::{GameResult, Session, TurnEvent, TurnRecord};
pub use simulate::{simulate, SimulationSummary};
