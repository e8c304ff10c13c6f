//! Batch simulation.
//!
//! Runs many independent seeded games and aggregates who won. Game `i`
//! uses seed `seed + i`, so any single game can be replayed on its own.

use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, ColorMap};
use crate::error::ConfigError;
use crate::rules::Board;

use super::config::SessionConfig;
use super::game::{GameResult, Session};
use super::policy::MovePolicy;

/// Aggregate results of a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Games played.
    pub games: usize,
    /// Wins per color.
    pub wins: ColorMap<usize>,
    /// Games that hit a cap without a winner.
    pub unfinished: usize,
    /// Applied moves across all games.
    pub total_moves: usize,
}

impl SimulationSummary {
    /// Fold one game into the summary.
    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        self.total_moves += result.moves;
        match result.winner {
            Some(color) => self.wins[color] += 1,
            None => self.unfinished += 1,
        }
    }

    /// Mean applied moves per game.
    pub fn average_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }
}

/// Play `games` seeded games and summarize them.
///
/// `make_policy` receives the game index.
pub fn simulate<P, F>(
    board_config: &BoardConfig,
    session_config: &SessionConfig,
    games: usize,
    make_policy: F,
) -> Result<SimulationSummary, ConfigError>
where
    P: MovePolicy<Board>,
    F: Fn(usize) -> P,
{
    board_config.validate()?;

    let mut summary = SimulationSummary::default();
    for game in 0..games {
        let board = Board::new(board_config.clone())?;
        let config = session_config
            .clone()
            .with_seed(session_config.seed.wrapping_add(game as u64));
        let result = Session::seeded(board, make_policy(game), config).play();
        summary.record(&result);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::session::UniformRandom;

    #[test]
    fn test_summary_record() {
        let mut summary = SimulationSummary::default();
        summary.record(&GameResult { moves: 100, winner: Some(Color::Green) });
        summary.record(&GameResult { moves: 50, winner: None });

        assert_eq!(summary.games, 2);
        assert_eq!(summary.wins[Color::Green], 1);
        assert_eq!(summary.unfinished, 1);
        assert_eq!(summary.average_moves(), 75.0);
    }

    #[test]
    fn test_simulate_counts_every_game() {
        let summary = simulate(
            &BoardConfig::default_four_players(),
            &SessionConfig::new().with_max_moves(200),
            5,
            |_| UniformRandom,
        )
        .unwrap();

        let wins: usize = summary.wins.iter().map(|(_, w)| *w).sum();
        assert_eq!(summary.games, 5);
        assert_eq!(wins + summary.unfinished, 5);
    }

    #[test]
    fn test_simulate_rejects_bad_config() {
        let config = BoardConfig::default_four_players().with_players(Vec::new());
        let err = simulate(&config, &SessionConfig::default(), 1, |_| UniformRandom).unwrap_err();
        assert_eq!(err, ConfigError::NoPlayers);
    }
}
