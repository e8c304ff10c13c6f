//! Board configuration.
//!
//! A game is configured once at construction by providing:
//! - Ring and home-lane lengths
//! - Safe cells on the ring
//! - `ColorStart`: each color's exit cell and lane-entry cell
//! - Player order (turn sequence)
//!
//! The configuration is immutable for the lifetime of a game. The engine
//! never hardcodes geometry; `BoardConfig::default_four_players()` is just
//! the standard 40-cell board.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::ConfigError;

/// Maximum number of tokens that may share one ring cell.
pub const MAX_TOKENS_PER_CELL: usize = 2;

/// Where a color enters and leaves the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStart {
    /// The color this entry describes.
    pub color: Color,

    /// Absolute ring cell a token lands on when it leaves Base.
    pub start_index: usize,

    /// Last ring cell before the token turns into its home lane.
    pub lane_entry_index: usize,
}

impl ColorStart {
    /// Create a start entry.
    #[must_use]
    pub const fn new(color: Color, start_index: usize, lane_entry_index: usize) -> Self {
        Self {
            color,
            start_index,
            lane_entry_index,
        }
    }
}

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of cells on the shared ring.
    pub track_length: usize,

    /// Number of cells in each color's home lane.
    pub home_lane_length: usize,

    /// Ring cells exempt from capture.
    pub safe_cells: FxHashSet<usize>,

    /// Per-color entry/exit data.
    pub starts: Vec<ColorStart>,

    /// Seated colors in turn order.
    pub players: Vec<Color>,

    /// How many tokens of each color begin on Start (the rest begin at Base).
    pub tokens_on_start: u8,
}

impl BoardConfig {
    /// Create a configuration with the given geometry and nothing seated.
    #[must_use]
    pub fn new(track_length: usize, home_lane_length: usize) -> Self {
        Self {
            track_length,
            home_lane_length,
            safe_cells: FxHashSet::default(),
            starts: Vec::new(),
            players: Vec::new(),
            tokens_on_start: 1,
        }
    }

    /// The standard four-player board.
    ///
    /// 40-cell ring, 4-cell home lanes, safe cells every tenth cell, one
    /// token of each color on Start.
    ///
    /// ```
    /// use ludo_engine::core::{BoardConfig, Color};
    ///
    /// let config = BoardConfig::default_four_players();
    /// assert_eq!(config.track_length, 40);
    /// assert_eq!(config.start_index(Color::Blue), 10);
    /// assert!(config.validate().is_ok());
    /// ```
    #[must_use]
    pub fn default_four_players() -> Self {
        Self::new(40, 4)
            .with_safe_cells([0, 10, 20, 30])
            .with_start(ColorStart::new(Color::Red, 0, 39))
            .with_start(ColorStart::new(Color::Blue, 10, 9))
            .with_start(ColorStart::new(Color::Green, 20, 19))
            .with_start(ColorStart::new(Color::Yellow, 30, 29))
            .with_players(Color::ALL)
    }

    /// Add safe cells.
    #[must_use]
    pub fn with_safe_cells(mut self, cells: impl IntoIterator<Item = usize>) -> Self {
        self.safe_cells.extend(cells);
        self
    }

    /// Add (or replace) a color's start entry.
    #[must_use]
    pub fn with_start(mut self, start: ColorStart) -> Self {
        self.starts.retain(|s| s.color != start.color);
        self.starts.push(start);
        self
    }

    /// Set the player order.
    #[must_use]
    pub fn with_players(mut self, players: impl IntoIterator<Item = Color>) -> Self {
        self.players = players.into_iter().collect();
        self
    }

    /// Set how many tokens per color begin on Start.
    #[must_use]
    pub fn with_tokens_on_start(mut self, count: u8) -> Self {
        self.tokens_on_start = count;
        self
    }

    /// Distance from Start to Home along a color's route.
    #[must_use]
    pub fn home_distance(&self) -> usize {
        self.track_length + self.home_lane_length
    }

    /// Is the color seated in this game?
    #[must_use]
    pub fn is_seated(&self, color: Color) -> bool {
        self.players.contains(&color)
    }

    /// Is the ring cell a configured safe cell?
    #[must_use]
    pub fn is_safe_cell(&self, cell: usize) -> bool {
        self.safe_cells.contains(&cell)
    }

    /// Is the ring cell some seated color's exit cell?
    #[must_use]
    pub fn is_any_start_cell(&self, cell: usize) -> bool {
        self.players.iter().any(|&c| self.start_index(c) == cell)
    }

    /// Get a color's start entry, if configured.
    #[must_use]
    pub fn get_start(&self, color: Color) -> Option<&ColorStart> {
        self.starts.iter().find(|s| s.color == color)
    }

    /// Absolute exit cell of a color.
    ///
    /// Panics if the color has no start entry. A validated configuration
    /// has one for every seated color.
    #[must_use]
    pub fn start_index(&self, color: Color) -> usize {
        match self.get_start(color) {
            Some(start) => start.start_index,
            None => panic!("No start entry for color {}", color),
        }
    }

    /// Check every structural invariant the rule engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.track_length < 2 {
            return Err(ConfigError::TrackTooShort);
        }
        if self.home_lane_length == 0 {
            return Err(ConfigError::EmptyHomeLane);
        }
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if usize::from(self.tokens_on_start) > MAX_TOKENS_PER_CELL {
            return Err(ConfigError::TooManyOnStart(self.tokens_on_start));
        }
        if let Some(&cell) = self.safe_cells.iter().find(|&&c| c >= self.track_length) {
            return Err(ConfigError::CellOutOfRange {
                what: "safe cell",
                index: cell,
                track_length: self.track_length,
            });
        }

        for (i, &color) in self.players.iter().enumerate() {
            if self.players[..i].contains(&color) {
                return Err(ConfigError::DuplicatePlayer(color));
            }

            let start = self
                .get_start(color)
                .ok_or(ConfigError::MissingStart(color))?;

            for (what, index) in [
                ("start", start.start_index),
                ("lane entry", start.lane_entry_index),
            ] {
                if index >= self.track_length {
                    return Err(ConfigError::CellOutOfRange {
                        what,
                        index,
                        track_length: self.track_length,
                    });
                }
            }

            if let Some(&other) = self.players[..i]
                .iter()
                .find(|&&other| self.start_index(other) == start.start_index)
            {
                return Err(ConfigError::SharedStart {
                    first: other,
                    second: color,
                    cell: start.start_index,
                });
            }

            // Routes are measured in travelled distance, so the lane opens
            // right after the last cell before Start.
            let expected = (start.start_index + self.track_length - 1) % self.track_length;
            if start.lane_entry_index != expected {
                return Err(ConfigError::LaneEntryMismatch {
                    color,
                    expected,
                    actual: start.lane_entry_index,
                });
            }
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::default_four_players()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BoardConfig::default_four_players();

        assert_eq!(config.track_length, 40);
        assert_eq!(config.home_lane_length, 4);
        assert_eq!(config.home_distance(), 44);
        assert_eq!(config.players, Color::ALL.to_vec());
        assert_eq!(config.tokens_on_start, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_start_lookup() {
        let config = BoardConfig::default_four_players();

        assert_eq!(config.start_index(Color::Red), 0);
        assert_eq!(config.start_index(Color::Yellow), 30);
        assert_eq!(config.get_start(Color::Green).unwrap().lane_entry_index, 19);
        assert!(config.is_any_start_cell(20));
        assert!(!config.is_any_start_cell(21));
    }

    #[test]
    fn test_safe_cells() {
        let config = BoardConfig::default_four_players();

        for cell in [0, 10, 20, 30] {
            assert!(config.is_safe_cell(cell));
        }
        assert!(!config.is_safe_cell(12));
    }

    #[test]
    fn test_with_start_replaces_existing() {
        let config = BoardConfig::default_four_players()
            .with_start(ColorStart::new(Color::Red, 5, 4));

        assert_eq!(config.starts.len(), 4);
        assert_eq!(config.start_index(Color::Red), 5);
    }

    #[test]
    fn test_two_player_config() {
        let config = BoardConfig::default_four_players().with_players([Color::Red, Color::Green]);

        assert!(config.validate().is_ok());
        assert!(config.is_seated(Color::Green));
        assert!(!config.is_seated(Color::Blue));
        assert!(!config.is_any_start_cell(10));
    }

    #[test]
    fn test_validate_missing_start() {
        let config = BoardConfig::new(40, 4)
            .with_start(ColorStart::new(Color::Red, 0, 39))
            .with_players([Color::Red, Color::Blue]);

        assert_eq!(config.validate(), Err(ConfigError::MissingStart(Color::Blue)));
    }

    #[test]
    fn test_validate_duplicate_player() {
        let config = BoardConfig::default_four_players()
            .with_players([Color::Red, Color::Blue, Color::Red]);

        assert_eq!(config.validate(), Err(ConfigError::DuplicatePlayer(Color::Red)));
    }

    #[test]
    fn test_validate_geometry() {
        assert_eq!(
            BoardConfig::default_four_players()
                .with_players(Vec::new())
                .validate(),
            Err(ConfigError::NoPlayers)
        );

        let mut config = BoardConfig::default_four_players();
        config.home_lane_length = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyHomeLane));

        let config = BoardConfig::default_four_players().with_safe_cells([40]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CellOutOfRange { index: 40, .. })
        ));
    }

    #[test]
    fn test_validate_lane_entry() {
        let config = BoardConfig::default_four_players()
            .with_start(ColorStart::new(Color::Blue, 10, 11));

        assert_eq!(
            config.validate(),
            Err(ConfigError::LaneEntryMismatch {
                color: Color::Blue,
                expected: 9,
                actual: 11,
            })
        );
    }

    #[test]
    fn test_validate_shared_start() {
        let config = BoardConfig::default_four_players()
            .with_start(ColorStart::new(Color::Blue, 0, 39))
            .with_tokens_on_start(2);

        assert_eq!(
            config.validate(),
            Err(ConfigError::SharedStart {
                first: Color::Red,
                second: Color::Blue,
                cell: 0,
            })
        );

        // Unseated colors may overlap.
        let config = config.with_players([Color::Red, Color::Green]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_tokens_on_start() {
        let config = BoardConfig::default_four_players().with_tokens_on_start(3);
        assert_eq!(config.validate(), Err(ConfigError::TooManyOnStart(3)));

        let config = BoardConfig::default_four_players().with_tokens_on_start(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[should_panic(expected = "No start entry")]
    fn test_start_index_missing_panics() {
        let config = BoardConfig::new(40, 4);
        let _ = config.start_index(Color::Red);
    }

    #[test]
    fn test_config_serialization() {
        let config = BoardConfig::default_four_players();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
