//! Where a token currently sits.

use serde::{Deserialize, Serialize};

/// Position of a token.
///
/// Each index is meaningful only within its own variant: `Track` carries an
/// absolute ring cell, `HomeLane` a cell of the owner's private lane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Not yet in play.
    #[default]
    Base,
    /// On the owner's exit cell. Always safe, always a valid re-entry target.
    Start,
    /// Absolute cell of the shared ring.
    Track(usize),
    /// Cell of the owner's home lane.
    HomeLane(usize),
    /// Finished. Terminal.
    Home,
}

impl Position {
    /// Is the token on the shared ring (`Start` or `Track`)?
    #[must_use]
    pub const fn is_on_track(self) -> bool {
        matches!(self, Position::Start | Position::Track(_))
    }

    /// Can the token take a step move from here?
    #[must_use]
    pub const fn is_in_play(self) -> bool {
        !matches!(self, Position::Base | Position::Home)
    }

    /// Has the token finished?
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Position::Home)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Base => f.write_str("BASE"),
            Position::Start => f.write_str("START"),
            Position::Track(i) => write!(f, "TRACK({})", i),
            Position::HomeLane(i) => write!(f, "HOME_LANE({})", i),
            Position::Home => f.write_str("HOME"),
        }
    }
}
