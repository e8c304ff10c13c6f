//! The board: authoritative token positions plus every movement rule.
//!
//! ## Legal moves for one roll
//!
//! 1. A 6 with no tokens left at Base moves 7 cells instead.
//! 2. A 5 lets any Base token exit, if the color's Start cell is empty.
//! 3. Every token in play may step if its target is legal.
//! 4. A 6 while owning a block forces a move out of the block, when one exists.
//!
//! ## Applying a move
//!
//! The move is re-validated, the six streak is updated, a third six cancels
//! the move and rolls the token back, otherwise the token moves and may
//! capture a lone enemy.

use smallvec::SmallVec;

use crate::core::{
    BoardConfig, BoardState, Color, Move, MoveList, Position, TokenId, MAX_TOKENS_PER_CELL,
};
use crate::error::ConfigError;

use super::engine::{RulesEngine, TurnOutcome};
use super::movement::{distance_from_start, target_position};

/// Sixes in a row that forfeit the move.
pub const SIXES_TO_FORFEIT: u8 = 3;

/// A live game board.
///
/// Owns the configuration and the only mutable copy of the board state.
/// All mutation goes through `apply_move` and `apply_bonus`.
///
/// ```
/// use ludo_engine::core::{BoardConfig, Color, Position, TokenId};
/// use ludo_engine::rules::{Board, RulesEngine};
///
/// let mut board = Board::new(BoardConfig::default_four_players()).unwrap();
/// let moves = board.legal_moves(Color::Red, 3);
/// assert_eq!(moves.len(), 1);
///
/// board.apply_move(Color::Red, 3, moves[0]);
/// assert_eq!(board.position(TokenId::new(Color::Red, 0)), Position::Track(3));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    state: BoardState,
}

impl Board {
    /// Create a board in the configured starting layout.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = BoardState::new(&config);
        Ok(Self { config, state })
    }

    /// Create a board with specific tokens already placed.
    ///
    /// Tokens not mentioned keep their starting position. Used to set up
    /// puzzles and to resume from a recorded position.
    pub fn with_layout(
        config: BoardConfig,
        placements: impl IntoIterator<Item = (TokenId, Position)>,
    ) -> Result<Self, ConfigError> {
        let mut board = Self::new(config)?;

        for (token, position) in placements {
            if !board.is_valid_placement(token, position) {
                return Err(ConfigError::InvalidPlacement { token, position });
            }
            board.state.set_position(token, position);
        }

        if let Some(cell) = (0..board.config.track_length)
            .find(|&cell| board.state.count_on_cell(&board.config, cell) > MAX_TOKENS_PER_CELL)
        {
            return Err(ConfigError::Overcrowded(cell));
        }

        Ok(board)
    }

    fn is_valid_placement(&self, token: TokenId, position: Position) -> bool {
        if position == Position::Base {
            return true;
        }
        if !self.config.is_seated(token.color) {
            return false;
        }
        match position {
            Position::Track(cell) => {
                cell < self.config.track_length && cell != self.config.start_index(token.color)
            }
            Position::HomeLane(lane) => lane < self.config.home_lane_length,
            _ => true,
        }
    }

    fn assert_seated(&self, color: Color) {
        assert!(
            self.config.is_seated(color),
            "{} is not seated in this game",
            color
        );
    }

    /// Distance a token has travelled from its Start cell.
    #[must_use]
    pub fn distance_from_start(&self, token: TokenId) -> Option<usize> {
        distance_from_start(&self.config, &self.state, token)
    }

    /// Absolute ring cell of a token, if it is on the ring.
    #[must_use]
    pub fn absolute_cell(&self, token: TokenId) -> Option<usize> {
        self.state.absolute_cell(&self.config, token)
    }

    /// Consecutive sixes currently counted for a color.
    #[must_use]
    pub fn consecutive_sixes(&self, color: Color) -> u8 {
        self.state.consecutive_sixes(color)
    }

    /// Where `token` would land after `steps`, or `None` if that is illegal.
    #[must_use]
    pub fn target_of(&self, token: TokenId, steps: u8) -> Option<Position> {
        target_position(&self.config, &self.state, token, usize::from(steps))
    }

    /// Ring cells holding exactly two of `color`'s own tokens.
    fn own_block_cells(&self, color: Color) -> SmallVec<[usize; 2]> {
        let mut cells: SmallVec<[usize; 2]> = SmallVec::new();
        for token in TokenId::all_of(color) {
            let Some(cell) = self.absolute_cell(token) else {
                continue;
            };
            if cells.contains(&cell) {
                continue;
            }
            let occupants = self.state.tokens_on_cell(&self.config, cell);
            if occupants.len() == MAX_TOKENS_PER_CELL && occupants.iter().all(|t| t.color == color) {
                cells.push(cell);
            }
        }
        cells
    }

    /// The lone enemy token a mover landing on `cell` would capture.
    ///
    /// Safe cells, the mover's own exit cell and the victim's own exit cell
    /// protect their occupants. A pair is never captured.
    fn capture_victim(&self, mover: Color, cell: usize) -> Option<TokenId> {
        if self.config.is_safe_cell(cell) || cell == self.config.start_index(mover) {
            return None;
        }
        match self.state.tokens_on_cell(&self.config, cell).as_slice() {
            [only] if only.color != mover && cell != self.config.start_index(only.color) => {
                Some(*only)
            }
            _ => None,
        }
    }

    /// Move a token and resolve capture and home arrival.
    fn execute(&mut self, mv: Move) -> TurnOutcome {
        let token = mv.token;

        let target = if mv.is_exit() {
            Position::Start
        } else {
            match self.target_of(token, mv.steps) {
                Some(target) => target,
                None => return TurnOutcome::default(),
            }
        };

        let mut capture = false;
        let cell = match target {
            Position::Start => Some(self.config.start_index(token.color)),
            Position::Track(cell) => Some(cell),
            _ => None,
        };
        if let Some(victim) = cell.and_then(|c| self.capture_victim(token.color, c)) {
            self.state.set_position(victim, Position::Base);
            capture = true;
        }

        self.state.set_position(token, target);

        TurnOutcome::new(capture, target.is_home(), self.winner_if_any())
    }

    /// Cancel a move on the third six: back to Base from the ring, back to
    /// the first lane cell from the home lane.
    fn forfeit(&mut self, color: Color, token: TokenId) -> TurnOutcome {
        match self.state.position(token) {
            Position::HomeLane(_) => self.state.set_position(token, Position::HomeLane(0)),
            Position::Start | Position::Track(_) => self.state.set_position(token, Position::Base),
            Position::Base | Position::Home => {}
        }
        self.state.set_consecutive_sixes(color, 0);
        TurnOutcome::forfeit()
    }
}

impl RulesEngine for Board {
    fn config(&self) -> &BoardConfig {
        &self.config
    }

    fn state(&self) -> &BoardState {
        &self.state
    }

    fn legal_moves(&self, color: Color, roll: u8) -> MoveList {
        self.assert_seated(color);

        let mut moves = MoveList::new();
        if !(1..=6).contains(&roll) {
            return moves;
        }

        let steps = if roll == 6 && self.state.tokens_at_base(color) == 0 {
            7
        } else {
            roll
        };

        let start_cell = self.config.start_index(color);
        if roll == 5 && self.state.count_on_cell(&self.config, start_cell) == 0 {
            moves.extend(
                self.state
                    .tokens_of(color)
                    .filter(|(_, position)| *position == Position::Base)
                    .map(|(token, _)| Move::exit(token)),
            );
        }

        moves.extend(
            TokenId::all_of(color)
                .filter(|&token| self.target_of(token, steps).is_some())
                .map(|token| Move::new(token, steps)),
        );

        if roll == 6 {
            let blocks = self.own_block_cells(color);
            if !blocks.is_empty() {
                let from_block: MoveList = moves
                    .iter()
                    .copied()
                    .filter(|mv| {
                        self.absolute_cell(mv.token)
                            .is_some_and(|cell| blocks.contains(&cell))
                    })
                    .collect();
                if !from_block.is_empty() {
                    return from_block;
                }
            }
        }

        moves
    }

    fn apply_move(&mut self, color: Color, roll: u8, mv: Move) -> TurnOutcome {
        if mv.token.color != color || !self.legal_moves(color, roll).contains(&mv) {
            return TurnOutcome::default();
        }

        let sixes = if roll == 6 {
            self.state.consecutive_sixes(color) + 1
        } else {
            0
        };
        self.state.set_consecutive_sixes(color, sixes);

        if sixes >= SIXES_TO_FORFEIT {
            return self.forfeit(color, mv.token);
        }

        self.execute(mv)
    }

    fn legal_bonus_moves(&self, color: Color, steps: u8) -> MoveList {
        self.assert_seated(color);

        if steps == 0 {
            return MoveList::new();
        }
        TokenId::all_of(color)
            .filter(|&token| self.target_of(token, steps).is_some())
            .map(|token| Move::new(token, steps))
            .collect()
    }

    fn apply_bonus(&mut self, color: Color, mv: Move) -> TurnOutcome {
        if mv.token.color != color || !self.legal_bonus_moves(color, mv.steps).contains(&mv) {
            return TurnOutcome::default();
        }
        self.execute(mv)
    }

    fn reset_consecutive_sixes(&mut self, color: Color) {
        self.assert_seated(color);
        self.state.set_consecutive_sixes(color, 0);
    }
}
