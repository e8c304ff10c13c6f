//! Route geometry: travelled distance, blocks, and move targets.
//!
//! Every token follows the same shape of route from its color's exit cell:
//! `track_length` ring cells, then `home_lane_length` lane cells, then Home.
//! Distances below are measured along that route, with 0 at Start.

use crate::core::{BoardConfig, BoardState, Position, TokenId, MAX_TOKENS_PER_CELL};

/// Distance a token has travelled from its Start cell.
///
/// `None` at Base or Home, where step moves do not apply.
#[must_use]
pub fn distance_from_start(config: &BoardConfig, state: &BoardState, token: TokenId) -> Option<usize> {
    let len = config.track_length;
    match state.position(token) {
        Position::Base | Position::Home => None,
        Position::Start => Some(0),
        Position::Track(cell) => {
            let start = config.start_index(token.color);
            Some((cell + len - start) % len)
        }
        Position::HomeLane(lane) => Some(len + lane),
    }
}

/// Is the ring cell impassable?
///
/// Two tokens of one color block anywhere. Two mixed tokens block only on
/// a safe cell or a seated color's exit cell.
#[must_use]
pub fn is_block_cell(config: &BoardConfig, state: &BoardState, cell: usize) -> bool {
    let occupants = state.tokens_on_cell(config, cell);
    if occupants.len() < MAX_TOKENS_PER_CELL {
        return false;
    }
    occupants[0].color == occupants[1].color
        || config.is_safe_cell(cell)
        || config.is_any_start_cell(cell)
}

/// Would moving from `from_distance` to `to_distance` pass over a block?
///
/// Only the cells strictly between the two are checked; the destination
/// is governed by the occupancy cap.
fn passes_block(
    config: &BoardConfig,
    state: &BoardState,
    token: TokenId,
    from_distance: usize,
    to_distance: usize,
) -> bool {
    let start = config.start_index(token.color);
    (from_distance + 1..to_distance)
        .map(|d| (start + d) % config.track_length)
        .any(|cell| is_block_cell(config, state, cell))
}

/// Where `token` would land after `steps` cells, or `None` if illegal.
///
/// Home needs an exact count; overshooting is never legal. Lane and Home
/// targets ignore the ring, so blocks only matter for ring targets.
#[must_use]
pub fn target_position(
    config: &BoardConfig,
    state: &BoardState,
    token: TokenId,
    steps: usize,
) -> Option<Position> {
    let distance = distance_from_start(config, state, token)?;
    let target = distance + steps;
    let len = config.track_length;

    if target > config.home_distance() {
        return None;
    }
    if target == config.home_distance() {
        return Some(Position::Home);
    }
    if target >= len {
        return Some(Position::HomeLane(target - len));
    }

    if passes_block(config, state, token, distance, target) {
        return None;
    }

    let start = config.start_index(token.color);
    let cell = (start + target) % len;
    if state.count_on_cell(config, cell) >= MAX_TOKENS_PER_CELL {
        return None;
    }

    if cell == start {
        Some(Position::Start)
    } else {
        Some(Position::Track(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn setup() -> (BoardConfig, BoardState) {
        let config = BoardConfig::default_four_players();
        let state = BoardState::new(&config);
        (config, state)
    }

    #[test]
    fn test_distance_from_start() {
        let (config, mut state) = setup();
        let blue = TokenId::new(Color::Blue, 0);

        assert_eq!(distance_from_start(&config, &state, blue), Some(0));

        state.set_position(blue, Position::Track(3));
        assert_eq!(distance_from_start(&config, &state, blue), Some(33));

        state.set_position(blue, Position::HomeLane(2));
        assert_eq!(distance_from_start(&config, &state, blue), Some(42));

        state.set_position(blue, Position::Home);
        assert_eq!(distance_from_start(&config, &state, blue), None);
        assert_eq!(distance_from_start(&config, &state, TokenId::new(Color::Blue, 1)), None);
    }

    #[test]
    fn test_ring_wraps_past_zero() {
        let (config, mut state) = setup();
        let green = TokenId::new(Color::Green, 0);
        state.set_position(green, Position::Track(38));

        assert_eq!(target_position(&config, &state, green, 4), Some(Position::Track(2)));
    }

    #[test]
    fn test_lane_entry_and_exact_home() {
        let (config, mut state) = setup();
        let red = TokenId::new(Color::Red, 0);
        state.set_position(red, Position::Track(38));

        assert_eq!(target_position(&config, &state, red, 2), Some(Position::HomeLane(0)));
        assert_eq!(target_position(&config, &state, red, 5), Some(Position::HomeLane(3)));
        assert_eq!(target_position(&config, &state, red, 6), Some(Position::Home));
        assert_eq!(target_position(&config, &state, red, 7), None);
    }

    #[test]
    fn test_block_kinds() {
        let (config, mut state) = setup();

        // Same color on a plain cell.
        state.set_position(TokenId::new(Color::Blue, 1), Position::Track(12));
        state.set_position(TokenId::new(Color::Blue, 2), Position::Track(12));
        assert!(is_block_cell(&config, &state, 12));

        // Mixed colors on a plain cell.
        state.set_position(TokenId::new(Color::Red, 1), Position::Track(15));
        state.set_position(TokenId::new(Color::Green, 1), Position::Track(15));
        assert!(!is_block_cell(&config, &state, 15));

        // Mixed colors on a safe cell (Blue's start already holds BLUE#0).
        state.set_position(TokenId::new(Color::Yellow, 1), Position::Track(10));
        assert!(is_block_cell(&config, &state, 10));

        // A single token never blocks.
        assert!(!is_block_cell(&config, &state, 0));
    }

    #[test]
    fn test_lane_target_ignores_ring_blocks() {
        let (config, mut state) = setup();
        let red = TokenId::new(Color::Red, 1);
        state.set_position(red, Position::Track(37));
        state.set_position(TokenId::new(Color::Green, 1), Position::Track(39));
        state.set_position(TokenId::new(Color::Green, 2), Position::Track(39));

        assert_eq!(target_position(&config, &state, red, 4), Some(Position::HomeLane(1)));
        assert_eq!(target_position(&config, &state, red, 1), Some(Position::Track(38)));
    }
}
