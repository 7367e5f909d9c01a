//! Gravity invariant: tokens in a column never float above an empty cell.

use super::super::{BOARD_SIZE, Cell, GameManager};
use super::Invariant;

/// Invariant: Every column is filled contiguously from row 0 upward.
pub struct GravityInvariant;

impl Invariant<GameManager> for GravityInvariant {
    fn holds(game: &GameManager) -> bool {
        let board = game.board();
        (0..BOARD_SIZE).all(|col| {
            let height = board.column_height(col);
            (height..BOARD_SIZE).all(|row| board.get(row, col) == Some(Cell::Empty))
        })
    }

    fn description() -> &'static str {
        "Column tokens are contiguous from the bottom row"
    }
}
