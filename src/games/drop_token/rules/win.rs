//! Win detection logic for Drop Token.

use super::super::{BOARD_SIZE, Board, Cell, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if `player` owns a complete line.
///
/// Scans every row, then every column, then the main diagonal and the
/// anti-diagonal, stopping at the first full line.
#[instrument(skip(board))]
pub fn has_line(board: &Board, player: Player) -> bool {
    let owns = |row: usize, col: usize| board.get(row, col) == Some(Cell::Occupied(player));

    (0..BOARD_SIZE).any(|row| (0..BOARD_SIZE).all(|col| owns(row, col)))
        || (0..BOARD_SIZE).any(|col| (0..BOARD_SIZE).all(|row| owns(row, col)))
        || (0..BOARD_SIZE).all(|i| owns(i, i))
        || (0..BOARD_SIZE).all(|i| owns(i, BOARD_SIZE - 1 - i))
}

/// Returns the first player (in turn order) that owns a complete line.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|player| has_line(board, *player))
}
