//! Placement results and errors for Drop Token.

use super::{BOARD_SIZE, Player};
use serde::{Deserialize, Serialize};

/// A successful placement: where a player's token came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Placement {
    /// The player whose token was placed.
    pub player: Player,
    /// Row the token landed on (0 = bottom).
    pub row: usize,
    /// Column as presented to users (1-based).
    pub column: usize,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> column {} (row {})", self.player, self.column, self.row)
    }
}

/// Invalid move: the only way a placement can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Column is not in `1..=BOARD_SIZE`.
    #[display("Column {} is outside 1-{}", _0, BOARD_SIZE)]
    ColumnOutOfRange(i64),

    /// Column has no empty cell left.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),
}

impl std::error::Error for MoveError {}
