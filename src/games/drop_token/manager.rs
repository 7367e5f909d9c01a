//! Game manager for Drop Token.
//!
//! [`GameManager`] owns the board, the player to move and the move history.
//! It is mutated only through placement. Win and draw are derived from the
//! board on demand rather than stored, and the manager does not refuse
//! placements once a game has been won: deciding what a finished game means
//! is left to the caller.

use super::action::{MoveError, Placement};
use super::rules;
use super::{BOARD_SIZE, Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Drop Token game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameManager {
    /// The board.
    board: Board,
    /// Player whose token the next placement drops.
    current_player: Player,
    /// 1-based columns of every successful placement, oldest first.
    history: Vec<usize>,
}

impl GameManager {
    /// Creates an empty game with player one to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            history: Vec::new(),
        }
    }

    /// Drops the current player's token into a 1-based column.
    ///
    /// Returns `false` and leaves the game untouched if the column is off
    /// the board or already full.
    pub fn place(&mut self, column: i64) -> bool {
        self.try_place(column).is_ok()
    }

    /// Drops the current player's token into a 1-based column, reporting
    /// where it landed or why it was rejected.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_place(&mut self, column: i64) -> Result<Placement, MoveError> {
        let column_index = usize::try_from(column)
            .ok()
            .filter(|c| (1..=BOARD_SIZE).contains(c))
            .ok_or(MoveError::ColumnOutOfRange(column))?;

        let player = self.current_player;
        let Some(row) = self.board.drop_token(column_index - 1, player) else {
            debug!(column = column_index, "Column is full, placement rejected");
            return Err(MoveError::ColumnFull(column_index));
        };

        self.history.push(column_index);
        self.current_player = player.opponent();

        let placement = Placement::new(player, row, column_index);
        debug!(%placement, moves = self.history.len(), "Token placed");

        #[cfg(debug_assertions)]
        assert_invariants(self);

        Ok(placement)
    }

    /// Checks if `player` owns a complete row, column or diagonal.
    pub fn check_win(&self, player: Player) -> bool {
        rules::has_line(&self.board, player)
    }

    /// Checks if every cell has been filled.
    pub fn is_full(&self) -> bool {
        self.history.len() == BOARD_SIZE * BOARD_SIZE
    }

    /// Columns of every successful placement, oldest first.
    pub fn previous_moves(&self) -> &[usize] {
        &self.history
    }

    /// Renders the board, top row first, followed by the footer line.
    pub fn render_board(&self) -> String {
        self.board.to_string()
    }

    /// Derived game status.
    ///
    /// Player one's lines are checked before player two's.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        match rules::winner(&self.board) {
            Some(player) => GameStatus::Won(player),
            None if self.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Panics if any game invariant is violated. Debug builds only.
#[cfg(debug_assertions)]
fn assert_invariants(game: &GameManager) {
    use super::invariants::{DropTokenInvariants, InvariantSet};

    if let Err(violations) = DropTokenInvariants::check_all(game) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Invariant violation: {}", descriptions);
    }
}
