//! Core domain types for Drop Token.

use serde::{Deserialize, Serialize};

/// Width and height of the square board.
pub const BOARD_SIZE: usize = 4;

/// Footer printed beneath the last board row.
pub const BOARD_FOOTER: &str = "+--------";

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Player {
    /// Player one (goes first).
    One,
    /// Player two.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric id used when rendering the board.
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// A cell on the Drop Token board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's token.
    Occupied(Player),
}

impl Cell {
    /// Numeric id used when rendering the board (0 for empty).
    pub fn id(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.id(),
        }
    }
}

/// 4x4 Drop Token board.
///
/// Cells are stored row-major with row 0 at the bottom, so a token dropped
/// into a column lands at the lowest row that is still empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at `(row, col)`, both 0-based.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Overwrites the cell at `(row, col)` without applying gravity.
    ///
    /// Used to build fixtures; games go through [`Board::drop_token`].
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), &'static str> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err("Cell out of bounds");
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Number of tokens stacked in a column, counted from the bottom.
    pub fn column_height(&self, col: usize) -> usize {
        if col >= BOARD_SIZE {
            return 0;
        }
        self.cells
            .iter()
            .take_while(|row| row[col] != Cell::Empty)
            .count()
    }

    /// Checks if a column cannot take another token.
    ///
    /// Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= BOARD_SIZE || self.cells[BOARD_SIZE - 1][col] != Cell::Empty
    }

    /// Drops a token into a 0-based column and returns the row it landed on.
    ///
    /// Returns `None` when the column is full or off the board.
    pub fn drop_token(&mut self, col: usize, player: Player) -> Option<usize> {
        if col >= BOARD_SIZE {
            return None;
        }
        let row = self.cells.iter().position(|row| row[col] == Cell::Empty)?;
        self.cells[row][col] = Cell::Occupied(player);
        Some(row)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Rows from the bottom (row 0) up.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.iter().rev() {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {}", cell.id())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", BOARD_FOOTER)
    }
}

/// Derived status of a game.
///
/// Never stored: computed from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line yet and the board still has room.
    InProgress,
    /// A player has completed a line.
    Won(Player),
    /// The board is full with no line.
    Drawn,
}

impl GameStatus {
    /// Returns true once the game has reached a win or draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
