//! Drop Token - a 4x4 connect-four variant
//!
//! Two players take turns dropping tokens into the columns of a 4x4 grid.
//! A token falls to the lowest empty row of its column. The first player to
//! fill a row, a column or either diagonal wins; a full board with no line is
//! a draw.
//!
//! # Architecture
//!
//! - **Games**: [`GameManager`] owns the board, turn order and move history
//! - **Protocol**: [`CommandLoop`] adapts the line-based `PUT`/`GET`/`BOARD`/`EXIT`
//!   protocol onto a [`GameManager`]
//! - **Config**: [`GameConfig`] loads session settings from TOML
//!
//! # Example
//!
//! ```
//! use drop_token::{GameManager, Player};
//!
//! let mut game = GameManager::new();
//! for column in [1, 2, 1, 2, 1, 2, 1] {
//!     assert!(game.place(column));
//! }
//! assert!(game.check_win(Player::One));
//! assert_eq!(game.previous_moves(), &[1, 2, 1, 2, 1, 2, 1]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod protocol;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Game types
pub use games::drop_token::invariants;
pub use games::drop_token::rules;
pub use games::drop_token::{
    BOARD_FOOTER, BOARD_SIZE, Board, Cell, GameManager, GameStatus, MoveError, Placement, Player,
};

// Crate-level exports - Protocol
pub use protocol::{
    Command, CommandLoop, HELP_MESSAGE, Keyword, Response, SessionSummary, WELCOME_MESSAGE,
};
