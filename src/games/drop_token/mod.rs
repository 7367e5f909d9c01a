//! Drop Token: a 4x4 connect-four variant.

mod action;
pub mod invariants;
mod manager;
pub mod rules;
mod types;

pub use action::{MoveError, Placement};
pub use manager::GameManager;
pub use types::{BOARD_FOOTER, BOARD_SIZE, Board, Cell, GameStatus, Player};
