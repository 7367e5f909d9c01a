//! Game rules for Drop Token.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! the game manager so invariants and tests can use them directly.

pub mod win;

pub use win::{has_line, winner};
