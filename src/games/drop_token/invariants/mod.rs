//! First-class invariants for Drop Token.
//!
//! Invariants are logical properties that must hold after every placement.
//! They are checked in debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose at the type level.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violated invariant, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod gravity;
pub mod history_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use gravity::GravityInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// All Drop Token invariants as a composable set.
pub type DropTokenInvariants = (
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
    GravityInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::drop_token::{Cell, GameManager, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameManager::new();
        assert!(DropTokenInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameManager::new();
        for column in [1, 2, 2, 4, 3] {
            assert!(game.place(column));
        }
        assert!(DropTokenInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = GameManager::new();
        assert!(game.place(1));

        // Floating token with no history entry and no turn change.
        game.board_mut()
            .set(2, 3, Cell::Occupied(Player::Two))
            .unwrap();

        let violations = DropTokenInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
