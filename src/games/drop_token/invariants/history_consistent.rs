//! History consistency invariant: history length matches occupied cells.

use super::super::GameManager;
use super::Invariant;

/// Invariant: History length equals number of occupied cells.
///
/// Every entry in the move history corresponds to exactly one token on the
/// board. No placements are missing, no cells are filled without one.
pub struct HistoryConsistentInvariant;

impl Invariant<GameManager> for HistoryConsistentInvariant {
    fn holds(game: &GameManager) -> bool {
        game.previous_moves().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
