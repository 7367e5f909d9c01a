//! Alternating turn invariant: players alternate One, Two, One, Two, ...

use super::super::{Cell, GameManager, Player};
use super::Invariant;

/// Invariant: Players alternate turns, One first.
///
/// After an even number of placements it is One's turn and both players
/// hold the same number of tokens; after an odd number it is Two's turn and
/// One holds exactly one token more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameManager> for AlternatingTurnInvariant {
    fn holds(game: &GameManager) -> bool {
        let count = |player: Player| {
            game.board()
                .rows()
                .iter()
                .flatten()
                .filter(|cell| **cell == Cell::Occupied(player))
                .count()
        };
        let ones = count(Player::One);
        let twos = count(Player::Two);

        match game.current_player() {
            Player::One => game.previous_moves().len() % 2 == 0 && ones == twos,
            Player::Two => game.previous_moves().len() % 2 == 1 && ones == twos + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with player one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_holds_through_a_game() {
        let mut game = GameManager::new();
        assert!(AlternatingTurnInvariant::holds(&game));
        for column in [1, 1, 2, 3, 4, 4, 4] {
            assert!(game.place(column));
            assert!(AlternatingTurnInvariant::holds(&game));
        }
    }

    #[test]
    fn test_extra_token_violates() {
        let mut game = GameManager::new();
        assert!(game.place(1));
        game.board_mut()
            .set(1, 0, Cell::Occupied(Player::One))
            .unwrap();
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
