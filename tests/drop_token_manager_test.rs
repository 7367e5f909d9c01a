//! Tests for the Drop Token game manager.

use drop_token::{BOARD_SIZE, GameManager, GameStatus, MoveError, Player};

/// Columns that fill the whole board without either player completing a line.
///
/// Final board, bottom row first: `1 1 2 2 / 2 2 1 1 / 2 2 1 1 / 1 1 2 2`.
const DRAW_SEQUENCE: [i64; 16] = [1, 3, 3, 1, 3, 1, 1, 3, 2, 4, 4, 2, 4, 2, 2, 4];

fn play(columns: &[i64]) -> GameManager {
    let mut game = GameManager::new();
    for &column in columns {
        assert!(game.place(column), "placement at column {} should succeed", column);
    }
    game
}

#[test]
fn test_history_counts_only_successful_placements() {
    let mut game = GameManager::new();
    let mut successes = 0;
    for column in [1, 0, 2, 5, 1, -7, 1, 1, 1, 3] {
        if game.place(column) {
            successes += 1;
        }
        assert_eq!(game.previous_moves().len(), successes);
    }
    assert_eq!(successes, 6);
    assert_eq!(game.previous_moves(), &[1, 2, 1, 1, 1, 3]);
}

#[test]
fn test_out_of_range_leaves_state_unchanged() {
    let mut game = play(&[2, 3]);
    let before = game.clone();
    for column in [0, 5, -1, 100] {
        assert!(!game.place(column));
        assert_eq!(game, before);
    }
    assert_eq!(game.current_player(), Player::One);
}

#[test]
fn test_column_fills_after_four_placements() {
    let mut game = GameManager::new();
    for _ in 0..BOARD_SIZE {
        assert!(game.place(1));
    }
    let before = game.clone();
    assert!(!game.place(1));
    assert_eq!(game, before);
    assert_eq!(game.try_place(1), Err(MoveError::ColumnFull(1)));
}

#[test]
fn test_current_player_toggles_only_on_success() {
    let mut game = GameManager::new();
    for column in [1, 1, 1, 1, 1, 9, 2] {
        let before = game.current_player();
        if game.place(column) {
            assert_eq!(game.current_player(), before.opponent());
        } else {
            assert_eq!(game.current_player(), before);
        }
    }
    assert_eq!(game.current_player(), Player::Two);
}

#[test]
fn test_bottom_row_win_detected_on_completing_placement() {
    let columns = [1, 1, 2, 2, 3, 3, 4];
    let mut game = GameManager::new();
    for (i, &column) in columns.iter().enumerate() {
        assert!(game.place(column));
        assert_eq!(game.check_win(Player::One), i == columns.len() - 1);
        assert!(!game.check_win(Player::Two));
    }
    assert_eq!(game.status(), GameStatus::Won(Player::One));
}

#[test]
fn test_column_win() {
    let game = play(&[3, 1, 3, 1, 3, 1, 3]);
    assert!(game.check_win(Player::One));
    assert!(!game.check_win(Player::Two));
}

#[test]
fn test_main_diagonal_win() {
    let columns = [1, 2, 2, 4, 3, 3, 3, 4, 1, 4, 4];
    let almost = play(&columns[..columns.len() - 1]);
    assert!(!almost.check_win(Player::One));
    assert!(!almost.check_win(Player::Two));

    let game = play(&columns);
    assert!(game.check_win(Player::One));
    assert!(!game.check_win(Player::Two));
}

#[test]
fn test_anti_diagonal_win() {
    let columns = [4, 3, 3, 1, 2, 2, 2, 1, 4, 1, 1];
    let almost = play(&columns[..columns.len() - 1]);
    assert!(!almost.check_win(Player::One));

    let game = play(&columns);
    assert!(game.check_win(Player::One));
    assert!(!game.check_win(Player::Two));
}

#[test]
fn test_three_in_a_row_is_not_a_win() {
    let game = play(&[1, 1, 2, 2, 3, 3]);
    assert!(!game.check_win(Player::One));
    assert!(!game.check_win(Player::Two));
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_full_board_draw() {
    let mut game = GameManager::new();
    for (i, &column) in DRAW_SEQUENCE.iter().enumerate() {
        assert!(!game.is_full());
        assert!(game.place(column));
        assert_eq!(game.is_full(), i == DRAW_SEQUENCE.len() - 1);
    }
    assert!(!game.check_win(Player::One));
    assert!(!game.check_win(Player::Two));
    assert_eq!(game.status(), GameStatus::Drawn);

    for column in 1..=BOARD_SIZE as i64 {
        assert!(!game.place(column));
    }
    assert_eq!(game.previous_moves().len(), BOARD_SIZE * BOARD_SIZE);
}

#[test]
fn test_draw_board_render() {
    let game = play(&DRAW_SEQUENCE);
    let expected = "| 1 1 2 2\n| 2 2 1 1\n| 2 2 1 1\n| 1 1 2 2\n+--------\n";
    assert_eq!(game.render_board(), expected);
}

#[test]
fn test_previous_moves_is_a_snapshot_view() {
    let mut game = play(&[4, 2]);
    let snapshot = game.previous_moves().to_vec();
    assert!(game.place(3));
    assert_eq!(snapshot, vec![4, 2]);
    assert_eq!(game.previous_moves(), &[4, 2, 3]);
}
