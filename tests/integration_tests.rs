//! Integration tests for the session controller and the input mapping

use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::mock::StepRng;

use tui_2048::core::{Board, GameState};
use tui_2048::input::handle_key_event;
use tui_2048::types::{Direction, GameAction, INITIAL_TILES};

fn fresh_game_invariants<R: rand::Rng>(state: &GameState<R>) {
    assert_eq!(state.board().tile_count(), INITIAL_TILES);
    assert!(state.board().tiles().all(|t| t.value == 2 || t.value == 4));
    assert_eq!(state.score(), 0);
    assert_eq!(state.turn(), 0);
    assert!(!state.game_over());
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    fresh_game_invariants(&state);

    // Play until the game ends or we give up.
    let mut last_score = 0;
    for i in 0..2_000 {
        let result = state.apply_move(Direction::ALL[i % 4]);
        assert!(state.score() >= last_score);
        assert_eq!(state.score() - last_score, result.score_delta);
        last_score = state.score();
        if state.game_over() {
            break;
        }
    }

    state.reset();
    fresh_game_invariants(&state);
    assert_eq!(state.episode_id(), 1);
}

#[test]
fn test_reset_from_any_state() {
    let mut state = GameState::new(7);
    for i in 0..50 {
        state.apply_move(Direction::ALL[(i * 3) % 4]);
    }
    state.reset();
    fresh_game_invariants(&state);

    let stuck = Board::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
        .unwrap();
    let mut state = GameState::from_board(stuck, StepRng::new(0, 0));
    assert!(state.game_over());
    state.reset();
    fresh_game_invariants(&state);
}

#[test]
fn test_no_op_move_leaves_session_untouched() {
    let board = Board::from_values([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut state = GameState::from_board(board, StepRng::new(0, 0));

    let before = state.snapshot();
    let result = state.apply_move(Direction::Up);
    assert!(!result.changed);
    assert!(result.spawned.is_none());
    assert_eq!(state.snapshot(), before);
}

#[test]
fn test_each_turn_spawns_exactly_one_tile() {
    let mut state = GameState::new(99);
    for i in 0..200 {
        if state.game_over() {
            break;
        }
        let dir = Direction::ALL[i % 4];
        let before = state.board().tile_count();
        let preview = state.board().clone().slide(dir);
        let result = state.apply_move(dir);
        assert_eq!(result.changed, preview.changed);
        if result.changed {
            assert!(result.spawned.is_some());
            assert_eq!(
                state.board().tile_count(),
                before - preview.merges as usize + 1
            );
        } else {
            assert_eq!(state.board().tile_count(), before);
        }
    }
}

#[test]
fn test_key_press_drives_session() {
    let board = Board::from_values([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut state = GameState::from_board(board, StepRng::new(0, 0));

    let action = handle_key_event(KeyEvent::from(KeyCode::Left)).unwrap();
    assert_eq!(action, GameAction::Move(Direction::Left));
    assert!(state.apply_action(action));
    assert_eq!(state.board().value_at(0, 0), 2);
    assert_eq!(state.turn(), 1);

    let restart = handle_key_event(KeyEvent::from(KeyCode::Char('r'))).unwrap();
    state.apply_action(restart);
    fresh_game_invariants(&state);
}
