use rand::rngs::mock::StepRng;

use tui_2048::core::{Board, GameSnapshot, GameState};
use tui_2048::types::Direction;

#[test]
fn snapshot_mirrors_board_values_and_ids() {
    let board = Board::from_values([[2, 0, 0, 2], [0; 4], [0, 4, 0, 0], [0; 4]]).unwrap();
    let state = GameState::from_board(board, StepRng::new(0, 0));
    let snap = state.snapshot();

    assert_eq!(snap.values(), state.board().values());
    assert_eq!(snap.tile_count(), 3);
    for tile in state.board().tiles() {
        let cell = snap.cells[tile.row][tile.col].unwrap();
        assert_eq!(cell.id, tile.id.0);
        assert_eq!(cell.value, tile.value);
    }
}

#[test]
fn tile_ids_track_slides_between_snapshots() {
    let board = Board::from_values([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut state = GameState::from_board(board, StepRng::new(0, 0));
    let before = state.snapshot();
    let id = before.cells[0][3].unwrap().id;

    state.apply_move(Direction::Left);
    let after = state.snapshot();

    // The same tile now sits at the left edge; the spawn got a fresh id.
    assert_eq!(after.cells[0][0].unwrap().id, id);
    assert!(after
        .cells
        .iter()
        .flatten()
        .flatten()
        .any(|t| t.id != id));
    assert_eq!(after.turn, before.turn + 1);
}

#[test]
fn snapshot_into_overwrites_previous_contents() {
    let mut snap = GameSnapshot::default();
    snap.score = 999;
    snap.game_over = true;

    let state = GameState::new(3);
    state.snapshot_into(&mut snap);
    assert_eq!(snap.score, 0);
    assert!(!snap.game_over);
    assert_eq!(snap.tile_count(), 2);

    snap.clear();
    assert_eq!(snap, GameSnapshot::default());
}

#[test]
fn snapshot_serializes_to_json() {
    let state = GameState::new(11);
    let snap = state.snapshot();

    let json = serde_json::to_value(snap).unwrap();
    assert_eq!(json["score"], 0);
    assert_eq!(json["game_over"], false);
    assert_eq!(json["cells"].as_array().unwrap().len(), 4);

    let back: GameSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, snap);
}
