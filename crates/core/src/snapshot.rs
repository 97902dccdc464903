//! Copyable view of a session for renderers and tests.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::GRID_SIZE;

/// One occupied cell as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub id: u32,
    pub value: u32,
}

/// Read-only copy of everything a renderer needs after a command.
///
/// Positions are implicit in `cells[row][col]`. Tile ids let a renderer pair up
/// tiles between two consecutive snapshots to animate slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cells: [[Option<TileSnapshot>; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub game_over: bool,
    pub won: bool,
    pub turn: u32,
    pub episode_id: u32,
    pub highest_tile: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[None; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.game_over = false;
        self.won = false;
        self.turn = 0;
        self.episode_id = 0;
        self.highest_tile = 0;
    }

    /// Copy the board's cells into `self.cells`.
    pub fn write_board(&mut self, board: &Board) {
        for (row, line) in self.cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = board.tile_at(row, col).map(|t| TileSnapshot {
                    id: t.id.0,
                    value: t.value,
                });
            }
        }
    }

    /// Raw values, 0 for empty cells
    pub fn values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[0; GRID_SIZE]; GRID_SIZE];
        for (row, line) in out.iter_mut().enumerate() {
            for (col, value) in line.iter_mut().enumerate() {
                *value = self.cells[row][col].map_or(0, |t| t.value);
            }
        }
        out
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
            score: 0,
            game_over: false,
            won: false,
            turn: 0,
            episode_id: 0,
            highest_tile: 0,
        }
    }
}
