//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Boards can be built from raw values and any RNG can be injected
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Fixed-size grid and tile arena
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, tile arena, slide/merge algorithm and game-over test
//! - [`game_state`]: Session controller with score, turn sequencing and restart
//! - [`spawn`]: Where new tiles appear and what they are worth
//! - [`snapshot`]: Read-only copies of the session for renderers
//!
//! # Game Rules
//!
//! - **Slide**: Every tile moves as far as it can in the chosen direction
//! - **Merge**: Two equal tiles that meet become one tile of double value; the
//!   merged value is added to the score
//! - **One merge per tile per move**: `[2, 2, 2, 2]` slides left into `[4, 4, 0, 0]`
//! - **Spawn**: After every move that changes the board, one tile (2 at 90%,
//!   4 at 10%) appears on a random empty cell
//! - **Game over**: No empty cell and no two adjacent equal tiles
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! // Create a game (two tiles already on the board)
//! let mut game = GameState::new(12345);
//! assert_eq!(game.board().tile_count(), 2);
//!
//! // Apply moves
//! game.apply_move(Direction::Left);
//! game.apply_action(GameAction::Move(Direction::Up));
//!
//! // Restart at any time
//! game.reset();
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveOutcome, Tile, TileId};
pub use game_state::{GameState, MoveResult};
pub use snapshot::{GameSnapshot, TileSnapshot};
