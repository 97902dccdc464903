//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 4x4 grid:
//!
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//!
//! # Spawn Policy
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_TWO_PROBABILITY` | 0.9 | Chance a spawned tile is a 2 (otherwise 4) |
//! | `INITIAL_TILES` | 2 | Tiles spawned on a fresh board |
//! | `WINNING_TILE` | 2048 | Tile value that marks a won game (play continues) |
//! | `MAX_TILE_VALUE` | 2^18 | Largest tile a 4x4 game can build |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GRID_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! // Row/column delta
//! assert_eq!(dir.delta(), (0, -1));
//!
//! // Parse game action
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid side length in cells (4)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid (16)
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Probability that a spawned tile has value 2; otherwise it is a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Value of the common spawned tile.
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of the rare spawned tile.
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Number of tiles spawned when a game starts or restarts.
pub const INITIAL_TILES: usize = 2;

/// Reaching this tile value counts as a win. The game keeps going afterwards.
pub const WINNING_TILE: u32 = 2048;

/// Largest value a 4x4 board can build when 4s spawn into the last free cells.
///
/// Boards are capped here so that merges and scores stay well inside `u32`.
pub const MAX_TILE_VALUE: u32 = 1 << 18;

/// A grid position as `(row, col)`.
pub type Pos = (usize, usize);

/// Slide direction for a move command.
///
/// Each direction is a unit row/column delta with exactly one nonzero
/// component:
/// - **Up**: `(-1, 0)`
/// - **Down**: `(1, 0)`
/// - **Left**: `(0, -1)`
/// - **Right**: `(0, 1)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta `(dr, dc)` for this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (-1, 0));
    /// assert_eq!(Direction::Down.delta(), (1, 0));
    /// assert_eq!(Direction::Right.delta(), (0, 1));
    /// ```
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to a session
///
/// These actions are produced by the input layer (or a scripted driver)
/// and consumed by the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in the given direction
    Move(Direction),
    /// Throw away the current game and start a new one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}

/// Returns true if `value` may sit on the board: a power of two in `2..=MAX_TILE_VALUE`.
pub fn is_tile_value(value: u32) -> bool {
    (2..=MAX_TILE_VALUE).contains(&value) && value.is_power_of_two()
}
