//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! [`core::GameSnapshot`] into a framebuffer that can be flushed to a terminal
//! backend, without any widget/layout library.
//!
//! Goals:
//! - Keep `core` deterministic and testable: this crate only reads snapshots
//! - Precise control over tile geometry (7x3 terminal cells per tile)
//! - Diff-based flushing so a turn only repaints the tiles that changed

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
