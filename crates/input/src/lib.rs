//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s. The game is
//! turn-based, so there is no repeat handling: one key press is one command.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
