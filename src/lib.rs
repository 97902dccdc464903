//! TUI 2048 (workspace facade crate).
//!
//! Exposes the member crates under one name as
//! `tui_2048::{core, input, term, types}`; the implementation lives in the
//! dedicated crates under `crates/`.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
