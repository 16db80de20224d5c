//! Gridfall: a falling-block puzzle with a pure game core.
//!
//! `core` holds all game rules and is free of I/O; `input` and `term` are
//! the thin crossterm presentation shell around it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
