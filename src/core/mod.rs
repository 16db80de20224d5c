//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, input devices, or I/O.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use board::Board;
pub use game_state::GameState;
pub use piece::Piece;
pub use rng::{FixedSequence, PieceSource, SimpleRng, UniformPicker};
pub use shapes::{color_of, shape_of, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
