//! Read-only game snapshot for the presentation layer.
//!
//! The engine exposes state only through this value: the grid already has
//! the falling piece overlaid, so renderers never reach into engine
//! internals or re-run collision math.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    /// Board cells with the active piece overlaid
    pub grid: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.paused = false;
        self.game_over = false;
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            score: 0,
            lines: 0,
            level: 1,
            paused: false,
            game_over: false,
        }
    }
}
