//! Game state module - manages the complete game state
//!
//! This module ties together the core components: board, shapes, piece
//! source, and scoring. It owns the single live game state and runs every
//! trigger (descent tick or input action) to completion synchronously, so
//! no locking is needed anywhere.

use crate::core::board::Board;
use crate::core::piece::Piece;
use crate::core::rng::{PieceSource, UniformPicker};
use crate::core::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::GameAction;

/// Complete game state, generic over the piece source so tests can inject
/// a deterministic sequence.
#[derive(Debug, Clone)]
pub struct GameState<S: PieceSource = UniformPicker> {
    board: Board,
    active: Option<Piece>,
    source: S,
    score: u32,
    lines: u32,
    level: u32,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(UniformPicker::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from the given source
    pub fn with_source(source: S) -> Self {
        Self::from_parts(Board::new(), source)
    }

    /// Create a game over a prepared board (scenario/test setup)
    pub fn from_parts(board: Board, source: S) -> Self {
        Self {
            board,
            active: None,
            source,
            score: 0,
            lines: 0,
            level: 1,
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current automatic descent period, derived from the level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Spawn a replacement piece at the top center.
    ///
    /// If the fresh piece collides at its spawn position the session ends:
    /// `game_over` is set and the colliding piece is discarded.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = Piece::spawn(self.source.next_kind());
        if !piece.fits(&self.board) {
            self.game_over = true;
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Try to translate the active piece; invalid moves are silent no-ops
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if active.fits_at(&self.board, dx, dy) {
            self.active = Some(Piece {
                x: active.x + dx,
                y: active.y + dy,
                ..active
            });
            return true;
        }

        false
    }

    /// Try to rotate the active piece 90 degrees clockwise.
    ///
    /// The rotated matrix is validated at the unchanged position and
    /// rejected outright if it collides; there is no kick/offset search.
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.shape.rotated_cw();
        if active.shape_fits(&self.board, &rotated) {
            self.active = Some(Piece {
                shape: rotated,
                ..active
            });
            return true;
        }

        false
    }

    /// One descent step: move the piece down a row, or land it.
    ///
    /// Landing merges the piece into the board, clears full rows, applies
    /// scoring with the pre-clear level, recomputes the level, and spawns
    /// the replacement piece (which may end the session).
    pub fn soft_drop(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }

        let Some(active) = self.active else {
            // Absent only transiently; keep the session going.
            return self.spawn_piece();
        };

        if active.fits_at(&self.board, 0, 1) {
            self.active = Some(Piece {
                y: active.y + 1,
                ..active
            });
        } else {
            self.land(active);
        }
        true
    }

    /// Periodic scheduler entry point; equivalent to a soft drop
    pub fn tick(&mut self) -> bool {
        self.soft_drop()
    }

    fn land(&mut self, piece: Piece) {
        self.board.merge_piece(&piece);
        self.active = None;

        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            // Score uses the level in effect at clear time.
            self.score += line_clear_score(cleared, self.level);
            self.lines += cleared as u32;
            self.level = level_for_lines(self.lines);
        }

        self.spawn_piece();
    }

    /// Re-initialize to a fresh session; the piece source keeps its
    /// sequence position.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.paused = false;
        self.game_over = false;
        self.started = true;
        self.spawn_piece();
    }

    /// Apply a game action.
    ///
    /// Rule violations are no-ops returning `false`, never errors. While
    /// paused only un-pause (and restart) are accepted; after game over
    /// only restart is.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.reset();
                true
            }
            GameAction::TogglePause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            _ if self.paused || self.game_over => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Write a render snapshot, overlaying the active piece onto the grid
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();

        let width = self.board.width() as usize;
        for (idx, cell) in self.board.cells().iter().enumerate() {
            out.grid[idx / width][idx % width] = *cell;
        }

        if let Some(active) = self.active {
            for (x, y) in active.cells() {
                if y >= 0 {
                    out.grid[y as usize][x as usize] = Some(active.kind);
                }
            }
            out.active = Some(ActiveSnapshot {
                kind: active.kind,
                x: active.x,
                y: active.y,
            });
        }

        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
