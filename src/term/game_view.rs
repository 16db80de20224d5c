//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{color_of, GameSnapshot};
use crate::term::fb::{CellStyle, FrameBuffer, TermCell};
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the game well and side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for typical glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render a game snapshot into a framebuffer.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(TermCell::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = BOARD_HEIGHT as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Grid cells; the snapshot already carries the active piece overlay.
        for (y, row) in snapshot.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    let color = color_of(*kind);
                    let style = CellStyle {
                        fg: color,
                        bg: color,
                        bold: false,
                        dim: false,
                    };
                    fb.fill_rect(
                        start_x + 1 + (x as u16) * self.cell_w,
                        start_y + 1 + y as u16,
                        self.cell_w,
                        1,
                        '█',
                        style,
                    );
                }
            }
        }

        self.draw_side_panel(&mut fb, snapshot, start_x + frame_w + 2, start_y);

        if snapshot.paused {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if snapshot.game_over {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snapshot: &GameSnapshot, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(160, 160, 170),
            ..CellStyle::default()
        };
        let value = CellStyle {
            bold: true,
            ..CellStyle::default()
        };

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &snapshot.score.to_string(), value);
        fb.put_str(x, y + 3, "LINES", label);
        fb.put_str(x, y + 4, &snapshot.lines.to_string(), value);
        fb.put_str(x, y + 6, "LEVEL", label);
        fb.put_str(x, y + 7, &snapshot.level.to_string(), value);

        fb.put_str(x, y + 10, "←/→ move", label);
        fb.put_str(x, y + 11, "↑ rotate", label);
        fb.put_str(x, y + 12, "↓ drop", label);
        fb.put_str(x, y + 13, "p pause", label);
        fb.put_str(x, y + 14, "r restart", label);
        fb.put_str(x, y + 15, "q quit", label);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 30, 30),
            bold: true,
            dim: false,
        };
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        let ty = y + h / 2;
        fb.put_str(tx, ty, text, style);
    }
}

/// Side panel width reserved to the right of the well.
const PANEL_W: u16 = 12;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedSequence, GameState};
    use crate::types::PieceKind;

    fn snapshot_with_piece() -> GameSnapshot {
        let mut state = GameState::with_source(FixedSequence::new(vec![PieceKind::O]));
        state.start();
        state.snapshot()
    }

    #[test]
    fn test_render_fits_viewport() {
        let view = GameView::default();
        let fb = view.render(&snapshot_with_piece(), Viewport::new(80, 24));
        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 24);
    }

    #[test]
    fn test_render_tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&snapshot_with_piece(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }

    #[test]
    fn test_render_draws_active_piece_cells() {
        let view = GameView::default();
        let fb = view.render(&snapshot_with_piece(), Viewport::new(80, 24));

        let filled = fb.cells().iter().filter(|c| c.ch == '█').count();
        // O piece: 4 cells, 2 columns each.
        assert_eq!(filled, 8);
    }
}
