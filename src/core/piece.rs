//! Piece module - the falling piece and its collision predicate

use crate::core::board::Board;
use crate::core::shapes::{color_of, shape_of, Shape};
use crate::types::{PieceKind, Rgb, BOARD_WIDTH};

/// The active falling piece: a shape matrix (mutated by rotation), its
/// display color, and a top-left (x, y) offset into the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Rgb,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind, horizontally centered at the top
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = shape_of(kind);
        let x = (BOARD_WIDTH as i8) / 2 - (shape.cols() as i8) / 2;
        Self {
            kind,
            color: color_of(kind),
            shape,
            x,
            y: 0,
        }
    }

    /// Absolute board coordinates of every set shape cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .offsets()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check whether this piece, translated by (dx, dy), collides with
    /// nothing: every set cell stays inside the columns, above the floor,
    /// and off filled board cells. Pure, no side effects.
    pub fn fits_at(&self, board: &Board, dx: i8, dy: i8) -> bool {
        self.shape
            .offsets()
            .all(|(mx, my)| board.is_open(self.x + mx + dx, self.y + my + dy))
    }

    /// Check the piece at its current position
    pub fn fits(&self, board: &Board) -> bool {
        self.fits_at(board, 0, 0)
    }

    /// Check whether a candidate shape fits at this piece's current position
    pub fn shape_fits(&self, board: &Board, shape: &Shape) -> bool {
        shape
            .offsets()
            .all(|(mx, my)| board.is_open(self.x + mx, self.y + my))
    }

    /// Check if the piece is resting on the floor or on filled cells
    pub fn is_grounded(&self, board: &Board) -> bool {
        !self.fits_at(board, 0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_centers_horizontally() {
        // x = floor(W/2) - floor(shape_width/2)
        assert_eq!(Piece::spawn(PieceKind::I).x, 5 - 2);
        assert_eq!(Piece::spawn(PieceKind::O).x, 5 - 1);
        assert_eq!(Piece::spawn(PieceKind::T).x, 5 - 1);
        for kind in PieceKind::ALL {
            assert_eq!(Piece::spawn(kind).y, 0);
        }
    }

    #[test]
    fn test_fits_on_empty_board() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(Piece::spawn(kind).fits(&board), "{kind:?}");
        }
    }

    #[test]
    fn test_fits_rejects_wall_overlap() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::O);
        piece.x = -1;
        assert!(!piece.fits(&board));

        piece.x = (BOARD_WIDTH as i8) - 1;
        assert!(!piece.fits(&board));
    }

    #[test]
    fn test_fits_rejects_floor_overlap() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::O);
        piece.y = 19;
        assert!(!piece.fits(&board));

        piece.y = 18;
        assert!(piece.fits(&board));
        assert!(piece.is_grounded(&board));
    }

    #[test]
    fn test_fits_allows_rows_above_board() {
        let board = Board::new();
        let mut piece = Piece::spawn(PieceKind::T);
        piece.y = -1;
        assert!(piece.fits(&board));
    }

    #[test]
    fn test_fits_rejects_filled_cell() {
        let mut board = Board::new();
        let piece = Piece::spawn(PieceKind::O);

        // O at spawn covers columns 4..=5 in rows 0..=1.
        board.set(4, 1, Some(PieceKind::I));
        assert!(!piece.fits(&board));
    }
}
