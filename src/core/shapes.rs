//! Shapes module - the seven tetromino definitions and the rotation transform
//!
//! Each shape is a small boolean matrix in its spawn orientation plus a
//! display color. Rotation produces a new matrix rotated 90 degrees
//! clockwise; there is no kick/offset search, callers validate the rotated
//! matrix at the unchanged position and reject it outright if it collides.

use crate::types::{PieceKind, Rgb};

/// Maximum matrix dimension (the I piece is 4 wide, everything else fits in 3)
pub const MAX_SHAPE_DIM: usize = 4;

/// A piece's occupancy matrix for one orientation.
///
/// Backed by a fixed 4x4 grid with explicit `rows`/`cols` so rotation can
/// swap dimensions without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from row slices (1 = filled)
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn is_set(&self, r: u8, c: u8) -> bool {
        r < self.rows && c < self.cols && self.cells[r as usize][c as usize]
    }

    /// Iterate the set cells as (col, row) offsets from the shape origin
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols)
                .filter(move |&c| self.cells[r as usize][c as usize])
                .map(move |c| (c as i8, r as i8))
        })
    }

    /// Rotate 90 degrees clockwise: for R x C input the output is C x R,
    /// with `out[c][R-1-r] = in[r][c]`.
    pub fn rotated_cw(&self) -> Self {
        let mut out = Self {
            rows: self.cols,
            cols: self.rows,
            cells: [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
        };
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                out.cells[c][self.rows as usize - 1 - r] = self.cells[r][c];
            }
        }
        out
    }
}

/// Get the spawn-orientation shape for a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Display color for a piece kind
pub fn color_of(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::S => Rgb::new(0, 240, 0),
        PieceKind::Z => Rgb::new(240, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shapes_have_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(shape_of(kind).offsets().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_rotation_swaps_dimensions() {
        let i = shape_of(PieceKind::I);
        assert_eq!((i.rows(), i.cols()), (1, 4));

        let rotated = i.rotated_cw();
        assert_eq!((rotated.rows(), rotated.cols()), (4, 1));
        for r in 0..4 {
            assert!(rotated.is_set(r, 0));
        }
    }

    #[test]
    fn test_rotation_formula() {
        // J spawn matrix:
        //   1 0 0
        //   1 1 1
        // rotated clockwise:
        //   1 1
        //   1 0
        //   1 0
        let rotated = shape_of(PieceKind::J).rotated_cw();
        assert_eq!((rotated.rows(), rotated.cols()), (3, 2));
        assert!(rotated.is_set(0, 0) && rotated.is_set(0, 1));
        assert!(rotated.is_set(1, 0) && !rotated.is_set(1, 1));
        assert!(rotated.is_set(2, 0) && !rotated.is_set(2, 1));
    }

    #[test]
    fn test_four_rotations_identity() {
        for kind in PieceKind::ALL {
            let original = shape_of(kind);
            let back = original
                .rotated_cw()
                .rotated_cw()
                .rotated_cw()
                .rotated_cw();
            assert_eq!(original, back, "{kind:?}");
        }
    }

    #[test]
    fn test_o_rotation_is_identity() {
        let o = shape_of(PieceKind::O);
        assert_eq!(o.rotated_cw(), o);
    }
}
