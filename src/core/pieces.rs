//! Pieces module - shape catalog and matrix rotation
//!
//! Each piece is a small 0/1 matrix in one canonical orientation. Rotation is
//! a plain 90-degree clockwise matrix transform (`new[c][rows-1-r] = old[r][c]`);
//! there is no rotation-state table.

use crate::types::PieceKind;

/// Maximum matrix dimension (the I piece spans 4 columns).
pub const MAX_SHAPE_DIM: usize = 4;

/// Flat stride of the shape storage.
const STRIDE: usize = MAX_SHAPE_DIM;

/// A rows x cols 0/1 matrix stored in a fixed flat array with stride 4.
///
/// Rotation builds a new matrix and never aliases the original, so a rejected
/// rotation can restore the previous shape by simply keeping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMatrix {
    rows: u8,
    cols: u8,
    cells: [u8; STRIDE * STRIDE],
}

impl ShapeMatrix {
    /// Build from row slices of 0/1 values. Used by the catalog and tests.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let cols = rows[0].len();
        debug_assert!(cols > 0 && cols <= MAX_SHAPE_DIM);
        debug_assert!(rows.iter().all(|r| r.len() == cols));

        let mut cells = [0u8; STRIDE * STRIDE];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r * STRIDE + c] = v;
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the local cell (r, c) is filled.
    #[inline(always)]
    pub fn is_filled(&self, r: u8, c: u8) -> bool {
        r < self.rows && c < self.cols && self.cells[(r as usize) * STRIDE + c as usize] != 0
    }

    /// Iterate the (row, col) offsets of all filled cells.
    pub fn filled_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.is_filled(r, c))
    }

    /// Rotate 90 degrees clockwise into a fresh matrix.
    ///
    /// Dimensions swap: an R x C matrix becomes C x R.
    pub fn rotated(&self) -> Self {
        let mut cells = [0u8; STRIDE * STRIDE];
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                cells[c * STRIDE + (self.rows as usize - 1 - r)] = self.cells[r * STRIDE + c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Canonical spawn-orientation matrix for a piece kind.
///
/// Returned by value: callers own a copy, so rotating an active piece never
/// touches the catalog data.
pub fn canonical_shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => ShapeMatrix::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::L => ShapeMatrix::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::J => ShapeMatrix::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        PieceKind::S => ShapeMatrix::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// A drawn piece: its current matrix plus the kind that fixes its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: ShapeMatrix,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(kind: PieceKind) -> Self {
        Self {
            shape: canonical_shape(kind),
            kind,
        }
    }
}
