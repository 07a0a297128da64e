//! Board module - manages the grid of locked cells
//!
//! The board is a 20x10 grid where each cell is empty or holds the kind of a
//! locked piece. Uses a flat array for better cache locality.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom) and col
//! ranges 0..9 (left to right). Rows above the board are negative.

use arrayvec::ArrayVec;

use crate::core::pieces::ShapeMatrix;
use crate::types::{Cell, PieceKind, Position, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_COLS * BOARD_ROWS) as usize;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn cols(&self) -> u8 {
        BOARD_COLS
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a cell is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Collision test for a shape anchored at `pos`.
    ///
    /// A filled shape cell collides when its column leaves the board, its row
    /// reaches the floor, or it overlaps a locked cell. Cells with a negative
    /// board row are above the visible board: they are checked against the
    /// column bounds only, which is what lets pieces spawn partly off-board.
    pub fn collides(&self, shape: &ShapeMatrix, pos: Position) -> bool {
        shape.filled_cells().any(|(r, c)| {
            let row = pos.row + r as i8;
            let col = pos.col + c as i8;
            col < 0
                || col >= BOARD_COLS as i8
                || row >= BOARD_ROWS as i8
                || self.is_occupied(row, col)
        })
    }

    /// Lock a shape's filled cells into the grid.
    ///
    /// Cells with a negative row are silently dropped; the caller is
    /// responsible for treating `pos.row < 0` as game over.
    pub fn lock(&mut self, shape: &ShapeMatrix, pos: Position, kind: PieceKind) {
        for (r, c) in shape.filled_cells() {
            let row = pos.row + r as i8;
            let col = pos.col + c as i8;
            if row >= 0 {
                self.set(row, col, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS as usize {
            return false;
        }
        let start = row * BOARD_COLS as usize;
        let end = start + BOARD_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove one row: shift everything above it down and blank the top row.
    fn remove_row(&mut self, row: usize) {
        let width = BOARD_COLS as usize;

        // copy_within handles the overlapping ranges safely
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            let dst_start = r * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear all full rows, scanning bottom to top.
    ///
    /// After a removal the same index is re-checked (the rows above have
    /// shifted into it) before the scan advances upward, so several full rows
    /// are handled in one pass. Returns the cleared row indices in scan order;
    /// a single lock can complete at most four rows.
    pub fn clear_full_rows(&mut self) -> ArrayVec<u8, 4> {
        let mut cleared = ArrayVec::new();
        let mut row = BOARD_ROWS as usize - 1;

        loop {
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared.push(row as u8);
            } else if row == 0 {
                break;
            } else {
                row -= 1;
            }
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(19, 9), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(20, 0), None);
        assert_eq!(Board::index(0, 10), None);
    }

    #[test]
    fn test_remove_row_shifts_content_down() {
        let mut board = Board::new();
        board.set(3, 0, Some(PieceKind::I));
        board.set(4, 1, Some(PieceKind::O));

        board.remove_row(5);

        assert_eq!(board.get(4, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 1), Some(Some(PieceKind::O)));
        assert_eq!(board.get(3, 0), Some(None));
    }

    #[test]
    fn test_clear_rechecks_shifted_row_index() {
        let mut board = Board::new();

        // Two adjacent full rows: after row 19 is removed, the old row 18
        // content lands on row 19 and must be caught by the re-check.
        for col in 0..BOARD_COLS as i8 {
            board.set(18, col, Some(PieceKind::S));
            board.set(19, col, Some(PieceKind::Z));
        }

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 2);
        assert!(board.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_full_top_row_terminates() {
        let mut board = Board::new();
        for col in 0..BOARD_COLS as i8 {
            board.set(0, col, Some(PieceKind::T));
        }

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 1);
        assert!(board.cells().iter().all(|c| c.is_none()));
    }
}
