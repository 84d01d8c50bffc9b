//! Board module - manages the game grid.
//!
//! The board is a 10x20 grid where each cell is empty or filled with a
//! piece kind. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..10 left to right and y in 0..20 top
//! to bottom. The board is mutated only by `merge` and `clear_full_rows`.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board.
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled).
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision test for a shape at board position (x, y).
    ///
    /// Returns true iff any occupied shape cell lands outside the board
    /// or on an occupied board cell. Both x and y bounds are checked
    /// explicitly; out-of-range positions always count as collisions.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.occupied().any(|(lx, ly, _)| {
            let px = x + lx;
            let py = y + ly;
            if px < 0 || px >= BOARD_WIDTH as i8 || py < 0 || py >= BOARD_HEIGHT as i8 {
                return true;
            }
            self.is_occupied(px, py)
        })
    }

    /// Write a shape's occupied cells into the board at (x, y).
    ///
    /// Pure write: no bounds or overlap checking. The caller must have
    /// already collision-tested the position.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8) {
        for (lx, ly, kind) in shape.occupied() {
            self.set(x + lx, y + ly, Some(kind));
        }
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, shifting the rows above down and inserting
    /// empty rows at the top. Returns the cleared row indices in
    /// bottom-to-top order.
    ///
    /// Two-pointer collapse over the flat array, zero allocation. A piece
    /// spans at most 4 rows, so at most 4 rows clear in one pass.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Blank the rows that fell off the top.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Check whether every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Clear the entire board.
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
    use crate::types::PieceKind;

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(PieceKind::I));
        }
    }

    #[test]
    fn index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn collides_checks_both_axes_explicitly() {
        let board = Board::new();
        let shape = Shape::canonical(PieceKind::O);

        assert!(!board.collides(&shape, 0, 0));
        assert!(board.collides(&shape, -1, 0), "past left wall");
        assert!(board.collides(&shape, 9, 0), "past right wall");
        assert!(board.collides(&shape, 0, -1), "above the top");
        assert!(board.collides(&shape, 0, 19), "below the floor");
        assert!(!board.collides(&shape, 8, 18), "flush bottom-right corner");
    }

    #[test]
    fn collides_detects_occupied_cells() {
        let mut board = Board::new();
        let shape = Shape::canonical(PieceKind::O);

        board.set(4, 5, Some(PieceKind::T));
        assert!(board.collides(&shape, 4, 5));
        assert!(board.collides(&shape, 3, 4), "overlap on one corner");
        assert!(!board.collides(&shape, 5, 5));
    }

    #[test]
    fn merge_writes_only_occupied_cells() {
        let mut board = Board::new();
        let shape = Shape::canonical(PieceKind::T); // [[0,1,0],[1,1,1]]

        board.merge(&shape, 3, 10);
        assert_eq!(board.get(4, 10), Some(Some(PieceKind::T)));
        assert_eq!(board.get(3, 10), Some(None), "transparent matrix cell");
        assert_eq!(board.get(3, 11), Some(Some(PieceKind::T)));
        assert_eq!(board.get(4, 11), Some(Some(PieceKind::T)));
        assert_eq!(board.get(5, 11), Some(Some(PieceKind::T)));
    }

    #[test]
    fn clear_single_row_shifts_rows_above() {
        let mut board = Board::new();
        fill_row(&mut board, 15);
        board.set(2, 14, Some(PieceKind::S));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[15]);

        // The marker above the cleared row moved down by one.
        assert_eq!(board.get(2, 15), Some(Some(PieceKind::S)));
        assert_eq!(board.get(2, 14), Some(None));
        // A fresh empty row appeared at the top.
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, 0), Some(None));
        }
    }

    #[test]
    fn clear_adjacent_full_rows_in_one_pass() {
        let mut board = Board::new();
        for y in 16..20 {
            fill_row(&mut board, y);
        }
        board.set(0, 15, Some(PieceKind::Z));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.len(), 4);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::Z)));
        for y in 0..19 {
            for x in 0..BOARD_WIDTH as i8 {
                assert_eq!(board.get(x, y), Some(None), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn partial_rows_survive_a_clear_pass() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(0, 18, Some(PieceKind::J)); // not full

        board.clear_full_rows();
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::J)));
        assert!(!board.is_row_full(19));
    }

    #[test]
    fn no_full_rows_leaves_board_unchanged() {
        let mut board = Board::new();
        board.set(3, 10, Some(PieceKind::L));
        let before = board.clone();

        let cleared = board.clear_full_rows();
        assert!(cleared.is_empty());
        assert_eq!(board, before);
    }
}
