//! Pieces module - tetromino shape matrices and rotation.
//!
//! Each piece is a small rectangular matrix of cells in one canonical
//! orientation. Rotation is a matrix transpose followed by reversing the
//! row order, which yields a clockwise 90° turn. There are no per-kind
//! rotation tables; every orientation is derived from the canonical one.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind};

/// Maximum shape extent along either axis (the I piece is 1x4).
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<Cell, MAX_SHAPE_DIM>;

/// A piece shape: a rectangular matrix of cells.
///
/// Empty matrix cells are transparent; filled cells carry the piece kind.
/// Width and height swap when the shape is rotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// The canonical (spawn) orientation for a piece kind.
    pub fn canonical(kind: PieceKind) -> Self {
        let pattern: &[&[u8]] = match kind {
            PieceKind::I => &[&[1, 1, 1, 1]],
            PieceKind::J => &[&[0, 1], &[0, 1], &[1, 1]],
            PieceKind::L => &[&[1, 0], &[1, 0], &[1, 1]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
            PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        };
        Self::from_pattern(kind, pattern)
    }

    fn from_pattern(kind: PieceKind, pattern: &[&[u8]]) -> Self {
        let mut rows = ArrayVec::new();
        for line in pattern {
            let mut row = ShapeRow::new();
            for &filled in *line {
                row.push(if filled != 0 { Some(kind) } else { None });
            }
            rows.push(row);
        }
        Self { rows }
    }

    /// Number of columns in the matrix.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Number of rows in the matrix.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Cell at matrix position (x, y). Out-of-matrix reads are empty.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// Iterate the occupied cells as (local_x, local_y, kind).
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|kind| (x as i8, y as i8, kind)))
        })
    }

    /// Clockwise 90° rotation: transpose, then reverse the row order.
    ///
    /// Pure; the input shape is untouched.
    pub fn rotated(&self) -> Self {
        let mut rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM> = ArrayVec::new();
        for x in 0..self.width() {
            let mut row = ShapeRow::new();
            for src in &self.rows {
                row.push(src[x]);
            }
            rows.push(row);
        }
        rows.reverse();
        Self { rows }
    }
}
