//! Board module - the grid of locked cells
//!
//! The board is a 12x24 grid where each cell is empty or holds the color tag
//! of a locked piece cell. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (col, row) where col ranges 0..11 (left to right) and row ranges
//! 0..23 (top to bottom). Rows above the top edge (`row < 0`) are not stored and
//! are never occupied.

use crate::active::ActivePiece;
use crate::types::{Cell, Color, COLUMNS, ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (COLUMNS as usize) * (ROWS as usize);

/// The game board - 12 columns x 24 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLUMNS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if !Self::contains(col, row) {
            return None;
        }
        Some((row as usize) * (COLUMNS as usize) + (col as usize))
    }

    /// Check if (col, row) lies inside the visible grid
    #[inline(always)]
    pub fn contains(col: i8, row: i8) -> bool {
        col >= 0 && col < COLUMNS as i8 && row >= 0 && row < ROWS as i8
    }

    /// Check if a column index is inside the grid, ignoring rows
    #[inline(always)]
    pub fn contains_column(col: i8) -> bool {
        col >= 0 && col < COLUMNS as i8
    }

    /// Get cell at position (col, row)
    /// Returns None if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Check if a locked cell exists at (col, row)
    ///
    /// Anything outside the grid, including every row above the top edge,
    /// reports unoccupied.
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Record a locked cell
    ///
    /// # Panics
    ///
    /// Panics if the cell is off the grid or already occupied. Either means the
    /// session committed a piece the validator should have stopped.
    pub fn occupy(&mut self, col: i8, row: i8, color: Color) {
        let Some(idx) = Self::index(col, row) else {
            panic!("occupy outside the grid at ({}, {})", col, row);
        };
        assert!(
            self.cells[idx].is_none(),
            "cell ({}, {}) is already occupied",
            col,
            row
        );
        self.cells[idx] = Some(color);
    }

    /// Commit every cell of `piece` into the grid
    ///
    /// Called once per piece, when it can no longer descend and lies fully
    /// inside the visible grid.
    pub fn occupy_piece(&mut self, piece: &ActivePiece) {
        assert!(
            !piece.is_above_grid(),
            "cannot lock a piece that is still above the grid"
        );
        let color = piece.color();
        for &(col, row) in piece.cells() {
            self.occupy(col, row, color);
        }
    }

    /// Number of locked cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(COLUMNS as usize)
    }

    /// Encode the grid as color codes (`0` = empty) for snapshots
    pub fn write_u8_grid(&self, out: &mut [[u8; COLUMNS as usize]; ROWS as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, cell) in dst.iter_mut().zip(src) {
                *d = cell.map_or(0, |color| color.code());
            }
        }
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
