//! Active piece module - the falling piece and its movement validator
//!
//! A piece is the shape kind plus the absolute position of its four cells.
//! It only ever translates by one cell at a time; all four cells move together
//! or none do.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{get_shape, shape_color};
use crate::types::{CellPos, Color, Direction, ShapeKind, SPAWN_COLUMN, SPAWN_ROW};

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: ShapeKind,
    cells: [CellPos; 4],
}

/// Cells a move freed and cells it newly covered
///
/// Lets a renderer repaint only what changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveDelta {
    pub vacated: ArrayVec<CellPos, 4>,
    pub entered: ArrayVec<CellPos, 4>,
}

impl ActivePiece {
    /// Create a piece at the spawn origin, with its top row 3 rows above the grid
    pub fn spawn(kind: ShapeKind) -> Self {
        let cells = get_shape(kind).map(|(dc, dr)| (SPAWN_COLUMN + dc, SPAWN_ROW + dr));
        Self { kind, cells }
    }

    /// Create a piece from explicit cells (for tests and replays)
    pub fn from_cells(kind: ShapeKind, cells: [CellPos; 4]) -> Self {
        Self { kind, cells }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        shape_color(self.kind)
    }

    pub fn cells(&self) -> &[CellPos; 4] {
        &self.cells
    }

    /// Whether any cell is still above the visible grid
    pub fn is_above_grid(&self) -> bool {
        self.cells.iter().any(|&(_, row)| row < 0)
    }

    /// Check whether translating one step in `direction` is allowed
    ///
    /// Per cell, on the candidate position:
    /// - above the grid moving down: only occupancy is checked
    /// - above the grid moving sideways: only the column bound is checked
    /// - on the grid: both bounds and occupancy are checked
    ///
    /// Never mutates the piece or the board.
    pub fn can_move(&self, board: &Board, direction: Direction) -> bool {
        let (dc, dr) = direction.delta();
        self.cells.iter().all(|&(col, row)| {
            let (nc, nr) = (col + dc, row + dr);
            if row < 0 {
                match direction {
                    Direction::Down => !board.is_occupied(nc, nr),
                    Direction::Left | Direction::Right => Board::contains_column(nc),
                }
            } else {
                Board::contains(nc, nr) && !board.is_occupied(nc, nr)
            }
        })
    }

    /// Translate all four cells one step in `direction`
    ///
    /// Callers must have checked [`can_move`](Self::can_move) first; debug
    /// builds re-check against `board` and panic on an illegal move.
    pub fn apply_move(&mut self, board: &Board, direction: Direction) {
        debug_assert!(
            self.can_move(board, direction),
            "illegal {} move for {:?}",
            direction.as_str(),
            self.cells
        );
        let (dc, dr) = direction.delta();
        for cell in &mut self.cells {
            cell.0 += dc;
            cell.1 += dr;
        }
    }

    /// Validate and apply a move in one step
    ///
    /// Returns the cells that changed, or `None` if the move was rejected.
    pub fn try_move(&mut self, board: &Board, direction: Direction) -> Option<MoveDelta> {
        if !self.can_move(board, direction) {
            return None;
        }
        let before = self.cells;
        self.apply_move(board, direction);
        Some(move_delta(&before, &self.cells))
    }
}

fn move_delta(before: &[CellPos; 4], after: &[CellPos; 4]) -> MoveDelta {
    let mut delta = MoveDelta::default();
    for cell in before {
        if !after.contains(cell) {
            delta.vacated.push(*cell);
        }
    }
    for cell in after {
        if !before.contains(cell) {
            delta.entered.push(*cell);
        }
    }
    delta
}
