use serde::Serialize;

use crate::active::ActivePiece;
use crate::types::{CellPos, Color, SessionState, ShapeKind, BASE_INTERVAL_MS, COLUMNS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub color: Color,
    pub cells: [CellPos; 4],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            color: value.color(),
            cells: *value.cells(),
        }
    }
}

/// Read-only copy of everything a renderer needs
///
/// `board` holds color codes (`0` = empty, see [`Color::code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: [[u8; COLUMNS as usize]; ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub state: SessionState,
    pub score: u32,
    pub game_number: u32,
    pub interval_ms: u32,
}

impl GameSnapshot {
    /// Color code at (col, row), with the active piece drawn over the board
    ///
    /// Returns 0 for empty cells and for anything off the visible grid.
    pub fn code_at(&self, col: i8, row: i8) -> u8 {
        if col < 0 || row < 0 || col >= COLUMNS as i8 || row >= ROWS as i8 {
            return 0;
        }
        if let Some(active) = &self.active {
            if active.cells.contains(&(col, row)) {
                return active.color.code();
            }
        }
        self.board[row as usize][col as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; COLUMNS as usize]; ROWS as usize],
            active: None,
            state: SessionState::Idle,
            score: 0,
            game_number: 0,
            interval_ms: BASE_INTERVAL_MS,
        }
    }
}
