//! Shared types module - data structures and constants used by every crate
//!
//! All types here are plain data with no game logic, usable from the engine,
//! the terminal driver and tests alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 24 rows (indexed 0-23)
//! - **Above the grid**: rows `< 0` are hidden spawn space; they are never stored
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_INTERVAL_MS` | 1000 | Tick interval when a game starts |
//! | `SPEED_STEP_MS` | 100 | Interval reduction per ramp step |
//! | `SPEED_RAMP_EVERY` | 10 | Pieces between ramp steps |
//! | `MIN_INTERVAL_MS` | 100 | Interval floor |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, GameAction, ShapeKind, COLUMNS, ROWS};
//!
//! assert_eq!(Direction::Down.delta(), (0, 1));
//! assert_eq!(GameAction::MoveLeft.direction(), Some(Direction::Left));
//!
//! assert_eq!(ShapeKind::ALL[0], ShapeKind::I);
//! assert_eq!(ShapeKind::COUNT, 7);
//!
//! assert_eq!(COLUMNS, 12);
//! assert_eq!(ROWS, 24);
//! ```

use serde::Serialize;

/// Board width in cells (12 columns)
pub const COLUMNS: u8 = 12;

/// Board height in cells (24 rows)
pub const ROWS: u8 = 24;

/// Column added to every catalog offset when a piece spawns
pub const SPAWN_COLUMN: i8 = 2;

/// Row of the topmost piece cell at spawn (3 rows above the visible grid)
pub const SPAWN_ROW: i8 = -3;

/// Tick interval when a game starts (1 second per tick)
pub const BASE_INTERVAL_MS: u32 = 1000;

/// Interval reduction applied at each speed ramp step
pub const SPEED_STEP_MS: u32 = 100;

/// Number of spawned pieces between speed ramp steps
pub const SPEED_RAMP_EVERY: u32 = 10;

/// Lowest tick interval the speed ramp will produce
pub const MIN_INTERVAL_MS: u32 = 100;

/// A grid coordinate `(col, row)`; rows above the visible grid are negative
pub type CellPos = (i8, i8);

/// Unit movement directions
///
/// There is no `Up`: pieces only fall or shift sideways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Right, Direction::Down];

    /// Unit translation `(d_col, d_row)` for this direction
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// Color tag stored in locked cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Gray,
}

impl Color {
    /// Compact code used by grid snapshots (`0` is reserved for empty cells)
    pub fn code(&self) -> u8 {
        match self {
            Color::Red => 1,
            Color::Green => 2,
            Color::Blue => 3,
            Color::Yellow => 4,
            Color::Cyan => 5,
            Color::Magenta => 6,
            Color::Gray => 7,
        }
    }

    /// Inverse of [`code`](Self::code); `0` and unknown codes are `None`
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Blue),
            4 => Some(Color::Yellow),
            5 => Some(Color::Cyan),
            6 => Some(Color::Magenta),
            7 => Some(Color::Gray),
            _ => None,
        }
    }

}

/// The piece shapes in the catalog
///
/// Silhouettes (top row first, `#` = cell):
/// - **I**: `####`
/// - **J**: three stacked cells with a foot to the left
/// - **L**: three stacked cells with a foot to the right
/// - **Stair**: vertical step, `#.` / `##` / `.#`
/// - **S**: `.##` / `##.`
/// - **T**: `.#.` / `###`
/// - **Z**: `##.` / `.##`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    I,
    J,
    L,
    Stair,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// Number of shapes in the catalog; drives the random selection range
    pub const COUNT: usize = 7;

    /// All shapes in catalog order
    pub const ALL: [ShapeKind; Self::COUNT] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::Stair,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Catalog position of this shape
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::J => 1,
            ShapeKind::L => 2,
            ShapeKind::Stair => 3,
            ShapeKind::S => 4,
            ShapeKind::T => 5,
            ShapeKind::Z => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::Stair => "stair",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }
}

/// Session lifecycle states
///
/// `Idle -> Running <-> Paused`, and back to `Idle` when a game ends.
/// Game over is the transition itself; it is reported by the tick that
/// causes it rather than held as a resting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    Idle,
    Running,
    Paused,
}

impl SessionState {
    /// Whether the tick source should be running in this state
    pub fn is_ticking(&self) -> bool {
        matches!(self, SessionState::Running)
    }

}

/// Commands the external driver can send to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Move the active piece one row down
    MoveDown,
    /// Start a new game from idle
    Start,
    /// Pause a running game, or resume a paused one
    TogglePause,
    /// Abandon the current game and record its score
    Retry,
}

impl GameAction {
    /// Direction carried by a movement action
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Locked cell with its color tag
pub type Cell = Option<Color>;
