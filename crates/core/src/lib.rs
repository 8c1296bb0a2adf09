//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the whole game-state engine: the grid, the piece catalog, the
//! falling piece and its validator, and the session that drives them. It has
//! no dependencies on terminals, timers or I/O:
//!
//! - **Deterministic**: a seeded or scripted [`PieceSource`] replays the same game
//! - **Synchronous**: every operation runs to completion on the caller's thread
//! - **Driver-agnostic**: the caller owns the timer and the input device
//!
//! # Module Structure
//!
//! - [`board`]: 12x24 grid of locked cells
//! - [`pieces`]: shape offsets and colors
//! - [`active`]: the falling piece and the movement validator
//! - [`session`]: lifecycle, ticks, locking, scoring, game over
//! - [`scoring`]: score per piece and the speed ramp
//! - [`clock`]: elapsed-time to tick conversion for drivers
//! - [`driver`]: a session and its clock kept in step
//! - [`rng`]: piece sources
//! - [`history`]: finished games of this process
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Game Rules
//!
//! - A new piece spawns 3 rows above the grid on the tick after the previous one settles
//! - Each spawned piece scores 1 point; every 10 points the tick interval drops by 100ms
//! - Pieces only translate (left, right, down); there is no rotation and no line clear
//! - A piece that cannot fall locks if it is fully on the grid, otherwise the game ends
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameSession, TickOutcome};
//! use blockfall_types::{Direction, SessionState};
//!
//! let mut session = GameSession::new(12345);
//! assert_eq!(session.start(), SessionState::Running);
//!
//! // The first tick spawns a piece above the grid.
//! assert!(matches!(session.on_tick(), TickOutcome::Spawned { score: 1, .. }));
//!
//! // Gravity and player moves share one validator.
//! assert!(matches!(session.on_tick(), TickOutcome::Moved(_)));
//! session.handle_direction(Direction::Right);
//!
//! assert_eq!(session.retry(), SessionState::Idle);
//! assert_eq!(session.history().len(), 1);
//! ```

pub mod active;
pub mod board;
pub mod clock;
pub mod driver;
pub mod history;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use active::{ActivePiece, MoveDelta};
pub use board::Board;
pub use clock::TickClock;
pub use driver::TickDriver;
pub use history::{GameRecord, ScoreHistory};
pub use pieces::{get_shape, shape_color, ShapeDef, CATALOG};
pub use rng::{PieceSource, RandSource, ScriptedSource, SimpleRng};
pub use scoring::{speed_ramp, SpeedRamp};
pub use session::{GameSession, TickOutcome};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
