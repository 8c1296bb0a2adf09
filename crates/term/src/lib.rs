//! Terminal presentation for blockfall.
//!
//! A deliberately thin layer: [`GameView`] turns an engine snapshot into lines
//! of colored text (pure, unit-testable) and [`TerminalRenderer`] writes those
//! lines to a raw-mode terminal. All game rules stay in `core`.

pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use game_view::{status_text, GameView, Line, Span, ViewStatus};
pub use renderer::{encode_lines_into, TerminalRenderer};
