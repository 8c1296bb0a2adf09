//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key
//! press is one discrete command; held keys are not repeated here.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
