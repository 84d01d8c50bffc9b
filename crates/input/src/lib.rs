//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameCommand`] values.
//! Each key press is one discrete command; there is no auto-repeat
//! handling beyond what the terminal delivers.

pub mod map;

pub use gridfall_types as types;

pub use map::{handle_key_event, should_quit};
