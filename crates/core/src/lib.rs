//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains all game rules and state management and has zero
//! dependencies on UI or I/O:
//!
//! - [`board`]: 10x20 grid with collision testing, merge, and line clearing
//! - [`pieces`]: tetromino shape matrices and transpose-reverse rotation
//! - [`game_state`]: active-piece state machine, gravity timing, kick search
//! - [`rng`]: deterministic LCG with uniform piece selection
//! - [`scoring`]: geometric per-pass line-clear scoring
//!
//! The same seed replays the same piece sequence, so every rule here is
//! covered by plain unit tests.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use gridfall_types as types;

pub use board::Board;
pub use game_state::{GameState, Player, PlayerName};
pub use pieces::Shape;
pub use rng::SimpleRng;
pub use scoring::line_clear_score;
