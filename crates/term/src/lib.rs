//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the game view draws into a
//! simple framebuffer (pure, testable) and the renderer flushes that
//! framebuffer to a crossterm-managed terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Hud, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
