//! Core types shared across the application.
//!
//! Pure data types with no external dependencies, usable from the game
//! core, input mapping, and terminal rendering alike.

/// Board dimensions in cells.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (~60 FPS).
pub const TICK_MS: u32 = 16;

/// Gravity interval: the active piece drops one row each time the fall
/// timer accumulates past this many milliseconds.
pub const DROP_INTERVAL_MS: u32 = 800;

/// Points awarded for the first row cleared in a pass; each further row
/// in the same pass doubles it (10, 20, 40, 80, ...).
pub const BASE_ROW_SCORE: u32 = 10;

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All seven kinds, in tag order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Numeric cell tag in 1..=7. Tag 0 is the empty cell, so every kind
    /// maps 1:1 onto a nonzero tag.
    pub fn tag(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }
}

/// Cell on the board (`None` = empty, `Some` = filled with piece kind).
pub type Cell = Option<PieceKind>;

/// Input commands, each mapping 1:1 to a core operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// Notifications emitted by the core for the outer loop to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The score counter changed (including the reset to 0 on game over).
    ScoreChanged(u32),
    /// A piece could not spawn; the board and score have been reset and a
    /// fresh piece spawned. `score` is the final score of the ended game.
    GameOver { score: u32 },
}
