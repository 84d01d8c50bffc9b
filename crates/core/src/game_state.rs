//! Game state module - the active-piece state machine.
//!
//! Ties together board, pieces, RNG, and scoring: spawn, gravity timing,
//! movement, rotation with kick correction, merge-on-landing, line
//! clears, and the game-over reset cycle. All operations are total over
//! valid states; illegal moves are silently reverted, never reported.

use std::fmt;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::Shape;
use crate::rng::SimpleRng;
use crate::scoring::line_clear_score;
use crate::types::{GameCommand, GameEvent, BOARD_WIDTH, DROP_INTERVAL_MS};

/// Validated player name: non-empty after trimming surrounding whitespace.
///
/// Set once at session start and used only in the game-over announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    /// Parse a raw input line. Returns `None` for empty or
    /// whitespace-only input, in which case no game state should be
    /// created and the caller re-prompts.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The active falling piece: shape matrix plus board position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

const EVENT_QUEUE_CAP: usize = 8;

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    player: Option<Player>,
    name: PlayerName,
    rng: SimpleRng,
    score: u32,
    drop_timer_ms: u32,
    started: bool,
    events: ArrayVec<GameEvent, EVENT_QUEUE_CAP>,
}

impl GameState {
    /// Create a new session for `name` with the given RNG seed.
    pub fn new(name: PlayerName, seed: u32) -> Self {
        Self {
            board: Board::new(),
            player: None,
            name,
            rng: SimpleRng::new(seed),
            score: 0,
            drop_timer_ms: 0,
            started: false,
            events: ArrayVec::new(),
        }
    }

    /// Start the session and spawn the first piece.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player_name(&self) -> &PlayerName {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, for scenario setup in tests and tools.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Direct active-piece access, for scenario setup in tests and tools.
    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    /// Drain pending notifications in emission order.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_QUEUE_CAP> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        // The loop drains every frame; if it ever falls behind, shed the
        // oldest notification rather than panic.
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    fn next_player(&mut self) -> Player {
        let shape = Shape::canonical(self.rng.next_piece());
        let x = BOARD_WIDTH as i8 / 2 - shape.width() as i8 / 2;
        Player { shape, x, y: 0 }
    }

    /// Spawn a fresh piece at the centered top position.
    ///
    /// A collision at the spawn position is the game-over signal: the
    /// session is announced, board and score reset, and a new piece
    /// spawned on the empty board.
    fn spawn(&mut self) {
        let piece = self.next_player();
        if self.board.collides(&piece.shape, piece.x, piece.y) {
            self.push_event(GameEvent::GameOver { score: self.score });
            self.board.clear();
            self.score = 0;
            self.push_event(GameEvent::ScoreChanged(0));
            let piece = self.next_player();
            self.player = Some(piece);
        } else {
            self.player = Some(piece);
        }
    }

    /// Advance timers by `elapsed_ms`; drop one row when the fall timer
    /// passes the fixed interval.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.started {
            return;
        }
        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms > DROP_INTERVAL_MS {
            self.drop_step();
        }
    }

    /// Apply an input command.
    pub fn apply(&mut self, command: GameCommand) {
        if !self.started {
            return;
        }
        match command {
            GameCommand::MoveLeft => self.move_horizontal(-1),
            GameCommand::MoveRight => self.move_horizontal(1),
            GameCommand::SoftDrop => self.drop_step(),
            GameCommand::Rotate => self.rotate(),
        }
    }

    /// Shift the active piece by `dx`, reverting on collision. Leaves the
    /// fall timer untouched.
    pub fn move_horizontal(&mut self, dx: i8) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.x += dx;
        if self.board.collides(&player.shape, player.x, player.y) {
            player.x -= dx;
        }
    }

    /// The drop transition: advance one row, or lock on contact.
    ///
    /// Resets the fall timer regardless of outcome, so a manual drop also
    /// postpones the next gravity step.
    pub fn drop_step(&mut self) {
        self.drop_timer_ms = 0;
        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.y += 1;
        if !self.board.collides(&player.shape, player.x, player.y) {
            return;
        }
        player.y -= 1;
        self.lock_and_respawn();
    }

    /// Merge the landed piece, clear full rows, and spawn the next piece.
    fn lock_and_respawn(&mut self) {
        let Some(player) = self.player.take() else {
            return;
        };
        self.board.merge(&player.shape, player.x, player.y);

        let cleared = self.board.clear_full_rows();
        let delta = line_clear_score(cleared.len());
        if delta > 0 {
            self.score += delta;
            self.push_event(GameEvent::ScoreChanged(self.score));
        }

        self.spawn();
    }

    /// Rotate the active piece clockwise with the oscillating kick search.
    ///
    /// After rotating, collisions are resolved by shifting x by +1, -2,
    /// +3, -4, ... (alternating sides, growing magnitude). If the shift
    /// magnitude ever exceeds the rotated shape's row width the rotation
    /// aborts: original orientation and x are restored and nothing is
    /// applied. This deliberately matches the heuristic search, not a
    /// standard kick table.
    pub fn rotate(&mut self) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let original_shape = player.shape.clone();
        let original_x = player.x;

        player.shape = original_shape.rotated();
        let mut offset: i8 = 1;
        while self.board.collides(&player.shape, player.x, player.y) {
            player.x += offset;
            offset = -(offset + offset.signum());
            if offset.unsigned_abs() as usize > player.shape.width() {
                player.shape = original_shape;
                player.x = original_x;
                return;
            }
        }
    }
}
