//! Terminal gameplay entrypoint.
//!
//! Prompts for a player name on stdin, then runs the fixed-timestep game
//! loop in a crossterm-managed alternate screen.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{GameState, PlayerName};
use gridfall::input::{handle_key_event, should_quit};
use gridfall::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use gridfall::types::{GameEvent, TICK_MS};

fn main() -> Result<()> {
    let name = prompt_player_name()?;
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, GameState::new(name, seed));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Read the player name before entering raw mode. Empty or
/// whitespace-only input re-prompts; no game state exists until a valid
/// name is given.
fn prompt_player_name() -> Result<PlayerName> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("Enter your name: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            anyhow::bail!("no player name given");
        }
        match PlayerName::new(&line) {
            Some(name) => return Ok(name),
            None => println!("A name is required to start."),
        }
    }
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    game.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut score_line = format!("Score : {}", game.score());

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = Hud {
            player_name: game.player_name().as_str(),
            score_line: &score_line,
            banner: None,
        };
        view.render_into(game.board(), game.player(), &hud, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }

        for game_event in game.take_events() {
            match game_event {
                GameEvent::ScoreChanged(score) => {
                    score_line = format!("Score : {}", score);
                }
                GameEvent::GameOver { score } => {
                    announce_game_over(term, &view, &game, score, &score_line, &mut fb)?;
                }
            }
        }
    }
}

/// Show the game-over banner and block until any key acknowledges it.
/// The core has already reset the board and respawned by this point.
fn announce_game_over(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &GameState,
    final_score: u32,
    score_line: &str,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let banner = format!("Game Over, {}! Score: {}", game.player_name(), final_score);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let hud = Hud {
        player_name: game.player_name().as_str(),
        score_line,
        banner: Some(&banner),
    };
    view.render_into(game.board(), game.player(), &hud, Viewport::new(w, h), fb);
    term.draw(fb)?;

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
