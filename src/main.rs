//! Terminal snake runner (default binary).
//!
//! Wires the terminal renderer, keyboard input, wall clock and file-backed
//! high-score store around a fresh game session. The terminal is always
//! restored on the way out, and deferred diagnostics are printed only after
//! the alternate screen has been left.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use tui_snake::core::{GameConfig, GameSession};
use tui_snake::input::TerminalInput;
use tui_snake::runtime::{Runtime, TickClock};
use tui_snake::store::FileHighScoreStore;
use tui_snake::term::TerminalRenderer;

const HIGH_SCORE_FILE: &str = "high_score.txt";

fn main() -> Result<()> {
    let config = GameConfig {
        seed: wall_clock_seed(),
        ..GameConfig::default()
    };

    let store = FileHighScoreStore::new(HIGH_SCORE_FILE);
    let session =
        GameSession::new(config, Box::new(store)).context("invalid game configuration")?;

    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;

    let result = Runtime::new(&mut renderer, TerminalInput::new(), TickClock::new()).run(session);

    // Always try to restore terminal state.
    let _ = renderer.exit();

    let mut final_session = result?;
    if let Some(warning) = final_session.take_persist_error() {
        eprintln!("warning: could not save high score: {warning}");
    }

    Ok(())
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
