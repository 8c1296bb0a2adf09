//! Terminal blockfall runner (default binary).
//!
//! The engine never sees the terminal or the clock: this loop owns both. It
//! measures wall-clock time, hands it to a `TickDriver` (which runs due ticks
//! and follows speed changes), and forwards key presses.
//!
//! Environment:
//! - `BLOCKFALL_SEED`: fixed seed for a reproducible piece sequence
//! - `BLOCKFALL_PLAYER`: name recorded for finished games
//! - `RUST_LOG`: log filter, `warn` by default (logs go to stderr; redirect with `2>blockfall.log`)

use std::env;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use blockfall::core::{GameSession, RandSource, TickDriver};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, ViewStatus};

/// Input poll timeout while no timer is running.
const IDLE_POLL_MS: u32 = 250;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut driver = TickDriver::new(GameSession::with_source(piece_source()?));
    if let Ok(name) = env::var("BLOCKFALL_PLAYER") {
        driver.set_player_name(&name);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut driver);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {}", e);
    }
    result?;

    let history = driver.session().history();
    if !history.is_empty() {
        println!("{}", serde_json::to_string_pretty(history)?);
    }
    Ok(())
}

fn piece_source() -> Result<RandSource> {
    match env::var("BLOCKFALL_SEED") {
        Ok(raw) => {
            let seed = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("BLOCKFALL_SEED must be an integer, got {:?}", raw))?;
            info!("using fixed seed {}", seed);
            Ok(RandSource::seeded(seed))
        }
        Err(_) => Ok(RandSource::from_os_rng()),
    }
}

fn run(term: &mut TerminalRenderer, driver: &mut TickDriver<RandSource>) -> Result<()> {
    let view = GameView::default();
    let mut last = Instant::now();

    loop {
        // Render.
        let session = driver.session();
        let status = ViewStatus {
            history: session.history(),
            player: session.player_name(),
            game_over: driver.game_over(),
        };
        term.draw(&view.render(&session.snapshot(), &status))?;

        // Input with timeout until next tick.
        let timeout = driver.next_tick_in().unwrap_or(IDLE_POLL_MS);
        let input = if event::poll(Duration::from_millis(timeout as u64))? {
            Some(event::read()?)
        } else {
            None
        };

        // The wait belongs to the state before the key press.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);
        driver.elapse(elapsed_ms);

        if let Some(Event::Key(key)) = input {
            if key.kind == KeyEventKind::Press {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    driver.apply(action);
                }
            }
        }
    }
}
