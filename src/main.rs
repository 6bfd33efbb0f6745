//! Terminal memory game runner (default binary).
//!
//! Renders with the framebuffer renderer from `memory_master::term` and drives
//! the core state machine with a fixed tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use memory_master::clock::FrameClock;
use memory_master::config::AppConfig;
use memory_master::core::{GameSnapshot, GameStateMachine};
use memory_master::host::TerminalHost;
use memory_master::input::{handle_key_event, should_quit};
use memory_master::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use memory_master::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let _log_guard = memory_master::logging::init(&config.log_dir)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let seed = config.resolve_seed();
    info!(seed, "seeding sequence source");

    let mut game = GameStateMachine::new(seed);
    let mut host = TerminalHost::new(config.sound);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut fb = FrameBuffer::new(w, h);
    let mut dirty = true;

    let mut clock = FrameClock::new(Duration::from_millis(TICK_MS as u64), Instant::now());

    loop {
        // Render.
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = clock.timeout(Instant::now());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= game.apply_action(action, &mut host);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if let Some(elapsed_ms) = clock.advance(Instant::now()) {
            dirty |= game.tick(elapsed_ms, &mut host);
        }
    }
}
