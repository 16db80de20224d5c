//! Terminal gridfall runner (default binary).
//!
//! Drives the engine as a single-threaded cooperative scheduler: one key
//! event or one descent tick is processed at a time, each to completion.
//! The descent period is re-derived from the level after every step, so
//! speed-ups take effect immediately; pausing or game over simply stops
//! consulting the timer, and resuming restarts it at the current period.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::GameState;
use gridfall::input::{handle_key_event, should_quit};
use gridfall::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn drop_period(game: &GameState) -> Duration {
    Duration::from_millis(game.drop_interval_ms() as u64)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(time_seed());
    game.start();

    let view = GameView::default();
    let mut next_drop = Instant::now() + drop_period(&game);

    loop {
        let snapshot = game.snapshot();
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // While suspended the descent timer is not consulted; poll slowly.
        let timeout = if snapshot.playable() {
            next_drop.saturating_duration_since(Instant::now())
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let was_suspended = game.paused() || game.game_over();
                        game.apply_action(action);

                        // Resuming play recreates the timer at the
                        // then-current period.
                        if was_suspended && !game.paused() && !game.game_over() {
                            next_drop = Instant::now() + drop_period(&game);
                        }
                    }
                }
            }
        }

        if !game.paused() && !game.game_over() && Instant::now() >= next_drop {
            game.tick();
            next_drop = Instant::now() + drop_period(&game);
        }
    }
}
