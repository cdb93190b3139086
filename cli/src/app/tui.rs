//! TUI (Terminal User Interface) runtime loop.
//!
//! Terminal setup, the tick/event loop, and teardown. Sensor polling and
//! user input are serviced on this one thread, so recording and export
//! never interleave.

use std::io;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::debug;

use crate::config::UserConfig;
use crate::input;
use crate::ui;

use super::App;

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Entry point for running the TUI application.
pub fn run_tui(user_config: UserConfig) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_tui_loop(&mut terminal, user_config);
    restore_terminal(&mut terminal)?;
    result
}

/// The main TUI event loop.
///
/// Samples the battery once per tick interval, redraws when something
/// changed, and maps key presses to actions until the user quits.
fn run_tui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    user_config: UserConfig,
) -> Result<()> {
    let mut app = App::new(user_config);
    let mut needs_redraw = true;
    let mut last_tick = std::time::Instant::now();

    loop {
        let tick_rate = Duration::from_millis(app.tick_ms);
        let elapsed = last_tick.elapsed();

        if elapsed >= tick_rate {
            last_tick = std::time::Instant::now();
            let data_changed = app.tick();
            debug!(
                elapsed_ms = elapsed.as_millis() as u64,
                tick_rate_ms = app.tick_ms,
                data_changed,
                "TUI tick completed"
            );
            needs_redraw = needs_redraw || data_changed;
        }

        if needs_redraw {
            terminal.draw(|frame| ui::render(frame, &app))?;
            needs_redraw = false;
        }

        let poll_timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(poll_timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = input::handle_key(&app, key);
                    if !app.handle_action(action) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
    }

    Ok(())
}
