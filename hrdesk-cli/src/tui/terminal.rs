//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context as _, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hrdesk_core::LiveClock;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use super::app::App;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;
use crate::commands::Context;

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the TUI. Must be called from inside the tokio runtime: the clock and
/// sign-in tasks are spawned onto it.
pub fn run(ctx: &Context) -> Result<()> {
    let mut app = App::new(ctx);
    let mut clock = LiveClock::start(ctx.config.tick());

    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, &mut app, &clock);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;
    clock.stop();
    info!("tui closed");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    clock: &LiveClock,
) -> Result<()> {
    loop {
        app.clock = Some(clock.reading());
        app.poll_login();

        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events (with 100ms timeout so the clock keeps moving)
        if let Some(Event::Key(key)) = poll_event(Duration::from_millis(100))? {
            if handle_key(app, key) == HandleResult::Quit {
                break;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
