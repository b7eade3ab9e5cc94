//! Terminal lifecycle and the main event loop for perch.
//!
//! Owns raw mode and the alternate screen, and runs the frame cycle:
//! drain the pending message, draw, block on the next input event.

use crate::app::{AppState, KeypressResult};
use crate::ui;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;

/// Initializes the terminal in raw mode and alternate screen and runs the
/// main event loop.
///
/// Blocks until quit. The terminal is restored even when the loop returns
/// an error; abnormal exits are additionally covered by the panic hook
/// installed in `main`.
pub fn run_terminal(app: &mut AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop of perch.
///
/// Each frame: drain the pending message, draw, then block for exactly
/// one input event. A resize event falls through to the next draw, which
/// recomputes all geometry from the new frame area.
fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    while app.is_running() {
        app.apply_pending();

        terminal.draw(|f| ui::render(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let KeypressResult::Quit = app.handle_keypress(key) {
                    app.stop();
                }
            }
            Event::Resize(_, _) => {}
            _ => {}
        }
    }
    Ok(())
}
