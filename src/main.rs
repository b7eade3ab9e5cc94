//! main.rs
//! Entry point for perch

use perch_tui::app::AppState;
use perch_tui::config::Config;
use perch_tui::core::terminal;

fn main() -> std::io::Result<()> {
    // a panicking frame must not leave the terminal in raw mode
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[perch] fatal: {info}");

        #[cfg(debug_assertions)]
        eprintln!(
            "\nbacktrace:\n{}",
            std::backtrace::Backtrace::force_capture()
        );
    }));

    let config = Config::load();
    let mut app = AppState::new(&config)?;
    terminal::run_terminal(&mut app)
}
