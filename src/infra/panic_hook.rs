use std::{io, panic};

use crossterm::{execute, terminal::LeaveAlternateScreen};

/// Puts the terminal back into cooked mode before the panic message prints,
/// so a crash inside the TUI does not leave the shell in raw mode.
pub fn install_terminal_restoring_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        let location = panic_info
            .location()
            .map(|location| format!("{}:{}", location.file(), location.line()))
            .unwrap_or_else(|| "unknown location".to_owned());
        tracing::error!(code = "WELEARN_PANIC", %location, "welearn panicked");

        previous(panic_info);
    }));
}
