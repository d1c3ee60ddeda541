//! Terminal setup and teardown functions.
//!
//! Low-level helpers used by `TerminalManager` and the panic hook.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode: alternate screen, mouse capture for the refresh controls
/// and the scroll wheel, hidden cursor.
///
/// # Errors
///
/// Returns an error if any terminal command fails.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture, Hide)
}

/// Leave TUI mode and restore the terminal.
///
/// Safe to call more than once; errors are ignored so this never panics.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore the terminal after a panic.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
