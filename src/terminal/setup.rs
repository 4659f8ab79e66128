//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen and enable bracketed paste.
///
/// Raw mode is enabled separately by the caller.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)
}

/// Undo [`enter_tui_mode`] and raw mode, ignoring every error.
///
/// Safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen);
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}

/// Best-effort restore of stdout, used from the panic hook.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
