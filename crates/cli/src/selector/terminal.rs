//! Terminal mode ownership for a selector run.

use std::fmt;
use std::io::stdout;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, execute, Command};

use comment_rules_core::error::Result;

/// Clears the whole screen and homes the cursor (`ESC[2J` then `ESC[H`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearScreen;

impl Command for ClearScreen {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[2J\x1b[H")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All).execute_winapi()?;
        cursor::MoveTo(0, 0).execute_winapi()
    }
}

/// Raw mode and a hidden cursor for as long as the guard lives.
///
/// Dropping the guard disables raw mode, shows the cursor and clears the
/// screen, whichever way the run ends.
pub struct TerminalGuard;

impl TerminalGuard {
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the cursor hidden.
    pub fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        // Constructed before hiding the cursor so a failure below still restores raw mode
        let guard = Self;
        execute!(stdout(), cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), cursor::Show, ClearScreen);
    }
}
