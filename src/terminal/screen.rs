//! Raw-mode session for the interactive views.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::style::RESET;

/// Raw mode with a hidden cursor. Dropping the session restores both.
pub struct Session {
    active: bool,
}

impl Session {
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), Hide)?;
        Ok(Self { active: true })
    }

    /// Leave raw mode early. Idempotent.
    pub fn end(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = disable_raw_mode();
        let mut out = io::stdout();
        let _ = execute!(out, Show);
        // wipe the last frame so the shell prompt starts clean
        let _ = write!(out, "{RESET}\x1b[2J\x1b[3J\x1b[H");
        let _ = out.flush();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.end();
    }
}
