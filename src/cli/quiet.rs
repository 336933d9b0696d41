//! Process-wide quiet flag, set once from `-q/--quiet`.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// A question may only be asked when not quiet and a person is at stdin.
pub fn can_prompt() -> bool {
    !enabled() && stdin_is_tty()
}

#[cfg(unix)]
fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) != 0 }
}

#[cfg(not(unix))]
fn stdin_is_tty() -> bool {
    use std::io::IsTerminal;
    std::io::stdin().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_blocks_prompts() {
        set(true);
        assert!(enabled());
        assert!(!can_prompt());
        set(false);
        assert!(!enabled());
    }
}
