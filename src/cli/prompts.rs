//! Messages for the one-shot commands. Everything goes to stderr so stdout
//! carries only generated output.

use std::io::{self, BufRead, Write};
use std::path::Path;

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

/// Yellow warning, hidden by `-q`.
pub fn warn(msg: &str) {
    log::debug!("warning shown: {msg}");
    let _ = write_warning(&mut io::stderr().lock(), msg, quiet::enabled());
}

/// Red error, always shown.
pub fn error(msg: &str) {
    log::debug!("error shown: {msg}");
    let _ = writeln!(io::stderr().lock(), "{RED}{msg}{RESET}");
}

fn write_warning(out: &mut impl Write, msg: &str, quiet: bool) -> io::Result<()> {
    if quiet {
        return Ok(());
    }
    writeln!(out, "{YELLOW}{msg}{RESET}")
}

fn note(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{msg}");
    }
}

pub fn copied(count: usize, noun: &str) {
    let plural = if count == 1 { "" } else { "s" };
    note(&format!("Copied {count} {noun}{plural} to the clipboard"));
}

pub fn saved(path: &Path) {
    note(&format!("Preferences saved \u{2192} {}", path.display()));
}

pub fn clamped(requested: usize, stored: usize) {
    warn(&format!(
        "Length {requested} is outside the saved range, stored {stored} instead"
    ));
}

/// The clipboard failed: ask whether to print to the terminal instead.
/// Without someone to ask, the answer is yes.
pub fn print_instead(err: &str) -> bool {
    if !quiet::can_prompt() {
        return true;
    }
    eprintln!("{RED}{err}{RESET}");
    confirm("Print to terminal instead?", io::stdin().lock())
}

/// `[Y/n]` question answered from `input`. Empty input and read errors
/// count as yes.
fn confirm(question: &str, mut input: impl BufRead) -> bool {
    eprint!("{question} [Y/n]: ");
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return true;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "" | "y" | "yes")
}
