mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use clap::Parser;

pub use context::Context;
pub use flags::{Cli, Command, PaletteArgs, PasswordArgs, Screen};

/// Parse arguments and dispatch. Errors are reported here.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match Context::new(cli).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
