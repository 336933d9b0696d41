use std::process::ExitCode;

mod cli;
mod exits;
mod terminal;
mod tui;

fn main() -> ExitCode {
    exits::install();
    exits::harden();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    cli::run()
}
