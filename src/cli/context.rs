//! CLI context - bundles parsed flags and the entropy source.

use std::io::{self, Write};

use zeroize::Zeroizing;

use passpal::pass::{self, Mode};
use passpal::rand::Source;
use passpal::settings::{self, Settings};
use passpal::{Error, Result, clipboard, palette};

use super::{Cli, Command, PaletteArgs, PasswordArgs, Screen, prompts, quiet};
use crate::terminal;
use crate::tui;

/// Application context for CLI mode.
pub struct Context {
    command: Option<Command>,
    source: Source,
}

impl Context {
    pub fn new(cli: Cli) -> Self {
        quiet::set(cli.quiet);
        let source = Source::from_urandom_flag(cli.urandom);
        log::debug!("entropy source: {}", source.name());

        Self {
            command: cli.command,
            source,
        }
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            None => tui::run(Screen::Password, self.source),
            Some(Command::Tui { screen }) => tui::run(screen, self.source),
            Some(Command::Password(args)) => passwords(&args, self.source),
            Some(Command::Palette(args)) => colors(&args, self.source),
        }
    }
}

/// Preferences for a one-shot run: saved or default, then flags on top.
pub fn resolve_settings(args: &PasswordArgs, saved: Settings) -> Settings {
    let mut settings = if args.saved { saved } else { Settings::default() };

    if let Some(length) = args.length {
        settings.length = length;
    }
    if args.no_lowercase {
        settings.options.lowercase = false;
    }
    if args.no_uppercase {
        settings.options.uppercase = false;
    }
    if args.no_numbers {
        settings.options.numbers = false;
    }
    if args.symbols {
        settings.options.symbols = true;
    }
    if args.no_symbols {
        settings.options.symbols = false;
    }

    settings
}

fn passwords(args: &PasswordArgs, source: Source) -> Result<()> {
    let saved = if args.saved {
        Settings::load_or_default()
    } else {
        Settings::default()
    };
    let settings = resolve_settings(args, saved);
    let mode = if args.balanced {
        Mode::Balanced
    } else {
        Mode::Independent
    };

    log::debug!(
        "generating {} password(s): length={} options={:?} mode={:?}",
        args.number,
        settings.length,
        settings.options,
        mode
    );

    let mut rng = source.rng();
    let mut passwords = Zeroizing::new(Vec::with_capacity(args.number));
    for _ in 0..args.number {
        passwords.push(pass::generate_with(
            settings.length,
            &settings.options,
            mode,
            rng.as_mut(),
        )?);
    }

    if args.save {
        save_preferences(settings)?;
    }

    if args.clipboard {
        let joined = Zeroizing::new(passwords.join("\n"));
        if !to_clipboard(&joined, passwords.len(), "password")? {
            return Ok(());
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for password in passwords.iter() {
        if args.strength {
            let score = pass::score(password, &settings.options);
            writeln!(
                out,
                "{password}  {score} {}",
                terminal::label(score.descriptor())
            )?;
        } else {
            writeln!(out, "{password}")?;
        }
    }

    Ok(())
}

fn save_preferences(settings: Settings) -> Result<()> {
    let mut stored = settings;
    stored.set_length(settings.length);
    if stored.length != settings.length {
        prompts::clamped(settings.length, stored.length);
    }

    stored.save_to_file()?;
    prompts::saved(&settings::default_path());
    Ok(())
}

/// Copy `text`. `Ok(true)` means the caller should still print it.
fn to_clipboard(text: &str, count: usize, noun: &str) -> Result<bool> {
    let copied = clipboard::copy(text);
    if copied.is_ok() {
        prompts::copied(count, noun);
    }
    fallback(copied, prompts::print_instead)
}

/// After a copy attempt: done, print instead, or [`Error::Aborted`] when
/// the user turns down printing.
fn fallback(copied: Result<()>, print_instead: impl FnOnce(&str) -> bool) -> Result<bool> {
    match copied {
        Ok(()) => Ok(false),
        Err(e) if print_instead(&e.to_string()) => Ok(true),
        Err(_) => Err(Error::Aborted),
    }
}

fn colors(args: &PaletteArgs, source: Source) -> Result<()> {
    let mut rng = source.rng();
    let colors = palette::generate(rng.as_mut(), args.number);

    if args.clipboard && !to_clipboard(&colors.join("\n"), colors.len(), "color")? {
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for color in &colors {
        if args.plain {
            writeln!(out, "{color}")?;
        } else {
            writeln!(out, "{}", terminal::swatch(color))?;
        }
    }

    Ok(())
}
