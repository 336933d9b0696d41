use clap::{Args, Parser, Subcommand, ValueEnum};

use passpal::palette::PALETTE_SIZE;

#[derive(Debug, Parser)]
#[command(
    name = "passpal",
    version,
    about = "Random color palettes and passwords with a strength meter",
    long_about = "Random color palettes and passwords with a strength meter.\n\n\
                  Run without a subcommand to open the interactive password generator."
)]
pub struct Cli {
    /// Suppress warnings and confirmations, print only results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use the operating system RNG instead of the hardware counter mix
    #[arg(short, long, global = true)]
    pub urandom: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate one or more passwords
    Password(PasswordArgs),
    /// Print a random color palette
    Palette(PaletteArgs),
    /// Open an interactive screen
    Tui {
        #[arg(value_enum, default_value_t = Screen::Password)]
        screen: Screen,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    Password,
    Palette,
}

#[derive(Debug, Default, Args)]
pub struct PasswordArgs {
    /// Characters per password (saved preference or 12 if omitted)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    pub no_lowercase: bool,

    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    pub no_uppercase: bool,

    /// Leave out numbers (0-9)
    #[arg(long)]
    pub no_numbers: bool,

    /// Include symbols (!@#$%^&*...)
    #[arg(long, conflicts_with = "no_symbols")]
    pub symbols: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Guarantee at least one character from every enabled class
    #[arg(long)]
    pub balanced: bool,

    /// Show the strength score and label next to each password
    #[arg(long)]
    pub strength: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Start from the saved preferences instead of the defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Save the resulting length and character classes as preferences
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// Number of colors
    #[arg(short, long, default_value_t = PALETTE_SIZE)]
    pub number: usize,

    /// Print bare color codes without swatches
    #[arg(long)]
    pub plain: bool,

    /// Copy the codes to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["passpal"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn password_flags() {
        let cli = Cli::try_parse_from([
            "passpal", "password", "-l", "20", "-n", "3", "--symbols", "--no-numbers", "-q",
        ])
        .unwrap();
        assert!(cli.quiet);
        let Some(Command::Password(args)) = cli.command else {
            panic!("expected password command");
        };
        assert_eq!(args.length, Some(20));
        assert_eq!(args.number, 3);
        assert!(args.symbols && args.no_numbers);
        assert!(!args.no_lowercase && !args.no_uppercase && !args.no_symbols);
    }

    #[test]
    fn symbols_conflict() {
        assert!(Cli::try_parse_from(["passpal", "password", "--symbols", "--no-symbols"]).is_err());
    }

    #[test]
    fn palette_defaults_to_five() {
        let cli = Cli::try_parse_from(["passpal", "palette"]).unwrap();
        let Some(Command::Palette(args)) = cli.command else {
            panic!("expected palette command");
        };
        assert_eq!(args.number, PALETTE_SIZE);
        assert!(!args.plain);
    }

    #[test]
    fn tui_screen() {
        let cli = Cli::try_parse_from(["passpal", "tui", "palette"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Tui {
                screen: Screen::Palette
            })
        ));
    }
}
