//! Wordle Game - CLI
//!
//! Play Wordle in a TUI or a plain line-based mode, or check a single guess.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{check_guess, run_simple},
    game::{DEFAULT_MAX_ROWS, DEFAULT_SECRET, GameConfig},
    logging::{LogTarget, init_tracing},
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the 5-letter word, with green/yellow/gray feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Secret word for the session
    #[arg(short, long, global = true, default_value = DEFAULT_SECRET)]
    secret: String,

    /// Number of guesses allowed
    #[arg(short = 'r', long, global = true, default_value_t = DEFAULT_MAX_ROWS)]
    max_rows: usize,

    /// Log filter, e.g. 'info' or 'wordle_game=debug'
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to this file (the TUI logs nowhere without it)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the feedback for one guess against the secret
    Check {
        /// The guess to evaluate
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let target = LogTarget::resolve(cli.log_file, command == Commands::Play);
    init_tracing(&cli.log_level, &target)?;

    let config = GameConfig::new(&cli.secret, cli.max_rows)?;

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(&config),
        Commands::Check { guess } => run_check_command(&guess, &config),
    }
}

fn run_check_command(guess: &str, config: &GameConfig) -> Result<()> {
    let result = check_guess(guess, config)?;
    print_check_result(&result);
    Ok(())
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["wordle_game"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.secret, "WORDS");
        assert_eq!(cli.max_rows, 5);
        assert_eq!(cli.log_level, "info");
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn check_with_global_options() {
        let cli = Cli::try_parse_from([
            "wordle_game",
            "check",
            "erase",
            "--secret",
            "speed",
            "-r",
            "6",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Check {
                guess: "erase".to_string()
            })
        );
        assert_eq!(cli.secret, "speed");
        assert_eq!(cli.max_rows, 6);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
