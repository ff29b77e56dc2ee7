//! Hangman - CLI
//!
//! Terminal hangman with TUI and console modes, plus an autoplay simulator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    autoplay::StrategyType,
    commands::{SimulationConfig, run_simple, run_simulation},
    core::{DEFAULT_ATTEMPTS, DEFAULT_PLACEHOLDER, MAX_ATTEMPTS, RoundConfig},
    lexicon::{Lexicon, loader::load_from_file},
    output::{print_session_summary, print_simulation_result},
};
use log::{LevelFilter, debug};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word letter by letter before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Wrong guesses allowed before the final, losing one
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_ATTEMPTS))
    )]
    attempts: u32,

    /// Character shown for hidden letters
    #[arg(long, global = true, default_value_t = DEFAULT_PLACEHOLDER)]
    placeholder: char,

    /// Player name shown in banners
    #[arg(short, long, global = true)]
    player: Option<String>,

    /// Enable debug messages
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line-based, no TUI)
    Simple,

    /// Let a strategy play rounds and report statistics
    Simulate {
        /// Strategy: candidate (default), frequency
        #[arg(short, long, default_value = "candidate")]
        strategy: String,

        /// Number of random rounds (default: every word once)
        #[arg(short = 'n', long)]
        rounds: Option<usize>,

        /// Seed for random rounds
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the lexicon from a file, or fall back to the embedded list
fn load_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load word list {}", path.display())),
        None => Ok(Lexicon::embedded()),
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let lexicon = load_lexicon(cli.wordlist.as_deref())?;
    debug!("lexicon ready: {} words", lexicon.len());

    let mut config = RoundConfig::new(cli.placeholder, cli.attempts);
    if let Some(player) = cli.player {
        config = config.with_player(player);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&lexicon, config),
        Commands::Simple => run_simple(&lexicon, &config).map(|_| ()),
        Commands::Simulate {
            strategy,
            rounds,
            seed,
        } => {
            run_simulate_command(&strategy, rounds, seed, &lexicon, &config);
            Ok(())
        }
    }
}

fn run_play_command(lexicon: &Lexicon, config: RoundConfig) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(lexicon, config);
    let stats = run_tui(app)?;
    if stats.played > 0 {
        print_session_summary(&stats);
    }
    Ok(())
}

fn run_simulate_command(
    strategy_name: &str,
    rounds: Option<usize>,
    seed: Option<u64>,
    lexicon: &Lexicon,
    config: &RoundConfig,
) {
    let strategy = StrategyType::from_name(strategy_name, lexicon);
    let simulation = SimulationConfig {
        rounds,
        seed,
        progress: true,
    };

    println!(
        "🎯 Simulating {} rounds with the {} strategy...",
        rounds.unwrap_or(lexicon.len()),
        strategy.name()
    );

    let result = run_simulation(&strategy, strategy.name(), lexicon, config, &simulation);
    print_simulation_result(&result);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_default_and_bounds() {
        let cli = Cli::try_parse_from(["hangman", "simple"]).unwrap();
        assert_eq!(cli.attempts, DEFAULT_ATTEMPTS);

        let cli = Cli::try_parse_from(["hangman", "-a", "26", "simple"]).unwrap();
        assert_eq!(cli.attempts, MAX_ATTEMPTS);

        assert!(Cli::try_parse_from(["hangman", "-a", "0"]).is_err());
        assert!(Cli::try_parse_from(["hangman", "-a", "27"]).is_err());
        assert!(Cli::try_parse_from(["hangman", "-a", "50000000"]).is_err());
    }
}
