//! Simulation - automated play over the lexicon
//!
//! Plays rounds with an autoplay strategy and collects statistics.

use crate::autoplay::{Strategy, play_round};
use crate::core::{Round, RoundConfig, RoundState, SessionStats};
use crate::lexicon::Lexicon;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Which rounds to play
#[derive(Debug, Clone, Default)]
pub struct SimulationConfig {
    /// Play this many random draws instead of every word once
    pub rounds: Option<usize>,
    /// Seed for random draws; generated when absent
    pub seed: Option<u64>,
    /// Show a progress bar
    pub progress: bool,
}

/// Outcome of one simulated round
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub word: String,
    pub won: bool,
    pub wrong_guesses: u32,
    pub moves: usize,
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub strategy: String,
    pub stats: SessionStats,
    /// Won rounds keyed by number of wrong guesses
    pub wrong_distribution: BTreeMap<u32, usize>,
    pub average_wrong_guesses: f64,
    /// Moves per round, won or lost
    pub average_moves: f64,
    pub lost_words: Vec<String>,
    pub duration: Duration,
    /// Seed used for random draws, if any
    pub seed: Option<u64>,
}

/// Play simulated rounds in parallel
///
/// Without `rounds`, every lexicon word is played exactly once.
pub fn run_simulation<S: Strategy + Sync>(
    strategy: &S,
    strategy_name: &str,
    lexicon: &Lexicon,
    round_config: &RoundConfig,
    config: &SimulationConfig,
) -> SimulationResult {
    let (words, seed) = select_words(lexicon, config);
    debug!("simulating {} rounds with {strategy_name}", words.len());

    let pb = if config.progress {
        let pb = ProgressBar::new(words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let records: Vec<RoundRecord> = words
        .par_iter()
        .map(|word| {
            let mut round = Round::new(word, round_config);
            let moves = play_round(strategy, &mut round);
            pb.inc(1);
            RoundRecord {
                word: round.secret().to_string(),
                won: round.state() == RoundState::Won,
                wrong_guesses: round.wrong_guesses(),
                moves,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut result = summarize(strategy_name, &records);
    result.duration = start.elapsed();
    result.seed = seed;
    result
}

fn select_words<'a>(lexicon: &'a Lexicon, config: &SimulationConfig) -> (Vec<&'a str>, Option<u64>) {
    match config.rounds {
        None => (lexicon.words().iter().map(String::as_str).collect(), None),
        Some(count) => {
            let seed = config.seed.unwrap_or_else(|| rand::rng().random());
            let mut rng = StdRng::seed_from_u64(seed);
            let words = (0..count).map(|_| lexicon.choose(&mut rng)).collect();
            (words, Some(seed))
        }
    }
}

/// Aggregate per-round records
#[must_use]
pub fn summarize(strategy_name: &str, records: &[RoundRecord]) -> SimulationResult {
    let mut stats = SessionStats::default();
    let mut wrong_distribution = BTreeMap::new();
    let mut lost_words = Vec::new();
    let mut wrong_total = 0u64;
    let mut moves_total = 0u64;

    for record in records {
        stats.played += 1;
        moves_total += record.moves as u64;
        if record.won {
            stats.won += 1;
            wrong_total += u64::from(record.wrong_guesses);
            *wrong_distribution.entry(record.wrong_guesses).or_insert(0) += 1;
        } else {
            lost_words.push(record.word.clone());
        }
    }

    let average_wrong_guesses = if stats.won > 0 {
        wrong_total as f64 / f64::from(stats.won)
    } else {
        0.0
    };
    let average_moves = if records.is_empty() {
        0.0
    } else {
        moves_total as f64 / records.len() as f64
    };

    SimulationResult {
        strategy: strategy_name.to_string(),
        stats,
        wrong_distribution,
        average_wrong_guesses,
        average_moves,
        lost_words,
        duration: Duration::ZERO,
        seed: None,
    }
}
