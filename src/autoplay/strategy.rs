//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{Round, canonical_letter};
use crate::lexicon::Lexicon;
use rustc_hash::FxHashMap;
use unicode_normalization::UnicodeNormalization;

/// Spanish letter frequency order, accents folded
const FREQUENCY_ORDER: &str = "EAOSRNIDLCTUMPBGVYQHFZJXKW";

/// A single move against a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Letter(char),
    Word(String),
}

/// A strategy for picking the next move in a round
pub trait Strategy {
    /// Select the next move given the visible state of `round`
    ///
    /// Returns `None` when the strategy has nothing left to try.
    fn next_move(&self, round: &Round) -> Option<Move>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Lexicon-aware candidate filtering (default)
    Candidate(CandidateStrategy),
    /// Fixed letter-frequency order
    Frequency(FrequencyStrategy),
}

impl Strategy for StrategyType {
    fn next_move(&self, round: &Round) -> Option<Move> {
        match self {
            Self::Candidate(s) => s.next_move(round),
            Self::Frequency(s) => s.next_move(round),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "candidate", "frequency". Defaults to candidate if
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, lexicon: &Lexicon) -> Self {
        match name {
            "frequency" | "freq" => Self::Frequency(FrequencyStrategy),
            _ => Self::Candidate(CandidateStrategy::new(lexicon)),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Candidate(_) => "candidate",
            Self::Frequency(_) => "frequency",
        }
    }
}

/// Letter-frequency strategy
///
/// Tries letters from most to least common, never guessing a word.
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn next_move(&self, round: &Round) -> Option<Move> {
        FREQUENCY_ORDER
            .chars()
            .find(|&letter| !round.has_used(letter))
            .map(Move::Letter)
    }
}

/// Candidate-filtering strategy
///
/// Keeps the lexicon words consistent with the mask and the letters tried so
/// far. With one candidate left it guesses the word; otherwise it tries the
/// unused letter found in the most candidates. Falls back to letter frequency
/// when no lexicon word fits.
pub struct CandidateStrategy {
    words: Vec<(String, Vec<char>)>,
}

impl CandidateStrategy {
    #[must_use]
    pub fn new(lexicon: &Lexicon) -> Self {
        let words = lexicon
            .words()
            .iter()
            .map(|word| {
                let composed: String = word.nfc().collect();
                let folded = composed.chars().map(fold).collect();
                (composed, folded)
            })
            .collect();
        Self { words }
    }

    /// Lexicon words that could still be the secret
    pub fn candidates<'a>(&'a self, round: &'a Round) -> impl Iterator<Item = &'a (String, Vec<char>)> {
        let revealed = round.revealed();
        self.words.iter().filter(move |(_, folded)| {
            folded.len() == revealed.len()
                && folded.iter().zip(revealed).all(|(&f, slot)| match slot {
                    Some(shown) => fold(*shown) == f,
                    // A used letter at a hidden position would have been revealed
                    None => f.is_alphabetic() && !round.has_used(f),
                })
        })
    }
}

impl Strategy for CandidateStrategy {
    fn next_move(&self, round: &Round) -> Option<Move> {
        let candidates: Vec<_> = self.candidates(round).collect();

        match candidates.as_slice() {
            [] => FrequencyStrategy.next_move(round),
            [(word, _)] => Some(Move::Word(word.clone())),
            _ => {
                let mut counts: FxHashMap<char, usize> = FxHashMap::default();
                for (_, folded) in &candidates {
                    let mut letters: Vec<char> = folded
                        .iter()
                        .zip(round.revealed())
                        .filter(|(_, slot)| slot.is_none())
                        .map(|(&f, _)| f)
                        .collect();
                    letters.sort_unstable();
                    letters.dedup();
                    for letter in letters {
                        *counts.entry(letter).or_insert(0) += 1;
                    }
                }

                // Highest count wins; ties go to the earlier letter
                counts
                    .into_iter()
                    .max_by(|(a, ca), (b, cb)| ca.cmp(cb).then(b.cmp(a)))
                    .map(|(letter, _)| Move::Letter(letter))
                    .or_else(|| FrequencyStrategy.next_move(round))
            }
        }
    }
}

/// Canonical letter of a single character, or the character itself
fn fold(ch: char) -> char {
    canonical_letter(ch.encode_utf8(&mut [0; 4])).unwrap_or(ch)
}
