//! Secret word lists
//!
//! A [`Lexicon`] is the read-only pool a round draws its secret from. The
//! default one is compiled into the binary; [`loader`] reads custom lists.

mod embedded;
pub mod loader;

pub use embedded::{LEXICON, LEXICON_COUNT};

use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io;

/// Error type for building a lexicon
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("word list contains no words")]
    Empty,
    #[error("cannot read word list: {0}")]
    Io(#[from] io::Error),
}

/// Ordered, non-empty list of candidate secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from words, trimming each and skipping blanks
    ///
    /// # Errors
    /// Returns `LexiconError::Empty` if no word remains.
    pub fn new<I, S>(words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(Self { words })
    }

    /// The lexicon compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            words: LEXICON.iter().map(|&w| w.to_string()).collect(),
        }
    }

    /// Pick one word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // `words` is never empty, so `choose` always yields a word
        self.words.choose(rng).map_or("", String::as_str)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn lexicon_count_matches_const() {
        assert_eq!(LEXICON.len(), LEXICON_COUNT);
    }

    #[test]
    fn embedded_words_are_alphabetic() {
        for &word in LEXICON {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(char::is_alphabetic),
                "Word '{word}' contains non-letters"
            );
        }
    }

    #[test]
    fn embedded_keeps_accents() {
        let lexicon = Lexicon::embedded();
        assert_eq!(lexicon.len(), LEXICON_COUNT);
        assert!(lexicon.words().iter().any(|w| w == "programación"));
        assert!(lexicon.words().iter().any(|w| w == "función"));
    }

    #[test]
    fn new_trims_and_skips_blanks() {
        let lexicon = Lexicon::new([" python ", "", "  ", "docker"]).unwrap();
        assert_eq!(lexicon.words(), ["python", "docker"]);
    }

    #[test]
    fn new_rejects_empty() {
        let empty: [&str; 0] = [];
        assert!(matches!(Lexicon::new(empty), Err(LexiconError::Empty)));
        assert!(matches!(Lexicon::new(["", " "]), Err(LexiconError::Empty)));
    }

    #[test]
    fn choose_covers_all_words() {
        let lexicon = Lexicon::new(["uno", "dos", "tres"]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<&str> = (0..200).map(|_| lexicon.choose(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }
}
