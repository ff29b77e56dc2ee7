//! Word list loading utilities
//!
//! Reads a lexicon from a UTF-8 file, one word per line.

use super::{Lexicon, LexiconError};
use log::debug;
use std::fs;
use std::path::Path;

/// Load a lexicon from a file
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `LexiconError::Io` if the file cannot be read and
/// `LexiconError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use hangman::lexicon::loader::load_from_file;
///
/// let lexicon = load_from_file("data/lexicon.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let lexicon = parse_words(&content)?;
    debug!("loaded {} words from {}", lexicon.len(), path.display());
    Ok(lexicon)
}

/// Parse word-list text into a lexicon
///
/// # Errors
///
/// Returns `LexiconError::Empty` if no word remains after filtering.
pub fn parse_words(content: &str) -> Result<Lexicon, LexiconError> {
    Lexicon::new(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#')),
    )
}
