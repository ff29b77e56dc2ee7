//! Accent- and case-insensitive comparison keys
//!
//! Every comparison in the game goes through [`canonicalize`]; the original
//! text is only ever used for display.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold `text` into its canonical comparison key
///
/// The text is compatibility-decomposed (NFKD), combining marks are dropped and
/// the remainder is uppercased. Uppercasing can itself produce combining marks
/// for a handful of code points, so the strip runs a second time to keep the
/// function idempotent.
///
/// # Examples
/// ```
/// use hangman::core::canonicalize;
///
/// assert_eq!(canonicalize("programación"), "PROGRAMACION");
/// assert_eq!(canonicalize("Ecuador"), canonicalize("ECUADOR"));
/// assert_eq!(canonicalize(""), "");
/// ```
#[must_use]
pub fn canonicalize(text: &str) -> String {
    let upper: String = strip_marks(text).flat_map(char::to_uppercase).collect();
    strip_marks(&upper).collect()
}

/// Canonical single letter of `text`
///
/// Returns `None` unless the canonical form is exactly one alphabetic character.
#[must_use]
pub fn canonical_letter(text: &str) -> Option<char> {
    let key = canonicalize(text);
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_alphabetic() => Some(letter),
        _ => None,
    }
}

fn strip_marks(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfkd().filter(|&c| !is_combining_mark(c))
}
