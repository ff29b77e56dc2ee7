//! Round engine
//!
//! A [`Round`] owns everything about one play-through: the secret word, the
//! reveal mask, the letters already tried and the attempts left. It is a plain
//! state machine; presentation code asks it for display state and feeds it
//! guesses.

use super::config::RoundConfig;
use super::normalize::{canonical_letter, canonicalize};
use crate::lexicon::Lexicon;
use log::debug;
use rand::Rng;
use rustc_hash::FxHashSet;
use unicode_normalization::UnicodeNormalization;

/// Reasons a guess is rejected
///
/// All of them are recoverable: the round is left exactly as it was and the
/// caller is expected to prompt again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("guess must be a single letter or the whole word")]
    InvalidInput,
    #[error("letter '{0}' was already tried")]
    AlreadyGuessed(char),
    #[error("the round is already over")]
    RoundOver,
}

/// Lifecycle state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

/// State plus the secret word once it may be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus<'a> {
    InProgress,
    Won { secret: &'a str },
    Lost { secret: &'a str },
}

impl RoundStatus<'_> {
    #[must_use]
    pub const fn state(&self) -> RoundState {
        match self {
            Self::InProgress => RoundState::InProgress,
            Self::Won { .. } => RoundState::Won,
            Self::Lost { .. } => RoundState::Lost,
        }
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What an accepted guess did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Letter found; number of positions revealed
    Revealed(usize),
    /// Letter not in the word
    Absent,
    /// Whole-word guess was right
    WordMatched,
    /// Whole-word guess was wrong
    WordMismatched,
}

impl Feedback {
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::WordMatched)
    }
}

/// One round of hangman
#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    secret: String,
    canonical: String,
    /// Canonical letter per position; `None` for positions a letter guess cannot reveal
    keys: Vec<Option<char>>,
    /// Revealed character per position; `None` while hidden
    mask: Vec<Option<char>>,
    used: FxHashSet<char>,
    attempts: u32,
    misses: u32,
    state: RoundState,
}

impl Round {
    /// Start a round on a known secret word
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Round, RoundConfig, RoundState};
    ///
    /// let mut round = Round::new("función", &RoundConfig::default());
    /// assert_eq!(round.display_mask().iter().collect::<String>(), "_______");
    ///
    /// round.guess_letter("o").unwrap();
    /// assert_eq!(round.display_mask().iter().collect::<String>(), "_____ó_");
    ///
    /// round.guess_word("FUNCION").unwrap();
    /// assert_eq!(round.state(), RoundState::Won);
    /// ```
    #[must_use]
    pub fn new(secret: &str, config: &RoundConfig) -> Self {
        // Composed form keeps one mask slot per visible character
        let secret: String = secret.trim().nfc().collect();
        let canonical = canonicalize(&secret);

        let mut keys = Vec::new();
        let mut mask = Vec::new();
        for ch in secret.chars() {
            if ch.is_alphabetic() {
                keys.push(canonical_letter(ch.encode_utf8(&mut [0; 4])));
                mask.push(None);
            } else {
                keys.push(None);
                mask.push(Some(ch));
            }
        }

        debug!(
            "round started: {} positions, {} attempts",
            mask.len(),
            config.starting_attempts
        );

        Self {
            config: config.clone(),
            secret,
            canonical,
            keys,
            mask,
            used: FxHashSet::default(),
            attempts: config.starting_attempts,
            misses: 0,
            state: RoundState::InProgress,
        }
    }

    /// Start a round on a word drawn uniformly at random from `lexicon`
    pub fn random<R: Rng + ?Sized>(lexicon: &Lexicon, config: &RoundConfig, rng: &mut R) -> Self {
        Self::new(lexicon.choose(rng), config)
    }

    /// Guess a single letter
    ///
    /// Reveals every position whose canonical letter matches, keeping the
    /// original (accented) character in the mask.
    ///
    /// # Errors
    /// - `RoundOver` once the round is won or lost
    /// - `InvalidInput` unless `letter` folds to exactly one alphabetic character
    /// - `AlreadyGuessed` if the letter was tried before
    pub fn guess_letter(&mut self, letter: &str) -> Result<Feedback, GuessError> {
        self.ensure_in_progress()?;
        let letter = canonical_letter(letter).ok_or(GuessError::InvalidInput)?;

        if !self.used.insert(letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        let mut revealed = 0;
        for ((slot, key), original) in self
            .mask
            .iter_mut()
            .zip(&self.keys)
            .zip(self.secret.chars())
        {
            if *key == Some(letter) {
                *slot = Some(original);
                revealed += 1;
            }
        }

        if revealed == 0 {
            debug!("letter {letter}: miss");
            self.register_miss();
            return Ok(Feedback::Absent);
        }

        debug!("letter {letter}: {revealed} revealed");
        if self.mask.iter().all(Option::is_some) {
            self.finish(RoundState::Won);
        }
        Ok(Feedback::Revealed(revealed))
    }

    /// Guess the whole word
    ///
    /// # Errors
    /// - `RoundOver` once the round is won or lost
    /// - `InvalidInput` if the candidate folds to fewer than two characters
    pub fn guess_word(&mut self, candidate: &str) -> Result<Feedback, GuessError> {
        self.ensure_in_progress()?;
        let key = canonicalize(candidate.trim());
        if key.chars().nth(1).is_none() {
            return Err(GuessError::InvalidInput);
        }

        if key == self.canonical {
            for (slot, original) in self.mask.iter_mut().zip(self.secret.chars()) {
                *slot = Some(original);
            }
            self.finish(RoundState::Won);
            Ok(Feedback::WordMatched)
        } else {
            debug!("word guess missed");
            self.register_miss();
            Ok(Feedback::WordMismatched)
        }
    }

    /// Route raw player input to [`Self::guess_letter`] or [`Self::guess_word`]
    ///
    /// Input folding to one character is a letter guess, anything longer a
    /// word guess.
    ///
    /// # Errors
    /// Same as the guess it dispatches to; blank input is `InvalidInput`.
    pub fn guess(&mut self, input: &str) -> Result<Feedback, GuessError> {
        let input = input.trim();
        if input.is_empty() {
            self.ensure_in_progress()?;
            return Err(GuessError::InvalidInput);
        }

        if canonicalize(input).chars().nth(1).is_none() {
            self.guess_letter(input)
        } else {
            self.guess_word(input)
        }
    }

    /// Mask as displayed: placeholder for hidden letters, the character otherwise
    #[must_use]
    pub fn display_mask(&self) -> Vec<char> {
        self.mask
            .iter()
            .map(|slot| slot.unwrap_or(self.config.placeholder))
            .collect()
    }

    /// Raw reveal state, one entry per position
    #[must_use]
    pub fn revealed(&self) -> &[Option<char>] {
        &self.mask
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts
    }

    /// Number of wrong guesses made so far, including a final losing one
    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.misses
    }

    /// Letters tried so far, sorted
    #[must_use]
    pub fn used_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.used.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn has_used(&self, letter: char) -> bool {
        self.used.contains(&letter)
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus<'_> {
        match self.state {
            RoundState::InProgress => RoundStatus::InProgress,
            RoundState::Won => RoundStatus::Won {
                secret: &self.secret,
            },
            RoundState::Lost => RoundStatus::Lost {
                secret: &self.secret,
            },
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != RoundState::InProgress
    }

    /// Secret word in its original spelling
    ///
    /// Presentation code should only show this once [`Self::is_over`] holds.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub const fn config(&self) -> &RoundConfig {
        &self.config
    }

    fn ensure_in_progress(&self) -> Result<(), GuessError> {
        if self.is_over() {
            Err(GuessError::RoundOver)
        } else {
            Ok(())
        }
    }

    /// A wrong guess at zero attempts loses; otherwise it costs one attempt
    fn register_miss(&mut self) {
        self.misses += 1;
        if self.attempts == 0 {
            self.finish(RoundState::Lost);
        } else {
            self.attempts -= 1;
        }
    }

    fn finish(&mut self, state: RoundState) {
        debug!("round over: {state:?} after {} wrong guesses", self.misses);
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn round(secret: &str) -> Round {
        Round::new(secret, &RoundConfig::default())
    }

    fn mask(round: &Round) -> String {
        round.display_mask().iter().collect()
    }

    #[test]
    fn new_round_hides_letters() {
        let r = round("CIENCIA");
        assert_eq!(mask(&r), "_______");
        assert_eq!(r.attempts_remaining(), 6);
        assert!(r.used_letters().is_empty());
        assert_eq!(r.status(), RoundStatus::InProgress);
    }

    #[test]
    fn non_alphabetic_positions_are_shown() {
        let r = round("e-mail");
        assert_eq!(mask(&r), "_-____");
        assert_eq!(r.revealed()[1], Some('-'));
    }

    #[test]
    fn custom_placeholder() {
        let r = Round::new("python", &RoundConfig::new('*', 6));
        assert_eq!(mask(&r), "******");
    }

    #[test]
    fn letter_reveals_every_matching_position() {
        let mut r = round("CIENCIA");
        assert_eq!(r.guess_letter("C"), Ok(Feedback::Revealed(2)));
        assert_eq!(mask(&r), "C___C__");

        assert_eq!(r.guess_letter("i"), Ok(Feedback::Revealed(2)));
        assert_eq!(mask(&r), "CI__CI_");
        assert_eq!(r.attempts_remaining(), 6);
    }

    #[test]
    fn accented_position_revealed_by_plain_letter() {
        let mut r = round("FUNCIÓN");
        assert_eq!(r.guess_letter("o"), Ok(Feedback::Revealed(1)));
        assert_eq!(mask(&r), "_____Ó_");
        assert_eq!(r.used_letters(), vec!['O']);
    }

    #[test]
    fn accented_guess_matches_plain_letter() {
        let mut r = round("docker");
        assert_eq!(r.guess_letter("Ó"), Ok(Feedback::Revealed(1)));
        assert_eq!(mask(&r), "_o____");
    }

    #[test]
    fn decomposed_secret_is_composed() {
        let mut r = round("funcio\u{301}n");
        assert_eq!(r.display_mask().len(), 7);
        r.guess_letter("O").unwrap();
        assert_eq!(r.revealed()[5], Some('ó'));
    }

    #[test]
    fn already_guessed_leaves_state_alone() {
        let mut r = round("CIENCIA");
        r.guess_letter("Z").unwrap();
        assert_eq!(r.attempts_remaining(), 5);

        assert_eq!(r.guess_letter("z"), Err(GuessError::AlreadyGuessed('Z')));
        assert_eq!(r.attempts_remaining(), 5);

        r.guess_letter("C").unwrap();
        assert_eq!(r.guess_letter("c"), Err(GuessError::AlreadyGuessed('C')));
        assert_eq!(mask(&r), "C___C__");
    }

    #[test]
    fn invalid_letters_rejected() {
        let mut r = round("CIENCIA");
        for input in ["", "1", "-", "ab", " "] {
            assert_eq!(r.guess_letter(input), Err(GuessError::InvalidInput));
        }
        assert_eq!(r.attempts_remaining(), 6);
        assert!(r.used_letters().is_empty());
    }

    #[test]
    fn wrong_letters_exhaust_attempts_then_lose() {
        let mut r = round("CIENCIA");
        for letter in ["Z", "X", "Q", "W", "K"] {
            assert_eq!(r.guess_letter(letter), Ok(Feedback::Absent));
        }
        assert_eq!(r.attempts_remaining(), 1);
        assert_eq!(r.state(), RoundState::InProgress);

        r.guess_letter("J").unwrap();
        assert_eq!(r.attempts_remaining(), 0);
        assert_eq!(r.state(), RoundState::InProgress);

        r.guess_letter("H").unwrap();
        assert_eq!(r.attempts_remaining(), 0);
        assert_eq!(r.status(), RoundStatus::Lost { secret: "CIENCIA" });
        assert_eq!(r.wrong_guesses(), 7);
    }

    #[test]
    fn hits_do_not_cost_attempts_at_zero() {
        let mut r = Round::new("CIENCIA", &RoundConfig::new('_', 0));
        assert_eq!(r.guess_letter("C"), Ok(Feedback::Revealed(2)));
        assert_eq!(r.state(), RoundState::InProgress);
        r.guess_letter("Z").unwrap();
        assert_eq!(r.state(), RoundState::Lost);
    }

    #[test]
    fn all_distinct_letters_win() {
        let mut r = round("CIENCIA");
        for letter in ["C", "I", "E", "N"] {
            r.guess_letter(letter).unwrap();
            assert_eq!(r.state(), RoundState::InProgress);
        }
        r.guess_letter("A").unwrap();
        assert_eq!(r.status(), RoundStatus::Won { secret: "CIENCIA" });
        assert_eq!(mask(&r), "CIENCIA");
    }

    #[test]
    fn word_with_hyphen_wins_by_letters() {
        let mut r = round("e-mail");
        for letter in ["e", "m", "a", "i", "l"] {
            r.guess_letter(letter).unwrap();
        }
        assert_eq!(r.state(), RoundState::Won);
        assert_eq!(mask(&r), "e-mail");
    }

    #[test]
    fn word_guess_ignores_case_and_accents() {
        let mut r = round("DATOS");
        assert_eq!(r.guess_word("datos"), Ok(Feedback::WordMatched));
        assert_eq!(r.status(), RoundStatus::Won { secret: "DATOS" });
        assert_eq!(mask(&r), "DATOS");
    }

    #[test]
    fn word_guess_reveals_original_spelling() {
        let mut r = round("depuración");
        r.guess_word("DEPURACION").unwrap();
        assert_eq!(mask(&r), "depuración");
        assert!(r.used_letters().is_empty());
    }

    #[test]
    fn word_guess_wins_after_misses() {
        let mut r = round("python");
        r.guess_letter("z").unwrap();
        r.guess_word("java").unwrap();
        assert_eq!(r.attempts_remaining(), 4);
        assert_eq!(r.guess_word("Python"), Ok(Feedback::WordMatched));
        assert_eq!(r.state(), RoundState::Won);
    }

    #[test]
    fn wrong_word_costs_one_attempt() {
        let mut r = round("python");
        assert_eq!(r.guess_word("rust"), Ok(Feedback::WordMismatched));
        assert_eq!(r.attempts_remaining(), 5);
        assert!(r.used_letters().is_empty());
    }

    #[test]
    fn wrong_word_at_zero_loses() {
        let mut r = Round::new("python", &RoundConfig::new('_', 1));
        r.guess_word("rust").unwrap();
        assert_eq!(r.attempts_remaining(), 0);
        assert_eq!(r.state(), RoundState::InProgress);
        r.guess_word("ruby").unwrap();
        assert_eq!(r.state(), RoundState::Lost);
    }

    #[test]
    fn single_character_word_guess_rejected() {
        let mut r = round("python");
        assert_eq!(r.guess_word("p"), Err(GuessError::InvalidInput));
        assert_eq!(r.guess_word(""), Err(GuessError::InvalidInput));
        assert_eq!(r.attempts_remaining(), 6);
    }

    #[test]
    fn terminal_states_reject_guesses() {
        let mut r = round("DATOS");
        r.guess_word("datos").unwrap();
        assert_eq!(r.guess_letter("z"), Err(GuessError::RoundOver));
        assert_eq!(r.guess_word("otro"), Err(GuessError::RoundOver));
        assert_eq!(r.guess(""), Err(GuessError::RoundOver));
        assert_eq!(r.attempts_remaining(), 6);
        assert_eq!(r.state(), RoundState::Won);

        let mut lost = Round::new("DATOS", &RoundConfig::new('_', 0));
        lost.guess_letter("z").unwrap();
        let before = lost.display_mask();
        assert_eq!(lost.guess_word("datos"), Err(GuessError::RoundOver));
        assert_eq!(lost.display_mask(), before);
        assert_eq!(lost.state(), RoundState::Lost);
    }

    #[test]
    fn guess_dispatches_by_length() {
        let mut r = round("archivo");
        assert_eq!(r.guess(" a "), Ok(Feedback::Revealed(1)));
        assert_eq!(r.guess("o\u{301}"), Ok(Feedback::Revealed(1)));
        assert_eq!(r.guess("memoria"), Ok(Feedback::WordMismatched));
        assert_eq!(r.guess("   "), Err(GuessError::InvalidInput));
        assert_eq!(r.guess("4"), Err(GuessError::InvalidInput));
        assert_eq!(r.guess("ARCHIVO"), Ok(Feedback::WordMatched));
    }

    #[test]
    fn used_letters_sorted() {
        let mut r = round("python");
        for letter in ["y", "e", "a", "p"] {
            r.guess_letter(letter).unwrap();
        }
        assert_eq!(r.used_letters(), vec!['A', 'E', 'P', 'Y']);
        assert!(r.has_used('E'));
        assert!(!r.has_used('Z'));
    }

    #[test]
    fn random_round_draws_from_lexicon() {
        let lexicon = Lexicon::new(["uno", "dos", "tres"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let r = Round::random(&lexicon, &RoundConfig::default(), &mut rng);
            assert!(lexicon.words().iter().any(|w| w == r.secret()));
            assert_eq!(r.attempts_remaining(), 6);
        }
    }
}
