//! Round configuration

/// Default number of wrong guesses a player may make before the final, losing one
pub const DEFAULT_ATTEMPTS: u32 = 6;

/// Largest attempt budget a round accepts from the command line
///
/// One per letter of the alphabet; a round that survives more misses than
/// that can no longer be lost by letter guesses alone.
pub const MAX_ATTEMPTS: u32 = 26;

/// Default character shown for letters not yet revealed
pub const DEFAULT_PLACEHOLDER: char = '_';

/// Settings shared by every round of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConfig {
    /// Character displayed for hidden alphabetic positions
    pub placeholder: char,
    /// Attempt budget each round starts with
    pub starting_attempts: u32,
    /// Optional name shown in banners and summaries
    pub player: Option<String>,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(placeholder: char, starting_attempts: u32) -> Self {
        Self {
            placeholder,
            starting_attempts,
            player: None,
        }
    }

    #[must_use]
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER, DEFAULT_ATTEMPTS)
    }
}
