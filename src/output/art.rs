//! Gallows drawings

use crate::core::{Round, RoundState};

/// Gallows stages, from the empty frame to the complete figure
pub const STAGES: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Stage index for a number of wrong guesses out of a budget
///
/// Wrong guesses are scaled onto the available stages so any budget ends on
/// the complete figure. A lost round always shows the last stage.
#[must_use]
pub fn stage_index(wrong_guesses: u32, budget: u32, lost: bool) -> usize {
    let last = STAGES.len() - 1;
    if lost {
        return last;
    }
    if budget == 0 {
        return 0;
    }
    (wrong_guesses as usize * last / budget as usize).min(last)
}

/// Drawing for the current state of `round`
#[must_use]
pub fn stage_for(round: &Round) -> &'static str {
    let index = stage_index(
        round.wrong_guesses(),
        round.config().starting_attempts,
        round.state() == RoundState::Lost,
    );
    STAGES[index]
}
