//! Automated players
//!
//! Strategies that pick moves from the visible state of a round, and a driver
//! that plays a round to the end with one of them.

mod strategy;

pub use strategy::{CandidateStrategy, FrequencyStrategy, Move, Strategy, StrategyType};

use crate::core::Round;
use log::warn;

/// Play `round` until it ends or the strategy runs out of moves
///
/// Returns the number of moves made.
pub fn play_round<S: Strategy + ?Sized>(strategy: &S, round: &mut Round) -> usize {
    let mut moves = 0;

    while !round.is_over() {
        let Some(next) = strategy.next_move(round) else {
            warn!(
                "strategy ran out of moves with the round still in progress ({} attempts left)",
                round.attempts_remaining()
            );
            break;
        };

        let result = match &next {
            Move::Letter(letter) => round.guess_letter(letter.encode_utf8(&mut [0; 4])),
            Move::Word(word) => round.guess_word(word),
        };

        if let Err(err) = result {
            warn!("strategy move {next:?} rejected: {err}");
            break;
        }
        moves += 1;
    }

    moves
}
