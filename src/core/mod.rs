//! Core game types
//!
//! Text normalization, the round state machine, and the small values that
//! travel with it. Nothing here touches the terminal.

mod config;
mod normalize;
mod round;
mod stats;

pub use config::{DEFAULT_ATTEMPTS, DEFAULT_PLACEHOLDER, MAX_ATTEMPTS, RoundConfig};
pub use normalize::{canonical_letter, canonicalize};
pub use round::{Feedback, GuessError, Round, RoundState, RoundStatus};
pub use stats::SessionStats;
