//! Hangman
//!
//! A terminal word-guessing game with accent-insensitive guessing.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Round, RoundConfig, RoundStatus};
//!
//! let mut round = Round::new("programación", &RoundConfig::default());
//! round.guess_letter("o").unwrap();
//! round.guess_word("PROGRAMACION").unwrap();
//!
//! assert_eq!(round.status(), RoundStatus::Won { secret: "programación" });
//! ```

// Core game types
pub mod core;

// Secret word lists
pub mod lexicon;

// Automated players
pub mod autoplay;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
