//! Terminal output formatting
//!
//! Gallows art, text formatting and the console printers.

pub mod art;
pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_feedback, print_outcome, print_session_summary, print_simulation_result,
};
