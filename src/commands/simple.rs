//! Simple console mode
//!
//! Line-based game without the TUI: the board is redrawn after every guess.

use crate::core::{Feedback, GuessError, Round, RoundConfig, SessionStats};
use crate::lexicon::Lexicon;
use crate::output::{print_board, print_feedback, print_outcome, print_session_summary};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

/// Run the simple console game until the player stops
///
/// Returns the session statistics.
///
/// # Errors
///
/// Returns an error if there's an I/O error clearing the screen or reading input.
pub fn run_simple(lexicon: &Lexicon, config: &RoundConfig) -> Result<SessionStats> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut rng = rand::rng();
    let mut stats = SessionStats::default();

    loop {
        let round = Round::random(lexicon, config, &mut rng);
        let Some(updated) = play_round(round, stats, &mut input)? else {
            break;
        };
        stats = updated;

        match get_user_input(&mut input, "\nPlay again? (y/n)")? {
            Some(answer) if is_yes(&answer) => {}
            _ => break,
        }
    }

    print_session_summary(&stats);
    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

/// Play one round to the end
///
/// Takes the session stats and returns them updated with this round, or
/// `None` if input closed before the round ended.
///
/// # Errors
///
/// Returns an error on terminal or input I/O failure.
pub fn play_round<R: BufRead>(
    mut round: Round,
    stats: SessionStats,
    input: &mut R,
) -> Result<Option<SessionStats>> {
    let mut last: Option<Result<Feedback, GuessError>> = None;

    while !round.is_over() {
        clear_screen()?;
        print_board(&round);
        if let Some(result) = &last {
            print_feedback(result);
        }

        let Some(guess) = get_user_input(input, "Enter a letter or guess the whole word")? else {
            return Ok(None);
        };
        if guess.is_empty() {
            last = None;
            continue;
        }
        last = Some(round.guess(&guess));
    }

    clear_screen()?;
    print_board(&round);
    let status = round.status();
    print_outcome(&status, round.config().player.as_deref());

    Ok(Some(stats.record(&status)))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

/// Get user input with a prompt; `None` once input is closed
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn yes_answers() {
        for answer in ["y", "Y", "yes", "s", "S", "si", "Sí"] {
            assert!(is_yes(answer), "{answer}");
        }
        for answer in ["n", "no", "", "maybe"] {
            assert!(!is_yes(answer), "{answer}");
        }
    }

    #[test]
    fn scripted_round_is_won() {
        let round = Round::new("python", &RoundConfig::default());
        let mut input = Cursor::new("\nz\np\nz\nPYTHON\n");

        let stats = play_round(round, SessionStats::default(), &mut input)
            .unwrap()
            .unwrap();
        assert_eq!(stats, SessionStats { played: 1, won: 1 });
    }

    #[test]
    fn scripted_round_is_lost() {
        let round = Round::new("python", &RoundConfig::new('_', 1));
        let mut input = Cursor::new("a\nb\n");

        let stats = play_round(round, SessionStats { played: 2, won: 1 }, &mut input)
            .unwrap()
            .unwrap();
        assert_eq!(stats, SessionStats { played: 3, won: 1 });
    }

    #[test]
    fn closed_input_abandons_round() {
        let round = Round::new("python", &RoundConfig::default());
        let mut input = Cursor::new("e\n");
        assert!(
            play_round(round, SessionStats::default(), &mut input)
                .unwrap()
                .is_none()
        );
    }
}
