//! Formatting utilities for terminal output

use crate::core::{Feedback, GuessError, MAX_ATTEMPTS, RoundStatus};

/// Mask with a space between characters, e.g. `P _ T H _ N`
#[must_use]
pub fn spaced_mask(mask: &[char]) -> String {
    let mut result = String::with_capacity(mask.len() * 2);
    for (i, ch) in mask.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(*ch);
    }
    result
}

/// Used letters joined with commas, or `(none)`
#[must_use]
pub fn used_letters_line(letters: &[char]) -> String {
    if letters.is_empty() {
        return "(none)".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as a bar
///
/// One cell per attempt in the budget, scaled down to [`MAX_ATTEMPTS`] cells
/// for larger budgets.
#[must_use]
pub fn attempts_bar(remaining: u32, budget: u32) -> String {
    if budget == 0 {
        return String::new();
    }
    let width = budget.min(MAX_ATTEMPTS);
    let filled = u64::from(remaining.min(budget)) * u64::from(width) / u64::from(budget);
    let filled = filled as usize;
    let width = width as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Message describing the result of a guess
#[must_use]
pub fn feedback_text(result: &Result<Feedback, GuessError>) -> String {
    match result {
        Ok(Feedback::Revealed(1)) => "Good! The letter is in the word.".to_string(),
        Ok(Feedback::Revealed(n)) => format!("Good! The letter appears {n} times."),
        Ok(Feedback::Absent) => "Not in the word.".to_string(),
        Ok(Feedback::WordMatched) => "That's the word!".to_string(),
        Ok(Feedback::WordMismatched) => "Wrong word.".to_string(),
        Err(GuessError::InvalidInput) => "Enter a single letter or the whole word.".to_string(),
        Err(GuessError::AlreadyGuessed(letter)) => format!("You already tried {letter}."),
        Err(GuessError::RoundOver) => "The round is over.".to_string(),
    }
}

/// End-of-round line, `None` while the round is still running
#[must_use]
pub fn outcome_text(status: &RoundStatus<'_>, player: Option<&str>) -> Option<String> {
    let (headline, secret) = match status {
        RoundStatus::InProgress => return None,
        RoundStatus::Won { secret } => ("you won!", secret),
        RoundStatus::Lost { secret } => ("you ran out of attempts.", secret),
    };

    let headline = match player {
        Some(name) => format!("{name}, {headline}"),
        None => {
            let mut chars = headline.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect())
                .unwrap_or_default()
        }
    };
    Some(format!("{headline} The word was: {secret}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_mask_joins_characters() {
        assert_eq!(spaced_mask(&['P', '_', 'T']), "P _ T");
        assert_eq!(spaced_mask(&[]), "");
    }

    #[test]
    fn used_letters_formats() {
        assert_eq!(used_letters_line(&[]), "(none)");
        assert_eq!(used_letters_line(&['A', 'E', 'Z']), "A, E, Z");
    }

    #[test]
    fn feedback_messages() {
        assert_eq!(
            feedback_text(&Ok(Feedback::Revealed(2))),
            "Good! The letter appears 2 times."
        );
        assert_eq!(feedback_text(&Ok(Feedback::Absent)), "Not in the word.");
        assert_eq!(
            feedback_text(&Err(GuessError::AlreadyGuessed('E'))),
            "You already tried E."
        );
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(outcome_text(&RoundStatus::InProgress, None), None);
        assert_eq!(
            outcome_text(&RoundStatus::Won { secret: "función" }, None).as_deref(),
            Some("You won! The word was: función")
        );
        assert_eq!(
            outcome_text(&RoundStatus::Lost { secret: "docker" }, Some("Ana")).as_deref(),
            Some("Ana, you ran out of attempts. The word was: docker")
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn attempts_bar_one_cell_per_attempt() {
        assert_eq!(attempts_bar(4, 6), "████░░");
        assert_eq!(attempts_bar(0, 6), "░░░░░░");
        assert_eq!(attempts_bar(0, 0), "");
    }

    #[test]
    fn attempts_bar_scales_large_budgets() {
        let full = attempts_bar(50_000_000, 50_000_000);
        assert_eq!(full, "█".repeat(26));

        let half = attempts_bar(25_000_000, 50_000_000);
        assert_eq!(half.chars().count(), 26);
        assert_eq!(half.chars().filter(|&c| c == '█').count(), 13);

        assert_eq!(attempts_bar(u32::MAX, u32::MAX).chars().count(), 26);
    }
}
