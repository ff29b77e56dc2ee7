//! Display functions for the console game and command results

use super::art::stage_for;
use super::formatters::{
    attempts_bar, create_progress_bar, feedback_text, outcome_text, spaced_mask,
    used_letters_line,
};
use crate::commands::SimulationResult;
use crate::core::{Feedback, GuessError, Round, RoundState, RoundStatus, SessionStats};
use colored::Colorize;

/// Print the gallows, the mask, used letters and attempts
pub fn print_board(round: &Round) {
    if let Some(player) = &round.config().player {
        println!("{} {}", "Player:".bright_black(), player.bright_white().bold());
    }

    let art = stage_for(round);
    if round.state() == RoundState::Lost {
        println!("{}", art.red());
    } else {
        println!("{}", art.bright_white());
    }
    println!();

    println!(
        "Word:     {}",
        spaced_mask(&round.display_mask()).bright_yellow().bold()
    );
    println!("Used:     {}", used_letters_line(&round.used_letters()));
    println!(
        "Attempts: {} {}",
        round.attempts_remaining(),
        attempts_bar(
            round.attempts_remaining(),
            round.config().starting_attempts
        )
        .cyan()
    );
    println!();
}

/// Print the result of the last guess
pub fn print_feedback(result: &Result<Feedback, GuessError>) {
    let text = feedback_text(result);
    match result {
        Ok(feedback) if feedback.is_hit() => println!("✅ {}", text.green()),
        Ok(_) => println!("❌ {}", text.red()),
        Err(_) => println!("⚠️  {}", text.yellow()),
    }
}

/// Print the end-of-round banner
pub fn print_outcome(status: &RoundStatus<'_>, player: Option<&str>) {
    let Some(text) = outcome_text(status, player) else {
        return;
    };

    println!("{}", "═".repeat(60).bright_cyan());
    match status {
        RoundStatus::Won { .. } => println!("  🎉 {}", text.bright_green().bold()),
        _ => println!("  💀 {}", text.bright_red().bold()),
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the session counters
pub fn print_session_summary(stats: &SessionStats) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "SESSION".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    println!("   Rounds played: {}", stats.played);
    println!("   Won:           {}", stats.won.to_string().green());
    println!("   Lost:          {}", stats.lost().to_string().red());
    println!(
        "   Win rate:      {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow()
    );
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Rounds played:    {}", result.stats.played);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.stats.win_rate())
            .bright_yellow()
            .bold()
    );
    println!(
        "   Avg wrong (wins): {:.2}",
        result.average_wrong_guesses
    );
    println!("   Avg moves:        {:.2}", result.average_moves);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    if let Some(seed) = result.seed {
        println!("   Seed:             {seed}");
    }

    println!("\n📈 {}", "Wrong guesses in won rounds:".bright_cyan().bold());
    let wins = result.stats.won.max(1);
    for (&wrong, &count) in &result.wrong_distribution {
        let pct = count as f64 / f64::from(wins) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {wrong:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.lost_words.is_empty() {
        println!("\n💀 {}", "Lost words:".bright_red().bold());
        for word in result.lost_words.iter().take(10) {
            println!("   • {word}");
        }
        if result.lost_words.len() > 10 {
            println!("   … and {} more", result.lost_words.len() - 10);
        }
    }
}
