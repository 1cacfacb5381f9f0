//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, outcome_message};
use crate::commands::CheckResult;
use crate::core::Word;
use crate::game::{Outcome, Statistics, SubmittedRow};
use colored::Colorize;

/// Print the result of checking a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess: {}   {}",
        result.row.guess.to_string().bright_yellow().bold(),
        result.row.feedback.to_emoji()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}\n", colored_row(&result.row));

    if result.row.feedback.is_perfect() {
        println!("{}", "✅ That's the word!".green().bold());
    }
}

/// Print the end-of-game banner with the full guess history
pub fn print_outcome(outcome: Outcome, secret: &Word, history: &[SubmittedRow]) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    let headline = outcome_message(outcome);
    match outcome {
        Outcome::Won { .. } => println!("  {}", headline.bright_green().bold()),
        Outcome::Lost => println!("  {}", headline.bright_red().bold()),
    }
    println!("{}", "═".repeat(50).bright_cyan());

    println!("\n  The word was {}", secret.to_string().bright_yellow().bold());
    println!("\n  Guess history:");
    for (i, row) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_row(row),
            row.feedback.to_emoji()
        );
    }
    println!();
}

/// Print win/loss statistics for the run
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games);
    println!("   Win rate:      {:.0}%", stats.win_rate());

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, max as f64, 20);
        println!("   {guesses}: {} {count}", bar.green());
    }
}
