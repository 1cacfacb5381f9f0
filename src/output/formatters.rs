//! Formatting utilities for terminal output

use crate::core::Verdict;
use crate::game::{Outcome, SubmittedRow};
use colored::{ColoredString, Colorize};

/// Render one tile as a padded, background-colored letter
#[must_use]
pub fn colored_tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render a submitted row as colored tiles
#[must_use]
pub fn colored_row(row: &SubmittedRow) -> String {
    row.guess
        .letters()
        .iter()
        .zip(row.feedback.verdicts())
        .map(|(&letter, &verdict)| colored_tile(char::from(letter), Some(verdict)).to_string())
        .collect()
}

/// Headline for a finished game
#[must_use]
pub const fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won { guesses: 1 } => "🎯 HOLE IN ONE! Extraordinary! 🌟",
        Outcome::Won { guesses: 2 } => "🔥 MAGNIFICENT! Two guesses! 🔥",
        Outcome::Won { guesses: 3 } => "✨ SPLENDID! Three guesses! ✨",
        Outcome::Won { guesses: 4 } => "👏 GREAT JOB! Four guesses! 👏",
        Outcome::Won { guesses: 5 } => "🎉 NICE WORK! Five guesses! 🎉",
        Outcome::Won { .. } => "🎊 SOLVED! 🎊",
        Outcome::Lost => "💀 Out of guesses!",
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_messages() {
        assert!(outcome_message(Outcome::Won { guesses: 1 }).contains("HOLE IN ONE"));
        assert!(outcome_message(Outcome::Won { guesses: 9 }).contains("SOLVED"));
        assert!(outcome_message(Outcome::Lost).contains("Out of guesses"));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
