//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::{ColoredString, Colorize};

/// Format a guess as colored letter tiles
///
/// Falls back to plain letters if the lengths differ.
#[must_use]
pub fn feedback_tiles(word: &str, feedback: &Feedback) -> String {
    if word.chars().count() != feedback.len() {
        return word.to_uppercase();
    }

    word.chars()
        .zip(feedback.marks())
        .map(|(c, &mark)| tile(c, mark).to_string())
        .collect()
}

fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase()).bold();
    match mark {
        Mark::Exact => text.black().on_green(),
        Mark::Misplaced => text.black().on_yellow(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // Cast is safe: ratio is clamped to [0, 1]
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the pool a bucket holds
#[must_use]
pub fn share_bar(count: usize, total: usize, width: usize) -> String {
    create_progress_bar(count as f64, total as f64, width)
}
