//! Formatting utilities for terminal output

use crate::core::{FeedbackCode, Outcome, Word};
use colored::Colorize;

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &FeedbackCode) -> String {
    feedback
        .outcomes()
        .iter()
        .map(|outcome| match outcome {
            Outcome::Absent => '⬜',
            Outcome::Misplaced => '🟨',
            Outcome::Correct => '🟩',
        })
        .collect()
}

/// Color each letter of a guess by its outcome
#[must_use]
pub fn colorize_guess(guess: &Word, feedback: &FeedbackCode) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.outcomes())
        .map(|(letter, outcome)| {
            let cell = format!(" {letter} ");
            match outcome {
                Outcome::Correct => cell.black().on_green().bold().to_string(),
                Outcome::Misplaced => cell.black().on_yellow().bold().to_string(),
                Outcome::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Render the guess and feedback grid, one row per attempt
///
/// Unplayed rows are filled with `_`.
#[must_use]
pub fn render_grid(
    history: &[(Word, FeedbackCode)],
    word_length: usize,
    num_attempts: usize,
) -> Vec<String> {
    let blank = "_".repeat(word_length);
    (0..num_attempts)
        .map(|attempt| match history.get(attempt) {
            Some((guess, feedback)) => format!("{guess} {feedback}"),
            None => format!("{blank} {blank}"),
        })
        .collect()
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

    fn code(text: &str) -> FeedbackCode {
        FeedbackCode::parse(text, text.len()).unwrap()
    }

    #[test]
    fn feedback_to_emoji_mixed() {
        assert_eq!(feedback_to_emoji(&code("XO?XO")), "⬜🟩🟨⬜🟩");
    }

    #[test]
    fn feedback_to_emoji_all_correct() {
        assert_eq!(feedback_to_emoji(&FeedbackCode::all_correct(5)), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn render_grid_pads_unplayed_rows() {
        let history = vec![(Word::new("crane").unwrap(), code("X??X?"))];
        let grid = render_grid(&history, 5, 3);
        assert_eq!(grid, ["CRANE X??X?", "_____ _____", "_____ _____"]);
    }

    #[test]
    fn render_grid_other_length() {
        let grid = render_grid(&[], 4, 1);
        assert_eq!(grid, ["____ ____"]);
    }

    #[test]
    fn colorize_guess_keeps_letters() {
        colored::control::set_override(false);
        let text = colorize_guess(&Word::new("crane").unwrap(), &code("O?XXX"));
        assert_eq!(text, " C  R  A  N  E ");
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
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
