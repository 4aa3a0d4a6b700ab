//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Feedback};
use crate::solver::{CODE_SPACE_SIZE, entropy::entropy};

/// Format feedback as bull/cow markers, e.g. `●●○·` for 2 bulls and 1 cow
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let bulls = usize::from(feedback.bulls());
    let cows = usize::from(feedback.cows());

    format!(
        "{}{}{}",
        "●".repeat(bulls),
        "○".repeat(cows),
        "·".repeat(CODE_LENGTH - bulls - cows)
    )
}

/// Format feedback as pegs followed by the counts, e.g. `●●○· 2B 1C`
#[must_use]
pub fn feedback_badge(feedback: Feedback) -> String {
    format!("{} {feedback}", feedback_pegs(feedback))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the full code space
#[must_use]
pub fn entropy_bar(bits: f64, width: usize) -> String {
    create_progress_bar(bits, entropy(CODE_SPACE_SIZE), width)
}
