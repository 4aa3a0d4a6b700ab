//! Guess analysis command
//!
//! Shows how a guess would split the full code space by feedback.

use crate::core::{Code, Feedback};
use crate::solver::entropy::{metrics_from_counts, partition};
use crate::solver::generate;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
    /// Bucket size per feedback value, in feedback order, empty buckets omitted
    pub buckets: Vec<(Feedback, usize)>,
}

/// Analyze a guess against every possible secret
///
/// # Errors
///
/// Returns an error if the guess is not 4 distinct digits.
pub fn analyze_code(guess: &str) -> Result<AnalysisResult, String> {
    let guess = Code::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let space = generate();

    let counts = partition(&guess, &space);
    let metrics = metrics_from_counts(&counts);

    let buckets = Feedback::all()
        .filter_map(|feedback| counts.get(&feedback).map(|&count| (feedback, count)))
        .collect();

    Ok(AnalysisResult {
        guess,
        entropy: metrics.entropy,
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates: space.len(),
        buckets,
    })
}
