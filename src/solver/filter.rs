//! Constraint filtering
//!
//! Narrows a candidate set to the codes that would have produced the observed
//! feedback for a guess.

use super::space::CandidateSet;
use crate::core::{Code, Feedback};

/// Keep only candidates `c` where `Feedback::calculate(guess, c) == feedback`
///
/// Order is preserved. The result may be empty when the feedback contradicts
/// every remaining candidate; callers must treat that as an error.
///
/// # Examples
/// ```
/// use bulls_cows::core::{Code, Feedback};
/// use bulls_cows::solver::{CandidateSet, CODE_SPACE_SIZE, filter};
///
/// let guess = Code::new("0123").unwrap();
/// let feedback = Feedback::new(1, 1).unwrap();
/// let remaining = filter(&CandidateSet::full(), &guess, feedback);
///
/// assert!(remaining.len() < CODE_SPACE_SIZE);
/// assert!(remaining.contains(&Code::new("0245").unwrap()));
/// ```
#[must_use]
pub fn filter(candidates: &CandidateSet, guess: &Code, feedback: Feedback) -> CandidateSet {
    CandidateSet::from_codes(
        candidates
            .iter()
            .filter(|&candidate| is_consistent(guess, feedback, candidate))
            .copied()
            .collect(),
    )
}

/// Check whether `candidate` could be the secret given one observation
#[inline]
#[must_use]
pub fn is_consistent(guess: &Code, feedback: Feedback, candidate: &Code) -> bool {
    Feedback::calculate(guess, candidate) == feedback
}
