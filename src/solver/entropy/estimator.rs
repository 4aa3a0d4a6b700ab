//! Candidate-set uncertainty
//!
//! Treats every remaining candidate as equally likely, so the uncertainty is
//! `log2(n)` bits, floored at [`ENTROPY_FLOOR`].

/// Smallest value ever reported, including for empty and single-candidate sets
pub const ENTROPY_FLOOR: f64 = 0.001;

/// Uncertainty in bits for `n` equally likely candidates
///
/// # Examples
/// ```
/// use bulls_cows::solver::entropy::{ENTROPY_FLOOR, entropy};
///
/// assert_eq!(entropy(0), ENTROPY_FLOOR);
/// assert_eq!(entropy(1), ENTROPY_FLOOR);
/// assert!((entropy(5040) - 12.2992).abs() < 1e-3);
/// ```
#[must_use]
pub fn entropy(n: usize) -> f64 {
    if n == 0 {
        return ENTROPY_FLOOR;
    }

    (n as f64).log2().max(ENTROPY_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_floor() {
        assert!((entropy(0) - 0.001).abs() < f64::EPSILON);
    }

    #[test]
    fn single_candidate_is_floor() {
        assert!((entropy(1) - 0.001).abs() < f64::EPSILON);
    }

    #[test]
    fn full_space() {
        assert!((entropy(5040) - 12.2992).abs() < 1e-3);
    }

    #[test]
    fn powers_of_two_are_exact() {
        assert!((entropy(2) - 1.0).abs() < f64::EPSILON);
        assert!((entropy(1024) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn matches_uniform_shannon_form() {
        // -n * (p * log2(p)) with p = 1/n
        for n in [2usize, 3, 7, 100, 5040] {
            let p = 1.0 / n as f64;
            let literal = -(n as f64) * (p * p.log2());
            assert!((entropy(n) - literal).abs() < 1e-9, "n = {n}");
        }
    }

    #[test]
    fn monotonic_in_candidates() {
        let values: Vec<f64> = (1..200).map(entropy).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }
}
