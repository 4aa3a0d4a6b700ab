//! Feedback partitions for a single guess
//!
//! Given a guess and a set of candidates, groups the candidates by the feedback
//! they would produce and measures how informative that split is.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Metrics describing how a guess splits the candidates
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy of the feedback distribution (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest feedback bucket (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of distinct feedback values the guess can produce
    pub partitions: usize,
}

/// Group candidates by the feedback they produce with the guess
///
/// Only non-empty buckets are present in the map.
pub fn partition<'a, I>(guess: &Code, candidates: I) -> FxHashMap<Feedback, usize>
where
    I: IntoIterator<Item = &'a Code>,
{
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::calculate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Examples
/// ```
/// use bulls_cows::core::Feedback;
/// use bulls_cows::solver::entropy::shannon_entropy;
/// use rustc_hash::FxHashMap;
///
/// let mut uniform = FxHashMap::default();
/// uniform.insert(Feedback::new(0, 0).unwrap(), 25);
/// uniform.insert(Feedback::new(0, 1).unwrap(), 25);
/// uniform.insert(Feedback::new(1, 0).unwrap(), 25);
/// uniform.insert(Feedback::new(1, 1).unwrap(), 25);
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(counts: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate metrics for a guess against the candidates
pub fn calculate_metrics<'a, I>(guess: &Code, candidates: I) -> GuessMetrics
where
    I: IntoIterator<Item = &'a Code>,
{
    metrics_from_counts(&partition(guess, candidates))
}

/// Calculate metrics from an already computed feedback partition
#[must_use]
pub fn metrics_from_counts<S>(
    counts: &std::collections::HashMap<Feedback, usize, S>,
) -> GuessMetrics
where
    S: std::hash::BuildHasher,
{
    let total = counts.values().sum::<usize>();

    if total == 0 {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            partitions: 0,
        };
    }

    // Σ p(bucket) × |bucket|
    let expected_remaining = counts
        .values()
        .map(|&count| (count * count) as f64)
        .sum::<f64>()
        / total as f64;

    GuessMetrics {
        entropy: shannon_entropy(counts),
        expected_remaining,
        max_partition: counts.values().copied().max().unwrap_or(0),
        partitions: counts.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::space::{CODE_SPACE_SIZE, generate};

    fn code(s: &str) -> Code {
        Code::new(s).unwrap()
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(Feedback::new(0, 0).unwrap(), 10);

        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_below_uniform() {
        let buckets: Vec<Feedback> = Feedback::all().take(4).collect();

        let uniform: FxHashMap<Feedback, usize> = buckets.iter().map(|&f| (f, 25)).collect();
        let skewed: FxHashMap<Feedback, usize> = buckets
            .iter()
            .zip([97, 1, 1, 1])
            .map(|(&f, n)| (f, n))
            .collect();

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Feedback, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn partition_covers_full_space() {
        let space = generate();
        let counts = partition(&code("0123"), &space);

        assert_eq!(counts.values().sum::<usize>(), CODE_SPACE_SIZE);
        assert_eq!(counts.get(&Feedback::SOLVED), Some(&1));
        // 3 bulls + 1 cow can never happen
        assert_eq!(counts.get(&Feedback::new(3, 1).unwrap()), None);
    }

    #[test]
    fn partition_known_bucket_sizes() {
        let space = generate();
        let counts = partition(&code("0123"), &space);

        // No shared digits: arrangements of 4 from the other 6 digits
        assert_eq!(counts.get(&Feedback::new(0, 0).unwrap()), Some(&360));
        // All shared, none in place: derangements of 4
        assert_eq!(counts.get(&Feedback::new(0, 4).unwrap()), Some(&9));
    }

    #[test]
    fn metrics_full_space() {
        let space = generate();
        let metrics = calculate_metrics(&code("0123"), &space);

        assert_eq!(metrics.partitions, 14);
        assert!(metrics.entropy > 2.0 && metrics.entropy < (14f64).log2());
        assert!(metrics.expected_remaining < CODE_SPACE_SIZE as f64);
        assert!(metrics.max_partition >= 360);
    }

    #[test]
    fn metrics_from_counts_matches_direct_calculation() {
        let space = generate();
        let guess = code("3829");
        let counts = partition(&guess, &space);

        let from_counts = metrics_from_counts(&counts);
        let direct = calculate_metrics(&guess, &space);

        assert!((from_counts.entropy - direct.entropy).abs() < f64::EPSILON);
        assert!(
            (from_counts.expected_remaining - direct.expected_remaining).abs() < f64::EPSILON
        );
        assert_eq!(from_counts.max_partition, direct.max_partition);
        assert_eq!(from_counts.partitions, direct.partitions);
    }

    #[test]
    fn metrics_single_candidate() {
        let candidates = [code("4567")];
        let metrics = calculate_metrics(&code("0123"), &candidates);

        assert!(metrics.entropy.abs() < 0.001);
        assert!((metrics.expected_remaining - 1.0).abs() < f64::EPSILON);
        assert_eq!(metrics.max_partition, 1);
        assert_eq!(metrics.partitions, 1);
    }

    #[test]
    fn metrics_empty_candidates() {
        let candidates: [Code; 0] = [];
        let metrics = calculate_metrics(&code("0123"), &candidates);

        assert!(metrics.entropy.abs() < f64::EPSILON);
        assert_eq!(metrics.max_partition, 0);
        assert_eq!(metrics.partitions, 0);
    }

    #[test]
    fn metrics_perfect_split() {
        // One candidate matches exactly, the other shares nothing: 1 bit
        let candidates = [code("0123"), code("4567")];
        let metrics = calculate_metrics(&code("0123"), &candidates);

        assert!((metrics.entropy - 1.0).abs() < 0.001);
        assert_eq!(metrics.max_partition, 1);
    }
}
