//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::space::CandidateSet;
use crate::core::Code;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A strategy for picking the next guess from the remaining candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// Returns `None` if no candidates remain.
    fn select_guess(&mut self, candidates: &CandidateSet) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// First remaining candidate in generation order (default)
    First(FirstCandidate),
    /// Uniformly random remaining candidate
    Random(RandomCandidate),
}

impl Strategy for StrategyType {
    fn select_guess(&mut self, candidates: &CandidateSet) -> Option<Code> {
        match self {
            Self::First(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "random". Defaults to first if name is unrecognized.
    /// `seed` only affects the random strategy.
    #[must_use]
    pub fn from_name(name: &str, seed: u64) -> Self {
        match name {
            "random" => Self::Random(RandomCandidate::new(seed)),
            _ => Self::First(FirstCandidate),
        }
    }

    /// Same kind of strategy with a fresh seed
    ///
    /// The first-candidate strategy has no state and is returned unchanged.
    #[must_use]
    pub fn reseeded(&self, seed: u64) -> Self {
        match self {
            Self::First(s) => Self::First(*s),
            Self::Random(_) => Self::Random(RandomCandidate::new(seed)),
        }
    }

    /// Short name for display
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::First(_) => "first",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::First(FirstCandidate)
    }
}

/// Pick the first remaining candidate in generation order
///
/// Entropy is reported alongside each round but plays no part in the choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl Strategy for FirstCandidate {
    fn select_guess(&mut self, candidates: &CandidateSet) -> Option<Code> {
        next_guess(candidates)
    }
}

/// First remaining candidate, or `None` when the set is empty
///
/// # Examples
/// ```
/// use bulls_cows::solver::{CandidateSet, next_guess};
///
/// let guess = next_guess(&CandidateSet::full()).unwrap();
/// assert_eq!(guess.to_string(), "0123");
/// ```
#[must_use]
pub fn next_guess(candidates: &CandidateSet) -> Option<Code> {
    candidates.first()
}

/// Pick a uniformly random remaining candidate from a seeded RNG
#[derive(Debug, Clone)]
pub struct RandomCandidate {
    rng: StdRng,
}

impl RandomCandidate {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomCandidate {
    fn select_guess(&mut self, candidates: &CandidateSet) -> Option<Code> {
        if candidates.is_empty() {
            return None;
        }

        let index = self.rng.random_range(0..candidates.len());
        candidates.as_slice().get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::solver::filter::filter;

    fn code(s: &str) -> Code {
        Code::new(s).unwrap()
    }

    #[test]
    fn first_candidate_from_full_space() {
        let mut strategy = FirstCandidate;
        assert_eq!(
            strategy.select_guess(&CandidateSet::full()),
            Some(code("0123"))
        );
    }

    #[test]
    fn first_candidate_after_filtering() {
        let remaining = filter(
            &CandidateSet::full(),
            &code("0123"),
            Feedback::new(0, 0).unwrap(),
        );

        let mut strategy = FirstCandidate;
        assert_eq!(strategy.select_guess(&remaining), Some(code("4567")));
    }

    #[test]
    fn first_candidate_empty_set() {
        let empty = CandidateSet::from_codes(Vec::new());
        assert_eq!(FirstCandidate.select_guess(&empty), None);
        assert_eq!(next_guess(&empty), None);
    }

    #[test]
    fn random_candidate_picks_member() {
        let remaining = filter(
            &CandidateSet::full(),
            &code("0123"),
            Feedback::new(2, 1).unwrap(),
        );

        let mut strategy = RandomCandidate::new(7);
        for _ in 0..20 {
            let guess = strategy.select_guess(&remaining).unwrap();
            assert!(remaining.contains(&guess));
        }
    }

    #[test]
    fn random_candidate_is_reproducible() {
        let set = CandidateSet::full();
        let mut a = RandomCandidate::new(42);
        let mut b = RandomCandidate::new(42);

        for _ in 0..10 {
            assert_eq!(a.select_guess(&set), b.select_guess(&set));
        }
    }

    #[test]
    fn random_candidate_empty_set() {
        let empty = CandidateSet::from_codes(Vec::new());
        assert_eq!(RandomCandidate::new(1).select_guess(&empty), None);
    }

    #[test]
    fn reseeded_keeps_kind() {
        let first = StrategyType::default().reseeded(9);
        assert!(matches!(first, StrategyType::First(_)));

        let random = StrategyType::from_name("random", 1).reseeded(9);
        assert!(matches!(random, StrategyType::Random(_)));
    }

    #[test]
    fn reseeded_random_follows_new_seed() {
        let set = CandidateSet::full();
        let mut reseeded = StrategyType::from_name("random", 1).reseeded(9);
        let mut fresh = StrategyType::from_name("random", 9);

        for _ in 0..10 {
            assert_eq!(reseeded.select_guess(&set), fresh.select_guess(&set));
        }
    }

    #[test]
    fn from_name_selects_strategy() {
        assert!(matches!(
            StrategyType::from_name("random", 0),
            StrategyType::Random(_)
        ));
        assert!(matches!(
            StrategyType::from_name("first", 0),
            StrategyType::First(_)
        ));
        assert!(matches!(
            StrategyType::from_name("unknown", 0),
            StrategyType::First(_)
        ));
        assert_eq!(StrategyType::default().name(), "first");
    }
}
