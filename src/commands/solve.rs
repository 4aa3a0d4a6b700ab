//! Code solving command
//!
//! Lets the engine play against a known secret and returns the solution path.

use crate::core::{Code, Feedback};
use crate::solver::{CODE_SPACE_SIZE, InferenceSession, StrategyType};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    /// Create a config with the default round limit
    ///
    /// Each non-winning round removes at least the guess itself, so the size of
    /// the code space bounds any game with truthful feedback.
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_rounds: CODE_SPACE_SIZE,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub rounds: Vec<GuessStep>,
    pub secret: Code,
}

/// A single round in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: f64,
}

/// Solve a secret by feeding the engine truthful feedback
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not 4 distinct digits
/// - The session reports a contradiction (cannot happen with truthful feedback)
pub fn solve_code(config: SolveConfig, strategy: StrategyType) -> Result<SolveResult, String> {
    let secret = Code::new(&config.secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let mut session = InferenceSession::computer_guessing_with(strategy);
    let mut rounds = Vec::new();

    for _ in 0..config.max_rounds {
        let candidates_before = session.candidate_count();
        let guess = session.propose_guess().map_err(|e| e.to_string())?;
        let feedback = Feedback::calculate(&guess, &secret);

        let result = session
            .submit_feedback(feedback.bulls(), feedback.cows())
            .map_err(|e| e.to_string())?;

        rounds.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: result.candidate_count,
            entropy: result.entropy,
        });

        if result.terminal {
            return Ok(SolveResult {
                success: true,
                rounds,
                secret,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        rounds,
        secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::RandomCandidate;

    #[test]
    fn solve_code_succeeds() {
        let config = SolveConfig::new("7092".to_string());
        let result = solve_code(config, StrategyType::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.rounds.last().unwrap().guess, result.secret);
        assert!(result.rounds.last().unwrap().feedback.is_solved());
    }

    #[test]
    fn solve_first_guess_hits_first_code() {
        let config = SolveConfig::new("0123".to_string());
        let result = solve_code(config, StrategyType::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.rounds.len(), 1);
        assert_eq!(result.rounds[0].candidates_before, 5040);
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let config = SolveConfig::new("8634".to_string());
        let result = solve_code(config, StrategyType::default()).unwrap();

        for step in &result.rounds {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in result.rounds.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn solve_with_random_strategy() {
        let config = SolveConfig::new("5190".to_string());
        let strategy = StrategyType::Random(RandomCandidate::new(17));
        let result = solve_code(config, strategy).unwrap();

        assert!(result.success);
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let result = solve_code(SolveConfig::new("1123".to_string()), StrategyType::default());
        assert!(result.is_err());

        let result = solve_code(SolveConfig::new("abcd".to_string()), StrategyType::default());
        assert!(result.is_err());
    }

    #[test]
    fn solve_with_round_limit() {
        let mut config = SolveConfig::new("9876".to_string());
        config.max_rounds = 1;

        let result = solve_code(config, StrategyType::default()).unwrap();
        assert!(!result.success);
        assert_eq!(result.rounds.len(), 1);
    }
}
