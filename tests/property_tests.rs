//! Property tests for comparison, filtering and full sessions.

use bulls_cows::core::{Code, Feedback};
use bulls_cows::solver::{
    CODE_SPACE_SIZE, CandidateSet, InferenceSession, StrategyType, filter, generate,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Pick any valid code by its index in the code space.
fn arb_code() -> impl Strategy<Value = Code> {
    (0..CODE_SPACE_SIZE).prop_map(|i| generate()[i])
}

fn arb_guesses(max: usize) -> impl Strategy<Value = Vec<Code>> {
    prop::collection::vec(arb_code(), 1..max)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn compare_is_bounded_and_symmetric(a in arb_code(), b in arb_code()) {
        let ab = Feedback::calculate(&a, &b);
        let ba = Feedback::calculate(&b, &a);

        prop_assert!(ab.bulls() <= 4);
        prop_assert!(ab.cows() <= 4);
        prop_assert!(ab.bulls() + ab.cows() <= 4);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn compare_with_self_is_solved(a in arb_code()) {
        prop_assert_eq!(Feedback::calculate(&a, &a), Feedback::SOLVED);
    }

    #[test]
    fn filter_is_idempotent(guess in arb_code(), secret in arb_code()) {
        let feedback = Feedback::calculate(&guess, &secret);
        let once = filter(&CandidateSet::full(), &guess, feedback);
        let twice = filter(&once, &guess, feedback);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filtering_never_loses_the_secret(secret in arb_code(), guesses in arb_guesses(8)) {
        let mut candidates = CandidateSet::full();
        for guess in &guesses {
            let feedback = Feedback::calculate(guess, &secret);
            candidates = filter(&candidates, guess, feedback);
            prop_assert!(candidates.contains(&secret));
        }
    }

    #[test]
    fn truthful_feedback_always_solves(secret in arb_code(), seed in any::<u64>(), random in any::<bool>()) {
        let strategy = if random {
            StrategyType::from_name("random", seed)
        } else {
            StrategyType::default()
        };
        let mut session = InferenceSession::computer_guessing_with(strategy);

        // Each round removes at least the guess itself, so this always ends
        for _ in 0..CODE_SPACE_SIZE {
            if session.is_terminal() {
                break;
            }
            let guess = session.propose_guess().unwrap();
            let feedback = Feedback::calculate(&guess, &secret);
            let result = session.submit_feedback(feedback.bulls(), feedback.cows()).unwrap();
            prop_assert!(session.candidates().contains(&secret) || result.terminal);
        }

        prop_assert!(session.is_terminal());
        prop_assert_eq!(session.history().last().map(|round| round.guess), Some(secret));
    }

    #[test]
    fn player_session_scores_like_compare(secret in arb_code(), guess in arb_code()) {
        let mut session = InferenceSession::player_guessing_with_secret(secret);
        let result = session.submit_guess(&guess.to_string()).unwrap();
        let expected = Feedback::calculate(&guess, &secret);

        prop_assert_eq!((result.bulls, result.cows), (expected.bulls(), expected.cows()));
        prop_assert_eq!(result.terminal, guess == secret);
    }
}
