use bulls_cows::core::{Code, Feedback};
use bulls_cows::solver::{
    CODE_SPACE_SIZE, CandidateSet, InferenceSession, SessionError, SessionState, filter,
};

fn code(s: &str) -> Code {
    Code::new(s).unwrap()
}

#[test]
fn test_two_bulls_no_cows() {
    let feedback = Feedback::calculate(&code("1234"), &code("1256"));
    assert_eq!((feedback.bulls(), feedback.cows()), (2, 0));
}

#[test]
fn test_reversed_code_is_all_cows() {
    let feedback = Feedback::calculate(&code("1234"), &code("4321"));
    assert_eq!((feedback.bulls(), feedback.cows()), (0, 4));
}

#[test]
fn test_one_round_narrows_and_keeps_secret() {
    let secret = code("0345");
    let guess = code("0123");
    let feedback = Feedback::calculate(&guess, &secret);
    assert_eq!(feedback, Feedback::new(1, 1).unwrap());

    let remaining = filter(&CandidateSet::full(), &guess, feedback);
    assert!(remaining.len() < CODE_SPACE_SIZE);
    assert!(remaining.contains(&secret));
}

#[test]
fn test_four_bulls_ends_the_session() {
    let mut session = InferenceSession::computer_guessing();
    let guess = session.propose_guess().unwrap();

    let result = session.submit_feedback(4, 0).unwrap();
    assert!(result.terminal);
    assert_eq!(result.candidate_count, CODE_SPACE_SIZE);
    assert_eq!(session.state(), SessionState::Terminal);
    assert_eq!(session.history()[0].guess, guess);
    assert_eq!(session.propose_guess(), Err(SessionError::Finished));
}

#[test]
fn test_impossible_feedback_leaves_session_unchanged() {
    let mut session = InferenceSession::computer_guessing();
    let guess = session.propose_guess().unwrap();

    let err = session.submit_feedback(3, 2).unwrap_err();
    assert!(matches!(err, SessionError::InvalidFeedback(_)));
    assert_eq!(session.state(), SessionState::AwaitingFeedback);
    assert_eq!(session.pending_guess(), Some(guess));
    assert_eq!(session.candidate_count(), CODE_SPACE_SIZE);
    assert_eq!(session.rounds(), 0);
}

#[test]
fn test_computer_finds_every_kind_of_secret() {
    for secret in ["0123", "9876", "4071", "5294", "1032"] {
        let secret = code(secret);
        let mut session = InferenceSession::computer_guessing();

        while !session.is_terminal() {
            let guess = session.propose_guess().unwrap();
            let feedback = Feedback::calculate(&guess, &secret);
            session
                .submit_feedback(feedback.bulls(), feedback.cows())
                .unwrap();
        }

        assert_eq!(session.history().last().unwrap().guess, secret);
    }
}

#[test]
fn test_lying_player_gets_contradiction() {
    let mut session = InferenceSession::computer_guessing();
    session.propose_guess().unwrap();
    session.submit_feedback(0, 0).unwrap();

    // 0123 scored (0,0), and every guess gets (0,4) until nothing fits
    while session.propose_guess().is_ok() {
        if session.submit_feedback(0, 4).is_err() {
            break;
        }
    }

    assert_eq!(session.state(), SessionState::Contradiction);
    assert_eq!(session.candidate_count(), 0);
    assert_eq!(session.propose_guess(), Err(SessionError::Contradiction));
}

#[test]
fn test_player_session_reports_rounds() {
    let mut session = InferenceSession::player_guessing_with_secret(code("1256"));

    let first = session.submit_guess("1234").unwrap();
    assert_eq!((first.bulls, first.cows), (2, 0));
    assert!(!first.terminal);

    assert!(matches!(
        session.submit_guess("12a4"),
        Err(SessionError::InvalidCode(_))
    ));
    assert_eq!(session.rounds(), 1);

    let last = session.submit_guess("1256").unwrap();
    assert!(last.terminal);
    assert_eq!(session.rounds(), 2);
    assert_eq!(session.reveal_secret(), Ok(code("1256")));
}
