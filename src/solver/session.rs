//! Inference session
//!
//! One session drives a single game. The same engine serves both play modes:
//! - [`Role::Guesser`]: the engine proposes guesses and is told the feedback
//! - [`Role::Judge`]: the engine holds a secret and scores submitted guesses
//!
//! Either way, every non-winning round prunes the candidate set and recomputes
//! the entropy estimate, so both modes report the same progress figures.

use super::entropy::entropy;
use super::filter::filter;
use super::space::{CODE_SPACE_SIZE, CandidateSet, generate};
use super::strategy::{Strategy, StrategyType};
use crate::core::{Code, CodeError, Feedback, FeedbackError};
use rand::Rng;
use std::fmt;
use tracing::{debug, info, warn};

/// Which side of the game the engine plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Engine proposes guesses, the player supplies feedback
    Guesser,
    /// Engine holds the secret, the player submits guesses
    Judge,
}

/// Session state between calls
///
/// Filtering and reporting happen inside a single `submit_*` call, so they
/// never appear as resting states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Guesser: waiting for `propose_guess`
    AwaitingGuess,
    /// Judge: waiting for `submit_guess`
    AwaitingSubmission,
    /// Guesser: a guess was proposed, waiting for `submit_feedback`
    AwaitingFeedback,
    /// Solved; no further rounds
    Terminal,
    /// Feedback ruled out every candidate; no further rounds
    Contradiction,
}

/// Immutable log entry for one round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRecord {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidate_count: usize,
    pub entropy: f64,
}

/// Outcome of a round as reported to the caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    pub bulls: u8,
    pub cows: u8,
    pub candidate_count: usize,
    pub entropy: f64,
    pub terminal: bool,
}

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Submitted guess is not 4 distinct digits
    InvalidCode(CodeError),
    /// Submitted bulls/cows are out of range
    InvalidFeedback(FeedbackError),
    /// No candidate is consistent with the feedback given so far
    Contradiction,
    /// Feedback submitted before a guess was proposed
    NoPendingGuess,
    /// Operation belongs to the other play mode
    WrongRole(Role),
    /// The game was already solved
    Finished,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode(e) => write!(f, "Invalid guess: {e}"),
            Self::InvalidFeedback(e) => write!(f, "Invalid feedback: {e}"),
            Self::Contradiction => write!(f, "No number matches the feedback given so far"),
            Self::NoPendingGuess => write!(f, "No guess has been proposed yet"),
            Self::WrongRole(role) => write!(f, "Operation not available in {role:?} mode"),
            Self::Finished => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCode(e) => Some(e),
            Self::InvalidFeedback(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodeError> for SessionError {
    fn from(e: CodeError) -> Self {
        Self::InvalidCode(e)
    }
}

impl From<FeedbackError> for SessionError {
    fn from(e: FeedbackError) -> Self {
        Self::InvalidFeedback(e)
    }
}

/// A single game of Bulls & Cows
///
/// Owns its candidate set, secret (judge mode) and round log; nothing is shared
/// between sessions.
#[derive(Debug, Clone)]
pub struct InferenceSession {
    role: Role,
    state: SessionState,
    candidates: CandidateSet,
    secret: Option<Code>,
    pending: Option<Code>,
    strategy: StrategyType,
    history: Vec<RoundRecord>,
}

impl InferenceSession {
    /// Start a session where the engine guesses, using the default strategy
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::solver::InferenceSession;
    ///
    /// let mut session = InferenceSession::computer_guessing();
    /// assert_eq!(session.candidate_count(), 5040);
    ///
    /// let guess = session.propose_guess().unwrap();
    /// assert_eq!(guess.to_string(), "0123");
    ///
    /// let result = session.submit_feedback(1, 1).unwrap();
    /// assert!(result.candidate_count < 5040);
    /// assert!(!result.terminal);
    /// ```
    #[must_use]
    pub fn computer_guessing() -> Self {
        Self::computer_guessing_with(StrategyType::default())
    }

    /// Start a session where the engine guesses with the given strategy
    #[must_use]
    pub fn computer_guessing_with(strategy: StrategyType) -> Self {
        debug!(strategy = strategy.name(), "starting computer-guessing session");
        Self::with_role(Role::Guesser, None, strategy)
    }

    /// Start a session where the player guesses a uniformly random secret
    #[must_use]
    pub fn player_guessing<R: Rng>(rng: &mut R) -> Self {
        let secret = generate()[rng.random_range(0..CODE_SPACE_SIZE)];
        Self::player_guessing_with_secret(secret)
    }

    /// Start a player-guessing session with a known secret
    #[must_use]
    pub fn player_guessing_with_secret(secret: Code) -> Self {
        debug!("starting player-guessing session");
        Self::with_role(Role::Judge, Some(secret), StrategyType::default())
    }

    fn with_role(role: Role, secret: Option<Code>, strategy: StrategyType) -> Self {
        let state = match role {
            Role::Guesser => SessionState::AwaitingGuess,
            Role::Judge => SessionState::AwaitingSubmission,
        };

        Self {
            role,
            state,
            candidates: CandidateSet::full(),
            secret,
            pending: None,
            strategy,
            history: Vec::new(),
        }
    }

    /// Propose the next guess (computer-guessing mode)
    ///
    /// Calling again before feedback arrives returns the same guess.
    ///
    /// # Errors
    /// - `WrongRole` in player-guessing mode
    /// - `Finished` once solved
    /// - `Contradiction` if no candidates remain
    pub fn propose_guess(&mut self) -> Result<Code, SessionError> {
        self.require_role(Role::Guesser)?;
        self.require_open()?;

        if let Some(pending) = self.pending {
            return Ok(pending);
        }

        let Some(guess) = self.strategy.select_guess(&self.candidates) else {
            warn!("no candidates remain to propose");
            self.state = SessionState::Contradiction;
            return Err(SessionError::Contradiction);
        };

        debug!(%guess, remaining = self.candidates.len(), "proposing guess");
        self.pending = Some(guess);
        self.state = SessionState::AwaitingFeedback;
        Ok(guess)
    }

    /// Report the feedback for the pending guess (computer-guessing mode)
    ///
    /// Invalid counts are rejected without touching the session.
    ///
    /// # Errors
    /// - `WrongRole` in player-guessing mode
    /// - `Finished` once solved, `Contradiction` after a contradiction
    /// - `NoPendingGuess` if `propose_guess` was not called
    /// - `InvalidFeedback` for out-of-range counts
    /// - `Contradiction` if the feedback rules out every candidate
    pub fn submit_feedback(&mut self, bulls: u8, cows: u8) -> Result<RoundResult, SessionError> {
        self.require_role(Role::Guesser)?;
        self.require_open()?;

        let guess = self.pending.ok_or(SessionError::NoPendingGuess)?;
        let feedback = Feedback::new(bulls, cows)?;

        self.pending = None;
        self.state = SessionState::AwaitingGuess;
        self.play_round(guess, feedback)
    }

    /// Submit a guess against the secret (player-guessing mode)
    ///
    /// # Errors
    /// - `WrongRole` in computer-guessing mode
    /// - `Finished` once solved
    /// - `InvalidCode` unless the guess is exactly 4 distinct digits
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Code;
    /// use bulls_cows::solver::InferenceSession;
    ///
    /// let secret = Code::new("1256").unwrap();
    /// let mut session = InferenceSession::player_guessing_with_secret(secret);
    ///
    /// let result = session.submit_guess("1234").unwrap();
    /// assert_eq!((result.bulls, result.cows), (2, 0));
    ///
    /// assert!(session.submit_guess("1123").is_err());
    /// assert!(session.submit_guess("1256").unwrap().terminal);
    /// ```
    pub fn submit_guess(&mut self, guess: &str) -> Result<RoundResult, SessionError> {
        self.require_role(Role::Judge)?;
        self.require_open()?;

        let guess = Code::new(guess)?;
        let secret = self.secret.ok_or(SessionError::WrongRole(self.role))?;
        let feedback = Feedback::calculate(&guess, &secret);

        self.play_round(guess, feedback)
    }

    /// Return the secret without changing the session (player-guessing mode)
    ///
    /// # Errors
    /// Returns `WrongRole` in computer-guessing mode.
    pub fn reveal_secret(&self) -> Result<Code, SessionError> {
        self.secret.ok_or(SessionError::WrongRole(self.role))
    }

    fn play_round(&mut self, guess: Code, feedback: Feedback) -> Result<RoundResult, SessionError> {
        if feedback.is_solved() {
            self.state = SessionState::Terminal;
            let record = self.record(guess, feedback);
            info!(%guess, rounds = self.history.len(), "solved");
            return Ok(Self::result(record, true));
        }

        self.candidates = filter(&self.candidates, &guess, feedback);
        let record = self.record(guess, feedback);
        debug!(
            %guess,
            %feedback,
            remaining = record.candidate_count,
            entropy = record.entropy,
            "round complete"
        );

        if self.candidates.is_empty() {
            warn!(%guess, %feedback, "feedback contradicts every candidate");
            self.state = SessionState::Contradiction;
            return Err(SessionError::Contradiction);
        }

        Ok(Self::result(record, false))
    }

    fn record(&mut self, guess: Code, feedback: Feedback) -> RoundRecord {
        let candidate_count = self.candidates.len();
        let record = RoundRecord {
            guess,
            feedback,
            candidate_count,
            entropy: entropy(candidate_count),
        };
        self.history.push(record);
        record
    }

    const fn result(record: RoundRecord, terminal: bool) -> RoundResult {
        RoundResult {
            bulls: record.feedback.bulls(),
            cows: record.feedback.cows(),
            candidate_count: record.candidate_count,
            entropy: record.entropy,
            terminal,
        }
    }

    fn require_role(&self, role: Role) -> Result<(), SessionError> {
        if self.role == role {
            Ok(())
        } else {
            Err(SessionError::WrongRole(self.role))
        }
    }

    const fn require_open(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Terminal => Err(SessionError::Finished),
            SessionState::Contradiction => Err(SessionError::Contradiction),
            _ => Ok(()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.state, SessionState::Terminal)
    }

    /// The guess awaiting feedback, if any
    #[inline]
    #[must_use]
    pub const fn pending_guess(&self) -> Option<Code> {
        self.pending
    }

    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Current uncertainty in bits
    #[must_use]
    pub fn entropy(&self) -> f64 {
        entropy(self.candidates.len())
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Round log, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }
}
