//! Bulls & Cows inference engine
//!
//! Code space generation, constraint filtering, entropy estimation, guess
//! selection and the session that ties them together.

pub mod entropy;
mod filter;
mod session;
mod space;
pub mod strategy;

pub use filter::{filter, is_consistent};
pub use session::{InferenceSession, Role, RoundRecord, RoundResult, SessionError, SessionState};
pub use space::{CODE_SPACE_SIZE, CandidateSet, generate};
pub use strategy::{FirstCandidate, RandomCandidate, Strategy, StrategyType, next_guess};
