//! Bulls & Cows
//!
//! An inference engine for the Bulls & Cows number-guessing game, playable in
//! both directions: the computer guesses your number, or you guess its number.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Code, Feedback};
//! use bulls_cows::solver::InferenceSession;
//!
//! let secret = Code::new("4071").unwrap();
//! let mut session = InferenceSession::computer_guessing();
//!
//! while !session.is_terminal() {
//!     let guess = session.propose_guess().unwrap();
//!     let feedback = Feedback::calculate(&guess, &secret);
//!     let result = session.submit_feedback(feedback.bulls(), feedback.cows()).unwrap();
//!     println!("{guess}: {feedback}, {} left", result.candidate_count);
//! }
//! ```

// Core domain types
pub mod core;

// Inference engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
