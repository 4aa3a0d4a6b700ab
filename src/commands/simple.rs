//! Simple interactive CLI mode
//!
//! Text-based computer-guessing game without TUI: the engine guesses your number.

use crate::core::Feedback;
use crate::output::formatters::feedback_badge;
use crate::output::print_round_summary;
use crate::solver::{InferenceSession, SessionError, StrategyType};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(strategy: &StrategyType) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Bulls & Cows - I Guess Your Number                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a 4-digit number with no repeated digits (e.g. 0597).");
    println!("After each guess, tell me the bulls and cows:\n");
    println!("  - Bulls: right digit in the right place");
    println!("  - Cows:  right digit in the wrong place");
    println!("  - Type them as '21', '2 1' or '2b1c', or 'win' if I got it!\n");
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let mut session = InferenceSession::computer_guessing_with(strategy.clone());

    loop {
        let guess = match session.propose_guess() {
            Ok(guess) => guess,
            Err(SessionError::Contradiction) => {
                println!("\n❌ No number matches the feedback given so far.");
                println!("Type 'new' to start over or 'quit' to exit.\n");

                match get_user_input("Command")?.to_lowercase().as_str() {
                    "new" | "n" => {
                        session = InferenceSession::computer_guessing_with(strategy.clone());
                        println!("\n🔄 New game started!\n");
                    }
                    "quit" | "q" | "exit" => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    _ => {}
                }
                continue;
            }
            Err(e) => return Err(e.to_string()),
        };

        let turn = session.rounds() + 1;
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {turn}: {} candidates remaining ({:.3} bits)",
            session.candidate_count(),
            session.entropy()
        );
        println!("────────────────────────────────────────────────────────────");
        println!("\n🎯 My guess: {guess}\n");

        if session.candidate_count() <= 10 {
            println!("Remaining candidates:");
            for candidate in session.candidates() {
                println!("  • {candidate}");
            }
            println!();
        }

        // Get feedback
        let feedback = loop {
            let input = get_user_input("Bulls and cows")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "win" | "correct" | "yes" | "solved" => break Some(Feedback::SOLVED),
                _ => match Feedback::parse(&input) {
                    Ok(feedback) => break Some(feedback),
                    Err(e) => println!("❌ {e}\n"),
                },
            }
        };

        let Some(feedback) = feedback else {
            session = InferenceSession::computer_guessing_with(strategy.clone());
            continue;
        };

        match session.submit_feedback(feedback.bulls(), feedback.cows()) {
            Ok(result) if result.terminal => {
                print_round_summary(&session, "I  G O T  I T !");

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        session = InferenceSession::computer_guessing_with(strategy.clone());
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            Ok(result) => {
                println!(
                    "\n{} → {} candidates left\n",
                    feedback_badge(feedback),
                    result.candidate_count
                );
            }
            // Surfaced at the top of the loop
            Err(SessionError::Contradiction) => {}
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

/// Get user input with a prompt
pub(crate) fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
