//! Challenge mode
//!
//! Text-based player-guessing game: the engine picks a secret and judges your guesses.

use super::simple::get_user_input;
use crate::output::formatters::feedback_badge;
use crate::output::print_round_summary;
use crate::solver::InferenceSession;
use rand::Rng;

/// Run the challenge CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_challenge<R: Rng>(rng: &mut R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Bulls & Cows - Guess My Number                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I've picked a 4-digit number with no repeated digits.");
    println!("Each guess scores bulls (right digit, right place) and cows");
    println!("(right digit, wrong place).\n");
    println!("Commands: 'reveal' to show the number, 'new' for new game, 'quit' to exit\n");

    let mut session = InferenceSession::player_guessing(rng);

    loop {
        let turn = session.rounds() + 1;
        let input = get_user_input(&format!("Guess #{turn}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = InferenceSession::player_guessing(rng);
                println!("\n🔄 New number picked!\n");
            }
            "reveal" | "r" => match session.reveal_secret() {
                Ok(secret) => println!("\n🔓 The number is {secret}\n"),
                Err(e) => println!("❌ {e}\n"),
            },
            _ => match session.submit_guess(&input) {
                Ok(result) if result.terminal => {
                    print_round_summary(&session, "Y O U  G O T  I T !");

                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            session = InferenceSession::player_guessing(rng);
                            println!("\n🔄 New number picked!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
                Ok(result) => {
                    if let Some(round) = session.history().last() {
                        println!(
                            "  {} {}   ({} numbers still possible, {:.2} bits)\n",
                            round.guess,
                            feedback_badge(round.feedback),
                            result.candidate_count,
                            result.entropy
                        );
                    }
                }
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }
}
