//! Display functions for command results

use super::formatters::{entropy_bar, feedback_badge};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::InferenceSession;
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.rounds.iter().enumerate() {
        let turn = i + 1;
        println!("\nTurn {turn}: {} {}", step.guess, feedback_badge(step.feedback));

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);

            // Information gained (reduction in uncertainty)
            if step.candidates_after > 0 && !step.feedback.is_solved() {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved within {} rounds", result.rounds.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FEEDBACK ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.max_partition);

    println!("\n📈 {}", "Feedback buckets:".bright_cyan().bold());
    for &(feedback, count) in &result.buckets {
        let pct = count as f64 / result.total_candidates as f64 * 100.0;
        let bar_width = (pct / 2.5) as usize;
        println!(
            "   {}  {}{} {count:5} ({pct:5.1}%)",
            feedback_badge(feedback),
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut rounds: Vec<_> = result.distribution.iter().collect();
    rounds.sort_unstable();
    for (&round_count, &count) in rounds {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {round_count:2}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.hardest.is_empty() {
        println!("\n🐢 {}", "Hardest secrets:".bright_cyan().bold());
        for (secret, round_count) in &result.hardest {
            println!("   {secret}  {round_count} rounds");
        }
    }
}

/// Print a win banner followed by the round log of a finished session
pub fn print_round_summary(session: &InferenceSession, headline: &str) {
    let rounds = session.rounds();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        format!("    🎉 🐂  {headline}  🐄 🎉    ")
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match rounds {
        1 => ("🏆 Perfect!", "Incredible first-try hit!"),
        2..=4 => ("⭐ Excellent!", "Outstanding performance!"),
        5 | 6 => ("✨ Good!", "Nice work!"),
        _ => ("✓ Complete!", "Success!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solved in {} {}",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "round" } else { "rounds" }
    );

    println!("\n  Round history:");
    for (i, round) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}  {} left",
            (i + 1).to_string().bright_black(),
            round.guess.to_string().bright_white().bold(),
            feedback_badge(round.feedback),
            round.candidate_count
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}
