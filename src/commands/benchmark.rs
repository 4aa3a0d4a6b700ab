//! Benchmark command
//!
//! Plays the engine against many secrets and reports how many rounds it needs.

use crate::core::{Code, Feedback};
use crate::solver::{InferenceSession, StrategyType, generate};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    /// Number of random secrets; ignored when `all` is set
    pub count: usize,
    /// Play every code in the space
    pub all: bool,
    /// Strategy name, see [`StrategyType::from_name`]
    pub strategy: String,
    pub seed: u64,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(count: usize, strategy: &str, seed: u64) -> Self {
        Self {
            count,
            all: false,
            strategy: strategy.to_string(),
            seed,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_games: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub failed: usize,
    pub distribution: FxHashMap<usize, usize>,
    /// Secrets that took the most rounds, hardest first
    pub hardest: Vec<(Code, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Pick the secrets a benchmark plays against
#[must_use]
pub fn select_secrets(config: &BenchmarkConfig) -> Vec<Code> {
    let space = generate();

    if config.all {
        return space;
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    space
        .choose_multiple(&mut rng, config.count)
        .copied()
        .collect()
}

/// Play one full game against `secret`
///
/// Returns the number of rounds, or `None` if the session failed.
fn play_game(secret: &Code, strategy: StrategyType) -> Option<usize> {
    let mut session = InferenceSession::computer_guessing_with(strategy);

    loop {
        let guess = session.propose_guess().ok()?;
        let feedback = Feedback::calculate(&guess, secret);
        let result = session
            .submit_feedback(feedback.bulls(), feedback.cows())
            .ok()?;

        if result.terminal {
            return Some(session.rounds());
        }
    }
}

/// Run a benchmark on the given secrets, one independent session per secret
pub fn run_benchmark(config: &BenchmarkConfig, secrets: &[Code]) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let strategy_name = StrategyType::from_name(&config.strategy, config.seed).name();

    let outcomes: Vec<(Code, Option<usize>)> = secrets
        .par_iter()
        .enumerate()
        .map(|(i, secret)| {
            // Each game gets its own strategy so random runs stay reproducible
            let strategy =
                StrategyType::from_name(&config.strategy, config.seed.wrapping_add(i as u64));
            let rounds = play_game(secret, strategy);
            pb.inc(1);
            (*secret, rounds)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let solved: Vec<(Code, usize)> = outcomes
        .iter()
        .filter_map(|&(secret, rounds)| rounds.map(|n| (secret, n)))
        .collect();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for &(_, rounds) in &solved {
        *distribution.entry(rounds).or_insert(0) += 1;
    }

    let total_rounds: usize = solved.iter().map(|&(_, n)| n).sum();
    let average_rounds = if solved.is_empty() {
        0.0
    } else {
        total_rounds as f64 / solved.len() as f64
    };

    let mut hardest = solved.clone();
    hardest.sort_by_key(|&(secret, n)| (std::cmp::Reverse(n), secret));
    hardest.truncate(10);

    let total_games = secrets.len();
    info!(
        games = total_games,
        average = average_rounds,
        elapsed_ms = duration.as_millis() as u64,
        "benchmark finished"
    );

    BenchmarkResult {
        strategy: strategy_name,
        total_games,
        total_rounds,
        average_rounds,
        min_rounds: solved.iter().map(|&(_, n)| n).min().unwrap_or(0),
        max_rounds: solved.iter().map(|&(_, n)| n).max().unwrap_or(0),
        failed: total_games - solved.len(),
        distribution,
        hardest,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
