//! Bulls & Cows - CLI
//!
//! Bulls & Cows with TUI and CLI modes: the computer guesses your number, or you guess its number.

use anyhow::Result;
use bulls_cows::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_code, run_benchmark, run_challenge, run_simple,
        select_secrets, solve_code,
    },
    interactive::{App, PlayMode, run_tui},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::StrategyType,
};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls & Cows: let the computer guess your number, or guess its number",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: first (default, lowest remaining candidate) or random
    #[arg(short, long, global = true, default_value = "first")]
    strategy: String,

    /// Seed for the random number generator (random strategy, secret selection)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Which side you play
        #[arg(short, long, value_enum, default_value = "computer")]
        mode: PlayMode,
    },

    /// Simple CLI mode: the computer guesses your number
    Simple,

    /// Challenge CLI mode: you guess the computer's number
    Challenge,

    /// Solve a specific secret number
    Solve {
        /// The secret to solve, 4 distinct digits
        code: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze how a guess splits the full code space
    Analyze {
        /// Guess to analyze
        code: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Test every one of the 5040 possible secrets
        #[arg(short, long)]
        all: bool,
    },
}

/// Log level used when `RUST_LOG` is not set
///
/// The TUI draws on the same terminal that stderr points at, so it stays silent.
const fn default_log_level(command: &Commands) -> &'static str {
    match command {
        Commands::Play { .. } => "off",
        _ => "warn",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        mode: PlayMode::Computer,
    });

    // Logs go to stderr so they never mix with game output; RUST_LOG overrides the level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_level(&command))),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    debug!(seed, strategy = %cli.strategy, "starting");

    match command {
        Commands::Play { mode } => {
            let strategy = StrategyType::from_name(&cli.strategy, seed);
            run_tui(App::new(mode, strategy, seed))
        }
        Commands::Simple => {
            let strategy = StrategyType::from_name(&cli.strategy, seed);
            run_simple(&strategy).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Challenge => {
            let mut rng = StdRng::seed_from_u64(seed);
            run_challenge(&mut rng).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { code, verbose } => run_solve_command(&cli.strategy, seed, code, verbose),
        Commands::Analyze { code } => {
            let result = analyze_code(&code).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, all } => {
            run_benchmark_command(&cli.strategy, seed, count, all);
            Ok(())
        }
    }
}

fn run_solve_command(strategy_name: &str, seed: u64, code: String, verbose: bool) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name, seed);
    let config = SolveConfig::new(code);
    let result = solve_code(config, strategy).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(strategy_name: &str, seed: u64, count: usize, all: bool) {
    let mut config = BenchmarkConfig::new(count, strategy_name, seed);
    config.all = all;

    let secrets = select_secrets(&config);
    println!(
        "Running benchmark on {} secrets with the '{strategy_name}' strategy...",
        secrets.len()
    );

    let result = run_benchmark(&config, &secrets);
    print_benchmark_result(&result);
}
