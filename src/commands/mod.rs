//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod challenge;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_code};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, select_secrets};
pub use challenge::run_challenge;
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};
