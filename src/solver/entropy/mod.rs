//! Uncertainty measures over the candidate set
//!
//! `estimator` gives the headline uncertainty shown after every round;
//! `partition` scores how a single guess would split the candidates.

mod estimator;
mod partition;

pub use estimator::{ENTROPY_FLOOR, entropy};
pub use partition::{
    GuessMetrics, calculate_metrics, metrics_from_counts, partition, shannon_entropy,
};
