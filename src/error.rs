use thiserror::Error;

/// Errors terminal for the current run. There is no retry path: a
/// failed trial aborts the whole run with no partial results.
///
/// An unrecognized distribution name is deliberately absent here; it
/// falls back to the multimodal generator instead (see
/// [`DistributionKind`](crate::DistributionKind)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The requested population is empty.
    #[error("population size must be positive (got {size})")]
    InvalidPopulationSize { size: usize },

    /// The computed sample size is zero or exceeds the population,
    /// i.e. the sample percentage was 0, above 100, or the population
    /// too small to yield a single sampled element.
    #[error("sample size {sample_size} is invalid for a population of {population_size}")]
    InvalidSampleSize {
        sample_size: usize,
        population_size: usize,
    },

    /// Standard error uses Bessel's correction and is undefined for
    /// fewer than two trials.
    #[error("standard error requires at least 2 trials (got {trials})")]
    InsufficientTrials { trials: usize },
}
