//! TailSample: Monte-Carlo validation of sampled latency percentiles.
//!
//! A latency-monitoring strategy that records only a fraction of all
//! service calls trades storage for statistical error. TailSample
//! quantifies that trade: it synthesizes heavy-tailed latency
//! populations, estimates p90/p95/p99 on the full population and on a
//! uniform subsample, repeats over independent trials, and reports the
//! standard error of the sampled estimator across trials.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tailsample::{run_trials, DistributionKind, RunConfig};
//!
//! let config = RunConfig {
//!     population_size: 1_000,
//!     trials: 3,
//!     sample_percent: 20.0,
//!     kind: DistributionKind::Lognormal,
//! };
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = run_trials(&config, &mut rng, |_, _, _| {}).unwrap();
//!
//! assert_eq!(result.records.len(), 3);
//! assert!(result.standard_error.p90 >= 0.0);
//! ```
//!
//! The core is pure computation: it owns no I/O. Reporting and plotting
//! consume the raw numbers through the observer passed to
//! [`run_trials`] and through the returned [`RunResult`].

mod distribution;
mod error;
mod percentile;
mod stats;
mod trial;

pub use distribution::{generate, DistributionKind};
pub use error::SimError;
pub use percentile::{analyze, PercentileTriple, TrialRecord};
pub use stats::{summarize, Stats};
pub use trial::{run_trials, RunConfig, RunResult, StandardErrorTriple};
