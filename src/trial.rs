//! Repeated-trial aggregation: run independent generate-and-analyze
//! trials and measure the spread of the sampled estimator across them.

use rand::Rng;

use crate::distribution::{generate, DistributionKind};
use crate::error::SimError;
use crate::percentile::{analyze, TrialRecord};
use crate::stats::summarize;

/// One run: a distribution family with the population, trial and
/// sampling parameters applied to it.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Data points generated per trial (N).
    pub population_size: usize,
    /// Number of independent trials (Z).
    pub trials: usize,
    /// Percentage of the population drawn into each sample (M).
    pub sample_percent: f64,
    pub kind: DistributionKind,
}

/// Standard error of the sampled p90/p95/p99 across all trials of a
/// run. Order of accumulation does not affect it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardErrorTriple {
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl StandardErrorTriple {
    fn from_records(records: &[TrialRecord]) -> Self {
        let column = |f: fn(&TrialRecord) -> f64| -> f64 {
            let values: Vec<f64> = records.iter().map(f).collect();
            summarize(&values).se
        };
        StandardErrorTriple {
            p90: column(|r| r.sampled.p90),
            p95: column(|r| r.sampled.p95),
            p99: column(|r| r.sampled.p99),
        }
    }
}

/// All numeric output of one run, in trial order.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub records: Vec<TrialRecord>,
    pub standard_error: StandardErrorTriple,
}

/// Runs `config.trials` independent trials: generate a fresh
/// population, analyze it, record the percentile pair. After the last
/// trial the standard error of the sampled percentiles is computed
/// across all records.
///
/// The observer is the reporting/plotting seam: it receives the trial
/// index, the clamped population of that trial and its record, and may
/// print or persist them. The core itself performs no I/O.
///
/// Fail-fast: the first failing trial aborts the run with no partial
/// results.
///
/// # Errors
///
/// [`SimError::InsufficientTrials`] when fewer than two trials are
/// requested, plus any generation or analysis error.
pub fn run_trials<R, F>(
    config: &RunConfig,
    rng: &mut R,
    mut observer: F,
) -> Result<RunResult, SimError>
where
    R: Rng,
    F: FnMut(usize, &[f64], &TrialRecord),
{
    if config.trials < 2 {
        return Err(SimError::InsufficientTrials {
            trials: config.trials,
        });
    }

    let mut records = Vec::with_capacity(config.trials);
    for trial in 0..config.trials {
        let mut population = generate(config.population_size, config.kind, rng)?;
        let record = analyze(&mut population, config.sample_percent, rng)?;
        observer(trial, &population, &record);
        records.push(record);
    }

    let standard_error = StandardErrorTriple::from_records(&records);
    Ok(RunResult {
        records,
        standard_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(kind: DistributionKind) -> RunConfig {
        RunConfig {
            population_size: 400,
            trials: 4,
            sample_percent: 25.0,
            kind,
        }
    }

    #[test]
    fn test_record_count_matches_trials() {
        let mut rng = StdRng::seed_from_u64(21);
        let result = run_trials(&config(DistributionKind::Weibull), &mut rng, |_, _, _| {}).unwrap();
        assert_eq!(result.records.len(), 4);
    }

    #[test]
    fn test_standard_error_is_non_negative() {
        for kind in [
            DistributionKind::Lognormal,
            DistributionKind::Weibull,
            DistributionKind::Pareto,
            DistributionKind::Multimodal,
        ] {
            let mut rng = StdRng::seed_from_u64(22);
            let result = run_trials(&config(kind), &mut rng, |_, _, _| {}).unwrap();
            let se = result.standard_error;
            assert!(se.p90 >= 0.0 && se.p90.is_finite(), "{kind}");
            assert!(se.p95 >= 0.0 && se.p95.is_finite(), "{kind}");
            assert!(se.p99 >= 0.0 && se.p99.is_finite(), "{kind}");
        }
    }

    #[test]
    fn test_fewer_than_two_trials_is_rejected() {
        for trials in [0, 1] {
            let mut rng = StdRng::seed_from_u64(23);
            let cfg = RunConfig {
                trials,
                ..config(DistributionKind::Lognormal)
            };
            let err = run_trials(&cfg, &mut rng, |_, _, _| {}).unwrap_err();
            assert_eq!(err, SimError::InsufficientTrials { trials });
        }
    }

    #[test]
    fn test_observer_sees_clamped_populations_in_order() {
        let mut rng = StdRng::seed_from_u64(24);
        let mut seen = Vec::new();
        run_trials(&config(DistributionKind::Weibull), &mut rng, |i, pop, record| {
            assert_eq!(pop.len(), 400);
            assert!(pop.iter().all(|&v| v >= 1.0));
            seen.push((i, *record));
        })
        .unwrap();
        let indices: Vec<usize> = seen.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_observed_records_match_returned_records() {
        let mut rng = StdRng::seed_from_u64(25);
        let mut seen = Vec::new();
        let result = run_trials(&config(DistributionKind::Pareto), &mut rng, |_, _, record| {
            seen.push(*record);
        })
        .unwrap();
        assert_eq!(seen, result.records);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut rng_a = StdRng::seed_from_u64(26);
        let mut rng_b = StdRng::seed_from_u64(26);
        let a = run_trials(&config(DistributionKind::Lognormal), &mut rng_a, |_, _, _| {}).unwrap();
        let b = run_trials(&config(DistributionKind::Lognormal), &mut rng_b, |_, _, _| {}).unwrap();
        assert_eq!(a.records, b.records);
        assert_eq!(a.standard_error, b.standard_error);
    }

    #[test]
    fn test_invalid_sample_percent_aborts_run() {
        let mut rng = StdRng::seed_from_u64(27);
        let cfg = RunConfig {
            sample_percent: 0.0,
            ..config(DistributionKind::Lognormal)
        };
        let mut observed = 0;
        let err = run_trials(&cfg, &mut rng, |_, _, _| observed += 1).unwrap_err();
        assert_eq!(
            err,
            SimError::InvalidSampleSize {
                sample_size: 0,
                population_size: 400,
            }
        );
        // Fail-fast: the observer never fires for a failed trial.
        assert_eq!(observed, 0);
    }
}
