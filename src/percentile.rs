//! Percentile estimation on a full population and on a uniform
//! subsample drawn from it without replacement.

use rand::Rng;

use crate::error::SimError;

/// Minimum observable latency in seconds. Generated values below this
/// are clamped up before any percentile is computed.
const LATENCY_FLOOR: f64 = 1.0;

/// The p90/p95/p99 of one dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileTriple {
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl PercentileTriple {
    /// Computes the triple from ascending-sorted, non-empty data using
    /// linear interpolation between closest ranks.
    fn from_sorted(sorted: &[f64]) -> Self {
        PercentileTriple {
            p90: percentile(sorted, 90.0),
            p95: percentile(sorted, 95.0),
            p99: percentile(sorted, 99.0),
        }
    }
}

/// Percentile triples for one trial: the full population next to the
/// subsample drawn from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    pub full: PercentileTriple,
    pub sampled: PercentileTriple,
}

/// Linear-interpolation percentile on ascending-sorted data: the rank
/// is `p/100 * (len - 1)`, and the value interpolates between the two
/// nearest ranks.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

/// Draws `k` elements from `data` uniformly without replacement via a
/// partial Fisher-Yates shuffle over an index vector, so duplicate
/// values stay distinguishable by position.
fn sample_without_replacement(rng: &mut impl Rng, data: &[f64], k: usize) -> Vec<f64> {
    let mut indices: Vec<usize> = (0..data.len()).collect();
    for i in 0..k {
        let j = rng.gen_range(i..indices.len());
        indices.swap(i, j);
    }
    indices.truncate(k);
    indices.into_iter().map(|i| data[i]).collect()
}

/// Clamps every value below the latency floor up to it, then computes
/// the percentile triple of the full population and of a uniform
/// without-replacement sample of `floor(sample_percent/100 * N)`
/// elements.
///
/// The clamp happens in place so the caller hands the exact analyzed
/// population on to reporting or plotting afterwards.
///
/// # Errors
///
/// [`SimError::InvalidPopulationSize`] for an empty population, and
/// [`SimError::InvalidSampleSize`] when the computed sample size is 0
/// or exceeds the population.
pub fn analyze(
    population: &mut [f64],
    sample_percent: f64,
    rng: &mut impl Rng,
) -> Result<TrialRecord, SimError> {
    if population.is_empty() {
        return Err(SimError::InvalidPopulationSize { size: 0 });
    }

    for value in population.iter_mut() {
        if *value < LATENCY_FLOOR {
            *value = LATENCY_FLOOR;
        }
    }

    let mut sorted = population.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let full = PercentileTriple::from_sorted(&sorted);

    let sample_size = (sample_percent / 100.0 * population.len() as f64).floor() as usize;
    if sample_size == 0 || sample_size > population.len() {
        return Err(SimError::InvalidSampleSize {
            sample_size,
            population_size: population.len(),
        });
    }

    let mut sample = sample_without_replacement(rng, population, sample_size);
    sample.sort_unstable_by(f64::total_cmp);
    let sampled = PercentileTriple::from_sorted(&sample);

    Ok(TrialRecord { full, sampled })
}
