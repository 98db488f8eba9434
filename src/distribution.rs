//! Synthetic latency generation under heavy-tailed distribution families.
//!
//! Parameters are fixed: the point of the simulation is the sampling
//! error of the percentile estimator, not fitting the population shape
//! to real data.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use rand::distributions::WeightedIndex;
use rand::Rng;
use rand_distr::{Distribution, LogNormal, Normal, Pareto, Weibull};

use crate::error::SimError;

/// Mean of the underlying normal for the lognormal family.
const LOGNORMAL_MU: f64 = 0.5;
/// Standard deviation of the underlying normal for the lognormal family.
const LOGNORMAL_SIGMA: f64 = 0.75;

/// Weibull shape parameter.
const WEIBULL_SHAPE: f64 = 2.0;
/// Weibull scale parameter.
const WEIBULL_SCALE: f64 = 2.0;

/// Pareto tail index.
const PARETO_SHAPE: f64 = 3.0;
/// Scale applied to Pareto draws.
const PARETO_SCALE: f64 = 1.5;

/// Latency modes (seconds) for the multimodal family.
const MODES: [f64; 4] = [1.5, 2.5, 3.5, 4.5];
/// Selection weights for [`MODES`].
const MODE_WEIGHTS: [f64; 4] = [0.8, 0.1, 0.05, 0.05];
/// Standard deviation of the noise added to each mode draw.
const MODE_NOISE_SD: f64 = 0.2;

/// The closed set of supported latency distribution families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionKind {
    Lognormal,
    Weibull,
    Pareto,
    /// Discrete latency modes plus Gaussian noise. Also the fallback
    /// for any unrecognized distribution name: parsing never fails.
    Multimodal,
}

impl FromStr for DistributionKind {
    type Err = Infallible;

    /// Parses a distribution name. Unrecognized names fall back to
    /// [`DistributionKind::Multimodal`]; this is defined behavior, not
    /// an error path.
    fn from_str(name: &str) -> Result<Self, Infallible> {
        Ok(match name {
            "lognormal" => DistributionKind::Lognormal,
            "weibull" => DistributionKind::Weibull,
            "pareto" => DistributionKind::Pareto,
            _ => DistributionKind::Multimodal,
        })
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl DistributionKind {
    /// Lowercase label used in reports and artifact file names.
    pub fn label(self) -> &'static str {
        match self {
            DistributionKind::Lognormal => "lognormal",
            DistributionKind::Weibull => "weibull",
            DistributionKind::Pareto => "pareto",
            DistributionKind::Multimodal => "multimodal",
        }
    }
}

/// Generates a population of `n` synthetic latency values (seconds)
/// from the given family. Values can fall below 1.0 here; the clamp to
/// the minimum observable latency happens in the analysis step.
pub fn generate(
    n: usize,
    kind: DistributionKind,
    rng: &mut impl Rng,
) -> Result<Vec<f64>, SimError> {
    if n == 0 {
        return Err(SimError::InvalidPopulationSize { size: n });
    }

    let data = match kind {
        DistributionKind::Lognormal => {
            let dist = LogNormal::new(LOGNORMAL_MU, LOGNORMAL_SIGMA)
                .expect("lognormal parameters are fixed and valid");
            (0..n).map(|_| dist.sample(rng)).collect()
        }
        DistributionKind::Weibull => {
            let dist = Weibull::new(WEIBULL_SCALE, WEIBULL_SHAPE)
                .expect("weibull parameters are fixed and valid");
            (0..n).map(|_| dist.sample(rng)).collect()
        }
        DistributionKind::Pareto => {
            // A Lomax(shape) draw shifted by +1 is a Pareto draw with
            // scale 1, so the shift folds into the support.
            let dist = Pareto::new(1.0, PARETO_SHAPE)
                .expect("pareto parameters are fixed and valid");
            (0..n).map(|_| dist.sample(rng) * PARETO_SCALE).collect()
        }
        DistributionKind::Multimodal => {
            let modes = WeightedIndex::new(MODE_WEIGHTS)
                .expect("mode weights are fixed and valid");
            let noise = Normal::new(0.0, MODE_NOISE_SD)
                .expect("noise parameters are fixed and valid");
            (0..n)
                .map(|_| MODES[modes.sample(rng)] + noise.sample(rng))
                .collect()
        }
    };

    Ok(data)
}
