//! Summary statistics over repeated-trial outcomes.

/// Mean, sample standard deviation and standard error of a series of
/// trial outcomes.
#[derive(Debug, Clone, Copy)]
pub struct Stats {
    pub mean: f64,
    /// Sample standard deviation (Bessel's correction).
    pub sd: f64,
    /// Standard error: `sd / sqrt(n)`.
    pub se: f64,
}

/// Summarizes a series of values. Fewer than two values yields zeroed
/// spread figures; callers that need a defined standard error reject
/// that case up front.
pub fn summarize(values: &[f64]) -> Stats {
    let n = values.len() as f64;
    if n < 2.0 {
        let mean = if n > 0.0 { values[0] } else { 0.0 };
        return Stats {
            mean,
            sd: 0.0,
            se: 0.0,
        };
    }
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let sd = variance.sqrt();
    let se = sd / n.sqrt();
    Stats { mean, sd, se }
}
