//! Histogram collaborator: buckets a clamped population and writes one
//! plottable artifact per trial. Bucketing, file naming and failure
//! policy all live here, outside the core.

use std::fs;
use std::path::Path;

use tailsample::DistributionKind;

/// Equal-width bins per histogram.
const HISTOGRAM_BINS: usize = 50;

/// Writes `latency_distribution_{timestamp}_{trial}_{kind}.csv` into
/// `dir`, one `bin_start,bin_end,count` row per bin.
pub fn write_histogram(
    dir: &Path,
    data: &[f64],
    timestamp: u64,
    trial: usize,
    kind: DistributionKind,
) {
    let path = dir.join(format!(
        "latency_distribution_{}_{}_{}.csv",
        timestamp,
        trial + 1,
        kind
    ));

    let mut csv = String::from("bin_start,bin_end,count\n");
    for (start, end, count) in bucket(data) {
        csv.push_str(&format!("{:.6},{:.6},{}\n", start, end, count));
    }
    fs::write(&path, csv).expect("Failed to write histogram artifact");
}

fn bucket(data: &[f64]) -> Vec<(f64, f64, usize)> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / HISTOGRAM_BINS as f64;

    // A flat population collapses into a single bin.
    if data.is_empty() || width == 0.0 {
        return vec![(min, max, data.len())];
    }

    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for &value in data {
        let bin = (((value - min) / width) as usize).min(HISTOGRAM_BINS - 1);
        counts[bin] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = min + i as f64 * width;
            (start, start + width, count)
        })
        .collect()
}
