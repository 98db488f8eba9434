//! Textual reporting for simulation runs: per-trial percentile lines,
//! final standard errors, a summary table and CSV export.

use std::fs;
use std::path::Path;

use tailsample::{summarize, DistributionKind, RunResult, StandardErrorTriple, TrialRecord};

/// Prints the full and sampled percentile triples of one trial.
pub fn print_iteration(trial: usize, record: &TrialRecord) {
    println!("Iteration {}:", trial + 1);
    println!(
        "  Full Data Percentiles: p90={:.2} s, p95={:.2} s, p99={:.2} s",
        record.full.p90, record.full.p95, record.full.p99
    );
    println!(
        "  Sampled Data Percentiles: p90={:.2} s, p95={:.2} s, p99={:.2} s",
        record.sampled.p90, record.sampled.p95, record.sampled.p99
    );
}

/// Prints the standard errors of the sampled percentiles across all
/// trials of a run.
pub fn print_standard_errors(se: &StandardErrorTriple) {
    println!("  Sampled Data p90 SE: {:.2}", se.p90);
    println!("  Sampled Data p95 SE: {:.2}", se.p95);
    println!("  Sampled Data p99 SE: {:.2}", se.p99);
}

/// Prints per-percentile spread of the sampled estimator across trials.
pub fn print_summary_table(kind: DistributionKind, result: &RunResult) {
    let rows = [
        ("p90", column(result, |r| r.sampled.p90), column(result, |r| r.full.p90)),
        ("p95", column(result, |r| r.sampled.p95), column(result, |r| r.full.p95)),
        ("p99", column(result, |r| r.sampled.p99), column(result, |r| r.full.p99)),
    ];

    println!();
    println!(
        "Sampled estimator spread - {} ({} trials)",
        kind,
        result.records.len()
    );
    println!("┌────────────┬────────────┬──────────────┬────────────┬────────────┐");
    println!("│ Percentile │ Full mean  │ Sampled mean │ Sampled SD │ Sampled SE │");
    println!("├────────────┼────────────┼──────────────┼────────────┼────────────┤");
    for (label, sampled, full) in rows {
        let sampled_stats = summarize(&sampled);
        let full_stats = summarize(&full);
        println!(
            "│ {:>10} │ {:>10.3} │ {:>12.3} │ {:>10.3} │ {:>10.3} │",
            label, full_stats.mean, sampled_stats.mean, sampled_stats.sd, sampled_stats.se
        );
    }
    println!("└────────────┴────────────┴──────────────┴────────────┴────────────┘");
}

fn column(result: &RunResult, f: fn(&TrialRecord) -> f64) -> Vec<f64> {
    result.records.iter().map(f).collect()
}

/// Exports the per-trial records and the standard-error triple of one
/// run to CSV files in `dir`.
pub fn export_run_csv(dir: &Path, kind: DistributionKind, result: &RunResult) {
    let mut csv = String::from(
        "trial,full_p90,full_p95,full_p99,sampled_p90,sampled_p95,sampled_p99\n",
    );
    for (trial, record) in result.records.iter().enumerate() {
        csv.push_str(&format!(
            "{},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}\n",
            trial + 1,
            record.full.p90,
            record.full.p95,
            record.full.p99,
            record.sampled.p90,
            record.sampled.p95,
            record.sampled.p99,
        ));
    }
    let path = dir.join(format!("percentiles_{}.csv", kind));
    fs::write(&path, csv).expect("Failed to write percentiles csv");
    println!("Exported: {}", path.display());

    let se = &result.standard_error;
    let csv = format!(
        "percentile,se\np90,{:.6}\np95,{:.6}\np99,{:.6}\n",
        se.p90, se.p95, se.p99
    );
    let path = dir.join(format!("standard_error_{}.csv", kind));
    fs::write(&path, csv).expect("Failed to write standard error csv");
    println!("Exported: {}", path.display());
}
