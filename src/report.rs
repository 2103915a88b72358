//! Rendering of measurements for the terminal

use std::fmt::Write as _;

use crate::algorithms::{Algorithm, Measurement};

/// The default number of elements shown of a sorted dataset
pub const DEFAULT_PREVIEW: usize = 50;

const TABLE_RULE_WIDTH: usize = 67;

/// Format at most `limit` values as a list, noting how many were left out
pub fn preview<T: std::fmt::Display>(values: &[T], limit: usize) -> String {
    let shown = values
        .iter()
        .take(limit)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    match values.len().checked_sub(limit) {
        Some(hidden) if hidden > 0 => format!("[{shown} ... and {hidden} more]"),
        _ => format!("[{shown}]"),
    }
}

/// Render the result of a single sort
pub fn render_measurement(
    algorithm: Algorithm,
    measurement: &Measurement<i64>,
    limit: usize,
) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    let _ = writeln!(out, "--- {algorithm} Results ---");
    let _ = writeln!(out, "Sorted Array:");
    let _ = writeln!(out, "{}", preview(measurement.sorted(), limit));
    let _ = writeln!(out, "Execution Time: {:.4} ms", measurement.elapsed_millis());
    let _ = writeln!(out, "Operations (Steps): {}", measurement.steps());
    out
}

/// Run every algorithm on the same input
///
/// Each algorithm sorts its own copy, so `input` is the same for all of them.
pub fn compare_all(input: &[i64]) -> Vec<(Algorithm, Measurement<i64>)> {
    let bar = indicatif::ProgressBar::new(Algorithm::ALL.len() as u64);

    let results = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            bar.set_message(algorithm.to_string());
            let measurement = algorithm.measure(input);
            bar.inc(1);
            (algorithm, measurement)
        })
        .collect();

    bar.finish_and_clear();
    results
}

/// Render the comparison table of [`compare_all`]
pub fn render_comparison(rows: &[(Algorithm, Measurement<i64>)]) -> String {
    let rule = "-".repeat(TABLE_RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "--- Performance Comparison Table ---");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "| {:<15} | {:<20} | {:<22} |",
        "Algorithm", "Time (ms)", "Operations (Steps)"
    );
    let _ = writeln!(out, "{rule}");
    for (algorithm, measurement) in rows {
        let _ = writeln!(
            out,
            "| {:<15} | {:<20.4} | {:<22} |",
            algorithm.to_string(),
            measurement.elapsed_millis(),
            measurement.steps()
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}
