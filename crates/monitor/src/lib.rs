//! `vitals-monitor` library crate.
//!
//! Argument parsing, evaluation, and report rendering for the bedside
//! monitor binary. The entrypoint lives in `main.rs`.

pub mod input;
pub mod output;

use std::io::Write;

use vitals_core::{evaluate_all, Notifier, ReadingSet, VitalsReport};

use crate::input::OutputFormat;

/// Every vital is acceptable.
pub const EXIT_ACCEPTABLE: i32 = 0;
/// At least one vital is critical.
pub const EXIT_CRITICAL: i32 = 1;
/// Bad input or configuration.
pub const EXIT_INPUT_ERROR: i32 = 2;

/// Evaluate a reading set, print the report, and return the exit code.
pub fn run(
    readings: &ReadingSet,
    format: OutputFormat,
    notifier: &mut impl Notifier,
    out: &mut impl Write,
) -> anyhow::Result<i32> {
    tracing::info!(vitals = readings.len(), "Evaluating readings");

    let report = evaluate_all(readings.iter(), notifier)?;
    let summary = report.summary();
    tracing::info!(
        acceptable = report.all_acceptable(),
        ok = summary.ok,
        warning = summary.warning,
        critical = summary.critical,
        "Evaluation complete",
    );

    match format {
        OutputFormat::Text => write!(out, "{}", output::render_text(&report))?,
        OutputFormat::Json => writeln!(out, "{}", output::render_json(&report)?)?,
    }
    out.flush()?;

    Ok(exit_code(&report))
}

pub fn exit_code(report: &VitalsReport) -> i32 {
    if report.all_acceptable() {
        EXIT_ACCEPTABLE
    } else {
        EXIT_CRITICAL
    }
}
