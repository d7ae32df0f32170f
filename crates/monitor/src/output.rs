//! Rendering of an evaluation report for the terminal.

use serde::Serialize;
use vitals_core::{VitalOutcome, VitalsReport, VitalsSummary};

/// JSON form of a report, printed with `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub acceptable: bool,
    pub summary: VitalsSummary,
    pub outcomes: &'a [VitalOutcome],
}

impl<'a> From<&'a VitalsReport> for JsonReport<'a> {
    fn from(report: &'a VitalsReport) -> Self {
        Self {
            acceptable: report.all_acceptable(),
            summary: report.summary(),
            outcomes: &report.outcomes,
        }
    }
}

/// One line per vital followed by the verdict.
pub fn render_text(report: &VitalsReport) -> String {
    let summary = report.summary();
    let verdict = if report.all_acceptable() {
        "Vitals OK"
    } else {
        "Vitals NOT OK"
    };

    report
        .outcomes
        .iter()
        .map(|outcome| {
            format!(
                "{:<12} {:>10}  {}\n",
                outcome.vital.as_str(),
                outcome.display_value,
                outcome.status.label()
            )
        })
        .chain(std::iter::once(format!(
            "{verdict}: {} checked, {} ok, {} warning, {} critical\n",
            summary.total, summary.ok, summary.warning, summary.critical
        )))
        .collect()
}

pub fn render_json(report: &VitalsReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from(report))
}
