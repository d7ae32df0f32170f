//! Multi-vital evaluation and the overall bedside verdict.
//!
//! Every entry is classified in input order, and evaluation never
//! short-circuits on a critical result: each alarming vital must reach the
//! notifier even after the verdict is already `false`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::classifier::classify_vital;
use crate::error::CoreError;
use crate::notifier::Notifier;
use crate::registry::Vital;
use crate::status::Status;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// A single reading, either a bare number in the vital's standard unit or a
/// value with an explicit unit (temperature only).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Bare(f64),
    WithUnit { value: f64, unit: String },
}

impl Reading {
    pub fn value(&self) -> f64 {
        match self {
            Self::Bare(value) | Self::WithUnit { value, .. } => *value,
        }
    }

    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Bare(_) => None,
            Self::WithUnit { unit, .. } => Some(unit.as_str()),
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self::Bare(value)
    }
}

/// Readings keyed by vital name, in the order they were supplied.
///
/// Deserializes from a JSON object, keeping document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingSet(pub Vec<(String, Reading)>);

impl ReadingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vital_name: impl Into<String>, reading: impl Into<Reading>) {
        self.0.push((vital_name.into(), reading.into()));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Reading)> {
        self.0.iter().map(|(name, reading)| (name.as_str(), reading))
    }
}

impl<'de> Deserialize<'de> for ReadingSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReadingSetVisitor;

        impl<'de> Visitor<'de> for ReadingSetVisitor {
            type Value = ReadingSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of vital name to reading")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, reading)) = map.next_entry::<String, Reading>()? {
                    entries.push((name, reading));
                }
                Ok(ReadingSet(entries))
            }
        }

        deserializer.deserialize_map(ReadingSetVisitor)
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Outcome for one entry of a reading set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalOutcome {
    pub vital: Vital,
    #[serde(flatten)]
    pub status: Status,
    pub display_value: String,
}

/// Counts of each status across a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VitalsSummary {
    pub total: usize,
    pub ok: usize,
    pub warning: usize,
    pub critical: usize,
}

/// Per-vital outcomes of one evaluation pass, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VitalsReport {
    pub outcomes: Vec<VitalOutcome>,
}

impl VitalsReport {
    /// Logical AND of per-vital acceptability. Empty reports are acceptable.
    pub fn all_acceptable(&self) -> bool {
        self.outcomes.iter().all(|o| o.status.is_acceptable())
    }

    pub fn summary(&self) -> VitalsSummary {
        let mut summary = VitalsSummary {
            total: self.outcomes.len(),
            ..VitalsSummary::default()
        };
        for outcome in &self.outcomes {
            match outcome.status {
                Status::Ok => summary.ok += 1,
                Status::Warning(_) => summary.warning += 1,
                Status::Critical => summary.critical += 1,
            }
        }
        summary
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Classify every reading in order and collect the outcomes.
///
/// Stops at the first [`CoreError`]; entries before it have already been
/// classified and notified.
pub fn evaluate_all<'a, I, K>(
    readings: I,
    notifier: &mut impl Notifier,
) -> Result<VitalsReport, CoreError>
where
    I: IntoIterator<Item = (K, &'a Reading)>,
    K: AsRef<str>,
{
    let mut outcomes = Vec::new();
    for (name, reading) in readings {
        let vital: Vital = name.as_ref().parse()?;
        let classification = classify_vital(vital, reading.value(), reading.unit(), notifier)?;
        outcomes.push(VitalOutcome {
            vital,
            status: classification.status,
            display_value: classification.display_value,
        });
    }
    Ok(VitalsReport { outcomes })
}

/// `true` iff no reading is critical.
pub fn all_acceptable<'a, I, K>(readings: I, notifier: &mut impl Notifier) -> Result<bool, CoreError>
where
    I: IntoIterator<Item = (K, &'a Reading)>,
    K: AsRef<str>,
{
    evaluate_all(readings, notifier).map(|report| report.all_acceptable())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
