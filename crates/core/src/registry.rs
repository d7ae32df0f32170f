//! Immutable catalog of vital definitions.
//!
//! The table is a `static` built at compile time; nothing in the crate can
//! mutate clinical thresholds at runtime.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::vital_names::{VITAL_PULSE, VITAL_SPO2, VITAL_TEMPERATURE};

// ---------------------------------------------------------------------------
// Vital identifier
// ---------------------------------------------------------------------------

/// One of the registered vital signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vital {
    Temperature,
    Pulse,
    Spo2,
}

impl Vital {
    /// Canonical identifier (see [`crate::vital_names`]).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => VITAL_TEMPERATURE,
            Self::Pulse => VITAL_PULSE,
            Self::Spo2 => VITAL_SPO2,
        }
    }
}

impl fmt::Display for Vital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vital {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            VITAL_TEMPERATURE => Ok(Self::Temperature),
            VITAL_PULSE => Ok(Self::Pulse),
            VITAL_SPO2 => Ok(Self::Spo2),
            other => Err(CoreError::UnknownVital(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// Safe range, unit, and alert messages for a single vital.
///
/// At least one of `min` / `max` is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct VitalDefinition {
    pub vital: Vital,
    /// Inclusive lower bound of the critical range.
    pub min: Option<f64>,
    /// Inclusive upper bound of the critical range.
    pub max: Option<f64>,
    pub standard_unit: &'static str,
    pub critical_message: &'static str,
    pub low_warning_message: Option<&'static str>,
    pub high_warning_message: Option<&'static str>,
}

/// Canonical thresholds, in registry order.
static VITALS: [VitalDefinition; 3] = [
    VitalDefinition {
        vital: Vital::Temperature,
        min: Some(95.0),
        max: Some(102.0),
        standard_unit: "F",
        critical_message: "Temperature critical!",
        low_warning_message: Some("Warning: Approaching hypothermia"),
        high_warning_message: Some("Warning: Approaching hyperthermia"),
    },
    VitalDefinition {
        vital: Vital::Pulse,
        min: Some(60.0),
        max: Some(100.0),
        standard_unit: "bpm",
        critical_message: "Pulse Rate is out of range!",
        low_warning_message: Some("Warning: Approaching bradycardia"),
        high_warning_message: Some("Warning: Approaching tachycardia"),
    },
    VitalDefinition {
        vital: Vital::Spo2,
        min: Some(90.0),
        max: None,
        standard_unit: "%",
        critical_message: "Oxygen Saturation out of range!",
        low_warning_message: Some("Warning: Approaching hypoxemia"),
        high_warning_message: None,
    },
];

/// Look up a definition by vital name.
///
/// Fails with [`CoreError::UnknownVital`] for anything outside the registry.
pub fn definition_of(name: &str) -> Result<&'static VitalDefinition, CoreError> {
    name.parse().map(definition)
}

/// Look up the definition for an already-resolved vital.
pub fn definition(vital: Vital) -> &'static VitalDefinition {
    match vital {
        Vital::Temperature => &VITALS[0],
        Vital::Pulse => &VITALS[1],
        Vital::Spo2 => &VITALS[2],
    }
}

/// Every registered definition, in registry order.
pub fn all() -> &'static [VitalDefinition] {
    &VITALS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
