//! Three-way status classification for one reading.
//!
//! Normalizes the value, checks the critical range, then the warning bands
//! (low before high). Critical takes precedence. Critical and warning
//! results are forwarded to the caller's [`Notifier`].

use chrono::Utc;

use crate::error::CoreError;
use crate::notifier::{Notification, Notifier, SilentNotifier};
use crate::range::is_within_critical_range;
use crate::registry::{definition, Vital, VitalDefinition};
use crate::status::{Status, WarningDirection};
use crate::units::normalize;
use crate::warning::warning_band;

/// Result of classifying one reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub status: Status,
    /// Pre-normalization value, formatted for display.
    pub display_value: String,
}

/// Classify a reading by vital name and notify on warning or critical.
pub fn classify(
    vital_name: &str,
    value: f64,
    unit: Option<&str>,
    notifier: &mut impl Notifier,
) -> Result<Classification, CoreError> {
    let vital: Vital = vital_name.parse()?;
    classify_vital(vital, value, unit, notifier)
}

/// Same as [`classify`] for an already-resolved vital.
pub fn classify_vital(
    vital: Vital,
    value: f64,
    unit: Option<&str>,
    notifier: &mut impl Notifier,
) -> Result<Classification, CoreError> {
    let def = definition(vital);
    let normalized = normalize(vital, value, unit)?;
    let status = status_of(def, normalized);
    let display_value = display_value(vital, value, unit);

    let message = match status {
        Status::Ok => None,
        Status::Critical => Some(def.critical_message),
        Status::Warning(WarningDirection::Low) => def.low_warning_message,
        Status::Warning(WarningDirection::High) => def.high_warning_message,
    };

    if let Some(message) = message {
        let notification = Notification {
            vital,
            status,
            message: message.to_string(),
            display_value: display_value.clone(),
            raised_at: Utc::now(),
        };
        if status.is_critical() {
            notifier.on_critical(&notification);
        } else {
            notifier.on_warning(&notification);
        }
    }

    Ok(Classification {
        status,
        display_value,
    })
}

/// Status of an already-normalized value against a definition.
pub fn status_of(definition: &VitalDefinition, normalized: f64) -> Status {
    if !is_within_critical_range(definition, normalized) {
        return Status::Critical;
    }

    let band = warning_band(definition);
    if band.in_low(normalized) {
        Status::Warning(WarningDirection::Low)
    } else if band.in_high(normalized) {
        Status::Warning(WarningDirection::High)
    } else {
        Status::Ok
    }
}

/// Classify and report whether the reading is acceptable (not critical).
pub fn check_vital(
    vital_name: &str,
    value: f64,
    unit: Option<&str>,
    notifier: &mut impl Notifier,
) -> Result<bool, CoreError> {
    classify(vital_name, value, unit, notifier).map(|c| c.status.is_acceptable())
}

/// Acceptability check with no notification side effect.
pub fn is_vital_ok(vital_name: &str, value: f64, unit: Option<&str>) -> Result<bool, CoreError> {
    check_vital(vital_name, value, unit, &mut SilentNotifier)
}

/// Format the caller's original value, with `°` and the unit for temperature.
pub fn display_value(vital: Vital, value: f64, unit: Option<&str>) -> String {
    match (vital, unit) {
        (Vital::Temperature, Some(unit)) => format!("{value}°{}", unit.to_uppercase()),
        _ => value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
