//! Unit normalization to each vital's standard unit.
//!
//! Only temperature accepts a unit override. Every other vital is assumed to
//! be reported in its standard unit already.

use std::str::FromStr;

use crate::error::CoreError;
use crate::registry::Vital;

/// Temperature scale of an incoming reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a value on this scale to degrees Fahrenheit.
    pub fn to_fahrenheit(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value * 9.0 / 5.0 + 32.0,
            Self::Fahrenheit => value,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = CoreError;

    /// Accepts exactly `C` or `F`, in either case. No trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("C") {
            Ok(Self::Celsius)
        } else if s.eq_ignore_ascii_case("F") {
            Ok(Self::Fahrenheit)
        } else {
            Err(CoreError::UnsupportedUnit(s.to_string()))
        }
    }
}

/// Convert `value` to the standard unit of `vital`.
pub fn normalize(vital: Vital, value: f64, unit: Option<&str>) -> Result<f64, CoreError> {
    match (vital, unit) {
        (Vital::Temperature, Some(unit)) => {
            let unit: TemperatureUnit = unit.parse()?;
            Ok(unit.to_fahrenheit(value))
        }
        _ => Ok(value),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
