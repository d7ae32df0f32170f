//! Near-boundary warning bands.
//!
//! A band is a narrow zone just inside a critical bound. Its width (the
//! tolerance) is a fixed percentage of the vital's upper reference value, so
//! bands scale with the vital rather than being an absolute offset.
//!
//! Bands exclude their critical-side edge: a value exactly on `min` or `max`
//! is normal, not a warning.

use crate::registry::{Vital, VitalDefinition};

/// Warning tolerance as a percentage of the upper reference value.
pub const WARNING_TOLERANCE_PERCENT: f64 = 1.5;

/// Assumed ceiling for SpO2, which has no upper critical bound.
pub const SPO2_ASSUMED_MAX: f64 = 100.0;

/// Inclusive-exclusive pair of band edges, `(lower, upper)`.
pub type Band = (f64, f64);

/// Low and high warning bands derived from a [`VitalDefinition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarningBand {
    /// `(min, min + tolerance)`; matches `min < v <= min + tolerance`.
    pub low: Option<Band>,
    /// `(max - tolerance, max)`; matches `max - tolerance <= v < max`.
    pub high: Option<Band>,
}

impl WarningBand {
    /// `true` if `value` falls in the low band.
    pub fn in_low(&self, value: f64) -> bool {
        self.low
            .is_some_and(|(min, upper)| value > min && value <= upper)
    }

    /// `true` if `value` falls in the high band.
    pub fn in_high(&self, value: f64) -> bool {
        self.high
            .is_some_and(|(lower, max)| value >= lower && value < max)
    }
}

/// Tolerance width for a given upper reference value.
pub fn tolerance_for(reference_max: f64) -> f64 {
    reference_max * WARNING_TOLERANCE_PERCENT / 100.0
}

/// Derive the warning bands for a definition.
///
/// With an upper bound, the tolerance is taken from `max` and the high band
/// always exists. Without one there is no high band, and the tolerance comes
/// from an assumed ceiling: [`SPO2_ASSUMED_MAX`] for SpO2, `min * 2` for
/// anything else.
pub fn warning_band(definition: &VitalDefinition) -> WarningBand {
    match (definition.min, definition.max) {
        (min, Some(max)) => {
            let tolerance = tolerance_for(max);
            WarningBand {
                low: min.map(|min| (min, min + tolerance)),
                high: Some((max - tolerance, max)),
            }
        }
        (Some(min), None) => {
            // The min * 2 fallback is not clinically validated; revisit before
            // registering another vital without an upper bound.
            let assumed_max = match definition.vital {
                Vital::Spo2 => SPO2_ASSUMED_MAX,
                _ => min * 2.0,
            };
            let tolerance = tolerance_for(assumed_max);
            WarningBand {
                low: Some((min, min + tolerance)),
                high: None,
            }
        }
        (None, None) => WarningBand {
            low: None,
            high: None,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
