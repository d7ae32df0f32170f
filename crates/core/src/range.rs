//! Critical-range check.

use crate::registry::VitalDefinition;

/// Returns `true` if `value` lies inside the definition's inclusive bounds.
///
/// A missing bound is open on that side. `NaN` is never within range.
pub fn is_within_critical_range(definition: &VitalDefinition, value: f64) -> bool {
    match (definition.min, definition.max) {
        (Some(min), Some(max)) => (min..=max).contains(&value),
        (None, Some(max)) => value <= max,
        (Some(min), None) => value >= min,
        (None, None) => !value.is_nan(),
    }
}
