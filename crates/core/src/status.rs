//! Classification outcome for a single reading.

use serde::Serialize;

/// Which side of the safe range a warning approaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningDirection {
    Low,
    High,
}

/// Three-way status of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "direction", rename_all = "lowercase")]
pub enum Status {
    /// Inside the safe range and outside both warning bands.
    Ok,
    /// Inside the safe range but within a warning band.
    Warning(WarningDirection),
    /// Outside the safe range.
    Critical,
}

impl Status {
    /// `Ok` and `Warning` are acceptable; `Critical` is the only rejecting state.
    pub fn is_acceptable(self) -> bool {
        !self.is_critical()
    }

    pub fn is_critical(self) -> bool {
        matches!(self, Self::Critical)
    }

    /// Short lowercase label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning(WarningDirection::Low) => "warning (low)",
            Self::Warning(WarningDirection::High) => "warning (high)",
            Self::Critical => "critical",
        }
    }
}
