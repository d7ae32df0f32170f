//! Bedside vitals evaluation engine.
//!
//! Pure logic: classifies temperature, pulse, and SpO2 readings against a
//! static registry of safe ranges and folds them into a single verdict.
//! Alert presentation is delegated to a caller-supplied [`Notifier`].
//!
//! - [`registry`] — immutable vital definitions.
//! - [`units`] — temperature unit normalization.
//! - [`range`] / [`warning`] — critical range and warning band arithmetic.
//! - [`classifier`] — per-reading status.
//! - [`aggregator`] — multi-vital verdict and report.

pub mod aggregator;
pub mod classifier;
pub mod error;
pub mod notifier;
pub mod range;
pub mod registry;
pub mod status;
pub mod types;
pub mod units;
pub mod vital_names;
pub mod warning;

pub use aggregator::{
    all_acceptable, evaluate_all, Reading, ReadingSet, VitalOutcome, VitalsReport, VitalsSummary,
};
pub use classifier::{check_vital, classify, is_vital_ok, Classification};
pub use error::CoreError;
pub use notifier::{Notification, Notifier, RecordingNotifier, SilentNotifier};
pub use registry::{definition_of, Vital, VitalDefinition};
pub use status::{Status, WarningDirection};
