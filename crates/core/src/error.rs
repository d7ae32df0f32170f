/// Caller-input errors raised by the evaluation engine.
///
/// Neither variant is transient: both are surfaced to the caller
/// immediately and never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown vital: '{0}'. Valid vitals: temperature, pulse, spo2")]
    UnknownVital(String),

    #[error("Unsupported unit: '{0}'. Valid units: C, F")]
    UnsupportedUnit(String),
}
