//! Well-known vital identifiers.
//!
//! These are the canonical names accepted by the registry lookup, the
//! classifier, and the JSON reading format of the bedside monitor.

/// Body temperature, standard unit degrees Fahrenheit.
pub const VITAL_TEMPERATURE: &str = "temperature";

/// Pulse rate, standard unit beats per minute.
pub const VITAL_PULSE: &str = "pulse";

/// Peripheral blood-oxygen saturation, standard unit percent.
pub const VITAL_SPO2: &str = "spo2";

/// All valid vital names, in registry order.
pub const VALID_VITALS: &[&str] = &[VITAL_TEMPERATURE, VITAL_PULSE, VITAL_SPO2];
