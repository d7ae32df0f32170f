//! Console alarm for the bedside vitals monitor.
//!
//! Implements [`vitals_core::Notifier`] with a blocking flasher for critical
//! readings and a one-line message for warnings. Timing comes from
//! [`AlarmConfig`], loaded from the environment.

pub mod config;
pub mod console;

pub use config::{AlarmConfig, AlarmConfigError};
pub use console::ConsoleAlarm;
