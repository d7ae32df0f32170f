use std::time::Duration;

use validator::Validate;

/// Default number of flash cycles per critical alert.
pub const DEFAULT_CYCLES: u32 = 6;

/// Default duration of each flash phase. Two phases make one cycle.
pub const DEFAULT_HALF_PERIOD_MS: u64 = 1000;

/// Errors raised while loading [`AlarmConfig`].
#[derive(Debug, thiserror::Error)]
pub enum AlarmConfigError {
    #[error("{var} must be a non-negative integer, got '{value}'")]
    Parse { var: &'static str, value: String },

    #[error("Invalid alarm configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Timing of the console alarm flasher.
///
/// A critical alert blocks for `cycles * 2 * half_period_ms` milliseconds
/// (12 s with the defaults).
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AlarmConfig {
    #[validate(range(min = 1, max = 60))]
    pub cycles: u32,
    #[validate(range(max = 10000))]
    pub half_period_ms: u64,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            half_period_ms: DEFAULT_HALF_PERIOD_MS,
        }
    }
}

impl AlarmConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `ALARM_CYCLES`         | `6`     |
    /// | `ALARM_HALF_PERIOD_MS` | `1000`  |
    pub fn from_env() -> Result<Self, AlarmConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AlarmConfigError> {
        let defaults = Self::default();
        let config = Self {
            cycles: parse_var(&lookup, "ALARM_CYCLES")?.unwrap_or(defaults.cycles),
            half_period_ms: parse_var(&lookup, "ALARM_HALF_PERIOD_MS")?
                .unwrap_or(defaults.half_period_ms),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn half_period(&self) -> Duration {
        Duration::from_millis(self.half_period_ms)
    }

    /// Total time a critical alert occupies the calling thread.
    pub fn critical_duration(&self) -> Duration {
        self.half_period() * 2 * self.cycles
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, AlarmConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AlarmConfigError::Parse { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AlarmConfig, AlarmConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AlarmConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults_flash_for_twelve_seconds() {
        let config = load(&[]).unwrap();
        assert_eq!(config, AlarmConfig::default());
        assert_eq!(config.critical_duration(), Duration::from_secs(12));
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[("ALARM_CYCLES", "2"), ("ALARM_HALF_PERIOD_MS", " 250 ")]).unwrap();
        assert_eq!(config.cycles, 2);
        assert_eq!(config.half_period(), Duration::from_millis(250));
        assert_eq!(config.critical_duration(), Duration::from_secs(1));
    }

    #[test]
    fn zero_half_period_is_allowed() {
        let config = load(&[("ALARM_HALF_PERIOD_MS", "0")]).unwrap();
        assert_eq!(config.critical_duration(), Duration::ZERO);
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        assert_matches!(
            load(&[("ALARM_CYCLES", "six")]),
            Err(AlarmConfigError::Parse { var: "ALARM_CYCLES", .. })
        );
    }

    #[test]
    fn zero_cycles_fails_validation() {
        assert_matches!(
            load(&[("ALARM_CYCLES", "0")]),
            Err(AlarmConfigError::Invalid(_))
        );
    }

    #[test]
    fn oversized_half_period_fails_validation() {
        assert_matches!(
            load(&[("ALARM_HALF_PERIOD_MS", "60000")]),
            Err(AlarmConfigError::Invalid(_))
        );
    }
}
