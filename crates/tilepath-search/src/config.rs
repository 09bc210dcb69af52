use std::fmt;

/// Default stepping rate of a new engine.
pub const DEFAULT_STEPS_PER_SECOND: f32 = 20.0;

/// Tunables of a [`PathfindingEngine`](crate::PathfindingEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// How many search steps [`advance`](crate::PathfindingEngine::advance)
    /// performs per second of accumulated time. Must be finite and > 0.
    pub steps_per_second: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            steps_per_second: DEFAULT_STEPS_PER_SECOND,
        }
    }
}

impl EngineConfig {
    /// Check that the configuration can drive an engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rate(self.steps_per_second)
    }

    /// Seconds of accumulated time consumed by one search step.
    #[inline]
    pub fn step_interval(&self) -> f32 {
        1.0 / self.steps_per_second
    }
}

pub(crate) fn check_rate(rate: f32) -> Result<(), ConfigError> {
    if !rate.is_finite() {
        return Err(ConfigError::NonFiniteRate(rate));
    }
    if rate <= 0.0 {
        return Err(ConfigError::NonPositiveRate(rate));
    }
    Ok(())
}

/// Errors reported when configuring an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The stepping rate was zero or negative.
    NonPositiveRate(f32),
    /// The stepping rate was NaN or infinite.
    NonFiniteRate(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveRate(r) => {
                write!(f, "steps per second must be positive, got {r}")
            }
            Self::NonFiniteRate(r) => write!(f, "steps per second must be finite, got {r}"),
        }
    }
}

impl std::error::Error for ConfigError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = EngineConfig {
            steps_per_second: 42.0,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
