use std::fmt;

use tilepath_core::Point;
use tilepath_search::ConfigError;

/// Errors reported by the headless driver.
#[derive(Debug, Clone, PartialEq)]
pub enum RunError {
    /// The requested step rate was rejected by the engine.
    Config(ConfigError),
    /// A start or goal coordinate lies outside the grid.
    OutOfBounds { what: &'static str, pos: Point },
    /// The search did not finish within the tick budget.
    Stalled { ticks: u64 },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid engine configuration: {e}"),
            Self::OutOfBounds { what, pos } => write!(f, "{what} {pos} is outside the grid"),
            Self::Stalled { ticks } => write!(f, "search still running after {ticks} ticks"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
