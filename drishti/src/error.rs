//! Error types for Drishti
//!
//! Only a missing upstream snapshot aborts an extraction cycle. Off-lane,
//! no-junction-ahead and dangling lane references are representable states of
//! [`ScenarioFeature`](crate::ScenarioFeature), not errors.

use std::fmt;

use thiserror::Error;

/// Upstream collaborator whose snapshot was unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// Vehicle pose provider
    Pose,
    /// Planned trajectory provider
    Path,
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Upstream::Pose => write!(f, "pose"),
            Upstream::Path => write!(f, "planned path"),
        }
    }
}

/// Errors that abort a single extraction cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    #[error("Missing upstream state: no {0} snapshot available")]
    MissingUpstreamState(Upstream),
}

impl ExtractionError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingUpstreamState(_) => "MISSING_UPSTREAM_STATE",
        }
    }
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error for the replay tool.
#[derive(Error, Debug)]
pub enum DrishtiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Map error: {0}")]
    Map(#[from] marga_map::MapError),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for DrishtiError {
    fn from(e: serde_yaml::Error) -> Self {
        DrishtiError::Scenario(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExtractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractionError::MissingUpstreamState(Upstream::Pose);
        assert_eq!(
            err.to_string(),
            "Missing upstream state: no pose snapshot available"
        );
        let err = ExtractionError::MissingUpstreamState(Upstream::Path);
        assert_eq!(
            err.to_string(),
            "Missing upstream state: no planned path snapshot available"
        );
    }

    #[test]
    fn test_error_code() {
        assert_eq!(
            ExtractionError::MissingUpstreamState(Upstream::Path).code(),
            "MISSING_UPSTREAM_STATE"
        );
    }
}
