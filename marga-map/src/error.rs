//! Error types for marga-map

use thiserror::Error;

/// Centerline construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CenterlineError {
    #[error("centerline needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("centerline point {0} is not finite")]
    NonFinite(usize),

    #[error("centerline segment {0} has zero length")]
    DegenerateSegment(usize),
}

/// Map loading and construction errors.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid lane '{id}': {reason}")]
    InvalidLane { id: String, reason: String },

    #[error("Duplicate lane id '{0}'")]
    DuplicateLane(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
