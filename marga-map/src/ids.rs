//! Opaque map element identifiers.
//!
//! Identifiers are owned strings rather than integer indices so that an
//! unset value can never alias a real element (there is no "lane 0").

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a lane in the map.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaneId(String);

impl LaneId {
    /// Create a lane id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LaneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LaneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of a junction node in the map graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JunctionId(String);

impl JunctionId {
    /// Create a junction id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JunctionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for JunctionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(LaneId::new("lane_A").to_string(), "lane_A");
        assert_eq!(JunctionId::from("j_7").to_string(), "j_7");
    }

    #[test]
    fn test_serde_transparent() {
        let id: LaneId = serde_yaml::from_str("lane_B").unwrap();
        assert_eq!(id.as_str(), "lane_B");
        assert_eq!(serde_yaml::to_string(&id).unwrap().trim(), "lane_B");
    }
}
