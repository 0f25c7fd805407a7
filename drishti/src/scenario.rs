//! Recorded scenarios for offline replay.
//!
//! ```yaml
//! cycles:
//!   - pose: { position: { x: 10.0, y: 2.0 }, heading: 0.0, speed: 5.0 }
//!     path:
//!       lanes: [lane_A, lane_B]
//!       junction: { junction: j_7, distance: 45.3 }
//!   - path:                  # no pose: localization dropped out
//!       lanes: [lane_B]
//! ```
//!
//! A cycle without `pose` or `path` means that reading was unavailable at that
//! instant, not that it stayed unchanged.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DrishtiError;
use crate::snapshot::{PathContainer, PlannedPath, PoseContainer, PoseSnapshot};

/// One extraction cycle's upstream readings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCycle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pose: Option<PoseSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PlannedPath>,
}

impl ScenarioCycle {
    /// Publish this cycle's readings into the shared containers.
    pub fn publish(&self, pose: &PoseContainer, path: &PathContainer) {
        match self.pose {
            Some(p) => pose.update(p),
            None => pose.clear(),
        }
        match &self.path {
            Some(p) => path.update(p.clone()),
            None => path.clear(),
        }
    }
}

/// A recorded sequence of cycles.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub cycles: Vec<ScenarioCycle>,
}

impl ScenarioFile {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, DrishtiError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let scenario = Self::from_yaml_str(&contents)?;
        log::info!(
            "Loaded scenario with {} cycles from {}",
            scenario.cycles.len(),
            path.display()
        );
        Ok(scenario)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, DrishtiError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
