//! YAML lane map loading.
//!
//! # Format
//!
//! ```yaml
//! lanes:
//!   - id: lane_A
//!     centerline:
//!       - { x: 0.0, y: 2.0 }
//!       - { x: 20.0, y: 2.0 }
//!     left_width: 1.75        # optional, default 1.75
//!     right_width: 1.75       # optional, default 1.75
//!     left_neighbor: lane_L   # optional, same travel direction
//!     right_neighbor: lane_R  # optional, same travel direction
//! ```
//!
//! Neighbor references to lanes that are not in the file are kept (the
//! extraction layer tolerates them) and reported with a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::error::{MapError, Result};
use crate::ids::LaneId;
use crate::lane::{Centerline, LaneInfo, Side};
use crate::map::LaneMap;

/// Top-level map file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LaneMapFile {
    /// Lane records
    #[serde(default)]
    pub lanes: Vec<LaneRecord>,
}

/// One lane as stored on disk.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LaneRecord {
    /// Lane id
    pub id: LaneId,
    /// Centerline vertices in travel order
    pub centerline: Vec<Point2D>,
    /// Half width left of the centerline (meters)
    #[serde(default = "default_half_width")]
    pub left_width: f32,
    /// Half width right of the centerline (meters)
    #[serde(default = "default_half_width")]
    pub right_width: f32,
    /// Same-direction neighbor on the left
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_neighbor: Option<LaneId>,
    /// Same-direction neighbor on the right
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_neighbor: Option<LaneId>,
}

fn default_half_width() -> f32 {
    1.75
}

impl LaneRecord {
    /// Validate and convert into a [`LaneInfo`].
    pub fn into_lane(self) -> Result<LaneInfo> {
        let centerline = Centerline::new(self.centerline).map_err(|e| MapError::InvalidLane {
            id: self.id.to_string(),
            reason: e.to_string(),
        })?;

        let mut lane = LaneInfo::new(self.id, centerline, self.left_width, self.right_width)?;
        if let Some(left) = self.left_neighbor {
            lane = lane.with_neighbor(Side::Left, left);
        }
        if let Some(right) = self.right_neighbor {
            lane = lane.with_neighbor(Side::Right, right);
        }
        Ok(lane)
    }
}

impl LaneMap {
    /// Load a lane map from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let map = Self::from_yaml_str(&contents)?;
        log::info!("Loaded {} lanes from {}", map.len(), path.display());
        Ok(map)
    }

    /// Parse a lane map from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: LaneMapFile = serde_yaml::from_str(yaml)?;
        let lanes = file
            .lanes
            .into_iter()
            .map(LaneRecord::into_lane)
            .collect::<Result<Vec<_>>>()?;
        let map = Self::from_lanes(lanes)?;

        for (lane, side, missing) in map.dangling_neighbors() {
            log::warn!(
                "Lane {} references unknown {:?} neighbor {}",
                lane,
                side,
                missing
            );
        }

        Ok(map)
    }
}
