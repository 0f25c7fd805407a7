//! In-memory lane map.

use std::collections::HashMap;

use crate::error::{MapError, Result};
use crate::ids::LaneId;
use crate::lane::{LaneInfo, Side};
use crate::service::MapService;

/// Lane map keyed by lane id.
#[derive(Clone, Debug, Default)]
pub struct LaneMap {
    lanes: HashMap<LaneId, LaneInfo>,
}

impl LaneMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from lanes, rejecting duplicate ids.
    pub fn from_lanes(lanes: impl IntoIterator<Item = LaneInfo>) -> Result<Self> {
        let mut map = Self::new();
        for lane in lanes {
            map.insert(lane)?;
        }
        Ok(map)
    }

    /// Add a lane. Fails if a lane with the same id already exists.
    pub fn insert(&mut self, lane: LaneInfo) -> Result<()> {
        if self.lanes.contains_key(lane.id()) {
            return Err(MapError::DuplicateLane(lane.id().to_string()));
        }
        self.lanes.insert(lane.id().clone(), lane);
        Ok(())
    }

    /// Number of lanes.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Check if the map has no lanes.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Iterate over all lanes (unordered).
    pub fn lanes(&self) -> impl Iterator<Item = &LaneInfo> {
        self.lanes.values()
    }

    /// Neighbor references that point at lanes missing from this map.
    ///
    /// Returned as `(lane, side, missing_neighbor)`, sorted by lane id.
    pub fn dangling_neighbors(&self) -> Vec<(LaneId, Side, LaneId)> {
        let mut dangling: Vec<_> = self
            .lanes
            .values()
            .flat_map(|lane| {
                Side::BOTH.into_iter().filter_map(move |side| {
                    lane.neighbor(side)
                        .filter(|n| !self.lanes.contains_key(*n))
                        .map(|n| (lane.id().clone(), side, n.clone()))
                })
            })
            .collect();
        dangling.sort_by(|a, b| a.0.cmp(&b.0));
        dangling
    }
}

impl MapService for LaneMap {
    fn resolve_lane(&self, id: &LaneId) -> Option<&LaneInfo> {
        self.lanes.get(id)
    }

    fn adjacent_lane(&self, id: &LaneId, side: Side) -> Option<LaneId> {
        self.lanes.get(id)?.neighbor(side).cloned()
    }
}
