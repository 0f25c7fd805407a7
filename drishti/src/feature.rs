//! Scenario feature summary produced once per cycle.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use marga_map::{JunctionId, LaneId};

use crate::snapshot::JunctionAhead;

/// Lane the ego vehicle occupies and its arc length along it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EgoLane {
    pub lane: LaneId,
    /// Longitudinal position on `lane` (meters)
    pub s: f32,
}

/// Obstacle-relative context.
///
/// This core does not reason about obstacles; it always reports
/// [`ObstacleFeatures::NotComputed`] so consumers can tell that apart from a
/// computed empty list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "obstacles", rename_all = "snake_case")]
pub enum ObstacleFeatures {
    #[default]
    NotComputed,
    Computed(Vec<ObstacleFeature>),
}

/// Lane-relative placement of one obstacle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObstacleFeature {
    pub id: String,
    pub lane: Option<LaneId>,
    /// Longitudinal gap to the ego vehicle (meters, positive ahead)
    pub relative_s: f32,
}

/// Symbolic/geometric summary of the ego vehicle's situation for one cycle.
///
/// Fields are read-only once assembled. Absent values are `None`, never
/// zero or an empty id. Output only: features are built by extraction, never
/// parsed back.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioFeature {
    speed: f32,
    heading: f32,
    ego_lane: Option<EgoLane>,
    neighbor_lanes: BTreeSet<LaneId>,
    junction: Option<JunctionAhead>,
    obstacles: ObstacleFeatures,
}

impl ScenarioFeature {
    pub(crate) fn assemble(
        speed: f32,
        heading: f32,
        ego_lane: Option<EgoLane>,
        neighbor_lanes: BTreeSet<LaneId>,
        junction: Option<JunctionAhead>,
    ) -> Self {
        debug_assert!(ego_lane.is_some() || neighbor_lanes.is_empty());
        debug_assert!(
            ego_lane
                .as_ref()
                .is_none_or(|ego| !neighbor_lanes.contains(&ego.lane))
        );

        Self {
            speed,
            heading,
            ego_lane,
            neighbor_lanes,
            junction,
            obstacles: ObstacleFeatures::NotComputed,
        }
    }

    /// Ego speed (m/s)
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Ego heading (radians)
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Lane placement, `None` when the vehicle is off every planned lane.
    pub fn ego_lane(&self) -> Option<&EgoLane> {
        self.ego_lane.as_ref()
    }

    /// Current lane id, `None` when off-lane.
    pub fn current_lane(&self) -> Option<&LaneId> {
        self.ego_lane.as_ref().map(|ego| &ego.lane)
    }

    /// Arc length on the current lane, `None` when off-lane.
    pub fn current_lane_s(&self) -> Option<f32> {
        self.ego_lane.as_ref().map(|ego| ego.s)
    }

    /// Is the vehicle on one of its planned lanes?
    pub fn is_on_lane(&self) -> bool {
        self.ego_lane.is_some()
    }

    /// Same-direction lanes immediately left and right of the current lane.
    pub fn neighbor_lanes(&self) -> &BTreeSet<LaneId> {
        &self.neighbor_lanes
    }

    /// Next junction ahead, `None` when none is within the planning horizon.
    pub fn junction(&self) -> Option<&JunctionAhead> {
        self.junction.as_ref()
    }

    pub fn junction_id(&self) -> Option<&JunctionId> {
        self.junction.as_ref().map(|j| &j.junction)
    }

    pub fn distance_to_junction(&self) -> Option<f32> {
        self.junction.as_ref().map(|j| j.distance)
    }

    pub fn obstacles(&self) -> &ObstacleFeatures {
        &self.obstacles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_lane_is_absent_not_zero() {
        let feature = ScenarioFeature::assemble(3.0, 0.1, None, BTreeSet::new(), None);
        assert!(!feature.is_on_lane());
        assert_eq!(feature.current_lane(), None);
        assert_eq!(feature.current_lane_s(), None);
        assert_eq!(feature.junction_id(), None);
        assert_eq!(feature.distance_to_junction(), None);
        assert_eq!(feature.obstacles(), &ObstacleFeatures::NotComputed);
    }

    #[test]
    fn test_accessors() {
        let feature = ScenarioFeature::assemble(
            8.5,
            -0.2,
            Some(EgoLane {
                lane: LaneId::new("lane_A"),
                s: 12.0,
            }),
            BTreeSet::from([LaneId::new("lane_L")]),
            Some(JunctionAhead {
                junction: JunctionId::new("j_7"),
                distance: 45.3,
            }),
        );
        assert_eq!(feature.speed(), 8.5);
        assert_eq!(feature.heading(), -0.2);
        assert_eq!(feature.current_lane(), Some(&LaneId::new("lane_A")));
        assert_eq!(feature.current_lane_s(), Some(12.0));
        assert_eq!(feature.neighbor_lanes().len(), 1);
        assert_eq!(feature.junction_id(), Some(&JunctionId::new("j_7")));
        assert_eq!(feature.distance_to_junction(), Some(45.3));
    }

    #[test]
    fn test_serializes_absent_fields() {
        let feature = ScenarioFeature::assemble(3.0, 0.1, None, BTreeSet::new(), None);
        let yaml = serde_yaml::to_string(&feature).unwrap();
        assert!(yaml.contains("ego_lane: null"));
        assert!(yaml.contains("junction: null"));
        assert!(yaml.contains("not_computed"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_neighbors_without_lane_rejected() {
        ScenarioFeature::assemble(
            3.0,
            0.0,
            None,
            BTreeSet::from([LaneId::new("lane_L")]),
            None,
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_current_lane_as_neighbor_rejected() {
        ScenarioFeature::assemble(
            3.0,
            0.0,
            Some(EgoLane {
                lane: LaneId::new("lane_A"),
                s: 1.0,
            }),
            BTreeSet::from([LaneId::new("lane_A")]),
            None,
        );
    }

    #[test]
    fn test_obstacles_serialize_status() {
        let yaml = serde_yaml::to_string(&ObstacleFeatures::NotComputed).unwrap();
        assert!(yaml.contains("not_computed"));

        let yaml = serde_yaml::to_string(&ObstacleFeatures::Computed(Vec::new())).unwrap();
        assert!(yaml.contains("computed"));
        assert!(yaml.contains("obstacles"));
    }
}
