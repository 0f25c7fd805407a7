//! Upstream snapshots and the collaborator interfaces that supply them.
//!
//! The pose and trajectory collaborators refresh their values on their own
//! schedule. Extraction captures one whole snapshot from each at cycle start
//! and never reads them again mid-cycle.
//!
//! [`PoseContainer`] and [`PathContainer`] are the in-process reference
//! providers: writers replace the value whole, readers clone it whole, so a
//! reader never observes a half-written snapshot.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use marga_map::{JunctionId, LaneId, Point2D};

/// Vehicle pose and speed at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoseSnapshot {
    /// Position in the map frame (meters)
    pub position: Point2D,
    /// Heading in radians, CCW positive from +X
    pub heading: f32,
    /// Speed (m/s)
    pub speed: f32,
}

impl PoseSnapshot {
    pub fn new(position: Point2D, heading: f32, speed: f32) -> Self {
        Self {
            position,
            heading,
            speed,
        }
    }
}

/// Next junction on the planned route and the path distance to it.
///
/// Distance is supplied by the trajectory collaborator, the only component
/// holding the full route geometry; it is never recomputed here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JunctionAhead {
    /// Junction id
    pub junction: JunctionId,
    /// Distance along the planned path (meters)
    pub distance: f32,
}

/// Lanes the vehicle intends to traverse, plus route metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannedPath {
    /// Lane ids in travel order
    #[serde(default)]
    pub lanes: Vec<LaneId>,
    /// Next junction within the planning horizon, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub junction: Option<JunctionAhead>,
}

impl PlannedPath {
    pub fn new(lanes: impl IntoIterator<Item = LaneId>) -> Self {
        Self {
            lanes: lanes.into_iter().collect(),
            junction: None,
        }
    }

    /// Attach the next junction and its path distance.
    pub fn with_junction(mut self, junction: JunctionId, distance: f32) -> Self {
        self.junction = Some(JunctionAhead { junction, distance });
        self
    }
}

/// Supplies the current vehicle pose.
///
/// Must return the same value on every call until the next refresh.
/// `None` until the first reading is available.
pub trait PoseProvider: Send + Sync {
    fn current_pose(&self) -> Option<PoseSnapshot>;
}

/// Supplies the current planned path.
///
/// `None` until the planner has produced a path.
pub trait PathProvider: Send + Sync {
    fn current_path(&self) -> Option<PlannedPath>;
}

/// Latest pose reading, shared between a producer and the extractor.
#[derive(Debug, Default)]
pub struct PoseContainer {
    pose: RwLock<Option<PoseSnapshot>>,
}

impl PoseContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current reading.
    pub fn update(&self, pose: PoseSnapshot) {
        *self.pose.write() = Some(pose);
    }

    /// Drop the current reading (e.g. localization lost).
    pub fn clear(&self) {
        *self.pose.write() = None;
    }
}

impl PoseProvider for PoseContainer {
    fn current_pose(&self) -> Option<PoseSnapshot> {
        *self.pose.read()
    }
}

/// Latest planned path, shared between a producer and the extractor.
#[derive(Debug, Default)]
pub struct PathContainer {
    path: RwLock<Option<PlannedPath>>,
}

impl PathContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current path.
    pub fn update(&self, path: PlannedPath) {
        *self.path.write() = Some(path);
    }

    /// Drop the current path.
    pub fn clear(&self) {
        *self.path.write() = None;
    }
}

impl PathProvider for PathContainer {
    fn current_path(&self) -> Option<PlannedPath> {
        self.path.read().clone()
    }
}
