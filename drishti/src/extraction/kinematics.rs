//! Kinematic snapshot of the ego vehicle.

use marga_map::Point2D;

use crate::error::{ExtractionError, Result, Upstream};
use crate::snapshot::PoseSnapshot;

/// Speed and heading copied from the pose reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinematics {
    /// Map-frame position the values were taken at
    pub position: Point2D,
    /// m/s
    pub speed: f32,
    /// radians
    pub heading: f32,
}

impl From<&PoseSnapshot> for Kinematics {
    fn from(pose: &PoseSnapshot) -> Self {
        Self {
            position: pose.position,
            speed: pose.speed,
            heading: pose.heading,
        }
    }
}

/// Take the kinematic values from the current pose.
///
/// Fails with [`ExtractionError::MissingUpstreamState`] when no pose has been
/// published yet.
pub fn snapshot(pose: Option<&PoseSnapshot>) -> Result<Kinematics> {
    pose.map(Kinematics::from)
        .ok_or(ExtractionError::MissingUpstreamState(Upstream::Pose))
}
