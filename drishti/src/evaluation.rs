//! Trajectory evaluation interface.
//!
//! Learned cost models score candidate trajectories from per-point
//! longitudinal kinematics. No model ships in this crate; planners plug one
//! in through [`TrajectoryEvaluator`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longitudinal state of one trajectory point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointKinematics {
    /// Arc length along the path (m)
    pub s: f64,
    /// Velocity (m/s)
    pub v: f64,
    /// Acceleration (m/s²)
    pub a: f64,
    /// Jerk (m/s³)
    pub jerk: f64,
}

/// Features of a single trajectory point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPointFeature {
    /// Time since trajectory start (s)
    pub relative_time: f64,
    pub kinematics: PointKinematics,
}

/// Features of a whole trajectory, in time order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryFeature {
    pub points: Vec<TrajectoryPointFeature>,
}

#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Failed to load model parameters: {0}")]
    Params(String),
}

/// Scores trajectories as a total reward or cost.
pub trait TrajectoryEvaluator: Send + Sync {
    /// Load model weights and prepare feature builders.
    fn set_params(&mut self) -> Result<(), EvaluationError>;

    /// Total value over a whole trajectory.
    fn evaluate_trajectory(&self, trajectory: &TrajectoryFeature) -> f64;

    /// Value of one trajectory point.
    fn evaluate_point(&self, point: &TrajectoryPointFeature) -> f64;
}
