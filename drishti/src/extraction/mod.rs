//! Scenario feature extraction.
//!
//! Each sub-module computes one part of the feature from a single pose/path
//! snapshot pair:
//!
//! - [`locator`]: which planned lane the ego occupies
//! - [`neighbors`]: same-direction lanes alongside it
//! - [`junction`]: next junction on the route
//! - [`kinematics`]: speed and heading
//!
//! [`extractor`] combines them, optionally splitting lane work onto a worker
//! thread.

pub mod extractor;
pub mod junction;
pub mod kinematics;
pub mod locator;
pub mod neighbors;

pub use extractor::{FeatureExtractor, ScenarioExtractor};
pub use junction::resolve_junction;
pub use kinematics::Kinematics;
pub use locator::{LaneLocator, LaneMatch};
pub use neighbors::NeighborLaneResolver;
