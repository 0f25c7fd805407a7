//! # Drishti: Scenario Feature Extraction
//!
//! Summarizes the ego vehicle's situation once per planning cycle so that a
//! downstream behavior predictor can reason about it:
//!
//! - speed and heading
//! - the lane the vehicle occupies and its arc length along that lane
//! - same-direction lanes immediately to the left and right
//! - the next junction on the route and the distance to it
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use drishti::{
//!     ExtractionConfig, FeatureExtractor, PathContainer, PlannedPath, PoseContainer,
//!     PoseSnapshot, ScenarioExtractor,
//! };
//! use marga_map::{LaneId, LaneMap, Point2D};
//!
//! let map = LaneMap::from_yaml_str(r#"
//! lanes:
//!   - id: lane_A
//!     centerline: [{ x: 0.0, y: 2.0 }, { x: 20.0, y: 2.0 }]
//! "#).unwrap();
//!
//! let pose = Arc::new(PoseContainer::new());
//! let path = Arc::new(PathContainer::new());
//! let extractor = ScenarioExtractor::new(Arc::new(map), ExtractionConfig::default());
//! let mut features = FeatureExtractor::new(pose.clone(), path.clone(), extractor);
//!
//! pose.update(PoseSnapshot::new(Point2D::new(10.0, 2.0), 0.0, 5.0));
//! path.update(PlannedPath::new([LaneId::new("lane_A")]));
//!
//! let feature = features.extract_features().unwrap();
//! assert_eq!(feature.current_lane(), Some(&LaneId::new("lane_A")));
//! ```
//!
//! ## Architecture
//!
//! - [`snapshot`]: pose/path snapshots and their providers
//! - [`extraction`]: per-cycle lane, neighbor, junction and kinematic features
//! - [`feature`]: the assembled [`ScenarioFeature`]
//! - [`evaluation`]: interface for trajectory cost models
//! - [`scenario`]: recorded cycles for offline replay
//! - [`config`]: TOML configuration

pub mod config;
pub mod error;
pub mod evaluation;
pub mod extraction;
pub mod feature;
pub mod scenario;
pub mod snapshot;

pub use config::{DrishtiConfig, ExtractionConfig};
pub use error::{ConfigError, DrishtiError, ExtractionError, Result, Upstream};
pub use evaluation::{
    EvaluationError, PointKinematics, TrajectoryEvaluator, TrajectoryFeature,
    TrajectoryPointFeature,
};
pub use extraction::{FeatureExtractor, LaneMatch, ScenarioExtractor};
pub use feature::{EgoLane, ObstacleFeature, ObstacleFeatures, ScenarioFeature};
pub use scenario::{ScenarioCycle, ScenarioFile};
pub use snapshot::{
    JunctionAhead, PathContainer, PathProvider, PlannedPath, PoseContainer, PoseProvider,
    PoseSnapshot,
};
