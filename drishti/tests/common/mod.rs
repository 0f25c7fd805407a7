//! Shared fixtures for Drishti integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use drishti::{
    ExtractionConfig, FeatureExtractor, PathContainer, PoseContainer, ScenarioExtractor,
};
use marga_map::LaneMap;

/// Straight eastbound road along y = 2 with lanes on both sides.
///
/// ```text
///  y=5.5   lane_L  ───────────►          lane_W  ◄──────────  (westbound)
///  y=2.0   lane_A  ───────────►          lane_B  ───────────►
///  y=-1.5  lane_R  ───────────►
///          x=0              x=20                           x=40
/// ```
///
/// lane_B's map entry lists the westbound lane_W as its left neighbor.
pub const ROAD: &str = r#"
lanes:
  - id: lane_A
    centerline: [{ x: 0.0, y: 2.0 }, { x: 20.0, y: 2.0 }]
    left_neighbor: lane_L
    right_neighbor: lane_R
  - id: lane_B
    centerline: [{ x: 20.0, y: 2.0 }, { x: 40.0, y: 2.0 }]
    left_neighbor: lane_W
  - id: lane_L
    centerline: [{ x: 0.0, y: 5.5 }, { x: 20.0, y: 5.5 }]
    right_neighbor: lane_A
  - id: lane_R
    centerline: [{ x: 0.0, y: -1.5 }, { x: 20.0, y: -1.5 }]
    left_neighbor: lane_A
  - id: lane_W
    centerline: [{ x: 40.0, y: 5.5 }, { x: 20.0, y: 5.5 }]
"#;

pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

pub fn road() -> LaneMap {
    LaneMap::from_yaml_str(ROAD).unwrap()
}

/// Extractor over `map` plus the containers feeding it.
pub fn harness(
    map: LaneMap,
    parallel: bool,
) -> (FeatureExtractor, Arc<PoseContainer>, Arc<PathContainer>) {
    let pose = Arc::new(PoseContainer::new());
    let path = Arc::new(PathContainer::new());
    let config = ExtractionConfig {
        parallel,
        ..Default::default()
    };
    let extractor = ScenarioExtractor::new(Arc::new(map), config);
    (
        FeatureExtractor::new(pose.clone(), path.clone(), extractor),
        pose,
        path,
    )
}
