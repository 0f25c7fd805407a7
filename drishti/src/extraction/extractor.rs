//! Per-cycle scenario feature assembly.
//!
//! [`ScenarioExtractor`] turns one consistent (pose, path) pair into a
//! [`ScenarioFeature`]. [`FeatureExtractor`] drives it from the upstream
//! providers, capturing both snapshots once at the start of every cycle.
//!
//! # Parallel Mode
//!
//! ```text
//!              kinematics snapshot
//!        ┌─────────── spawn ───────────┐
//! caller thread          "lane-features" worker
//! ─────────────          ──────────────────────
//! junction               lane location
//!                        neighbor lanes
//!        └──────────── join ───────────┘
//!                   assemble
//! ```

use std::collections::BTreeSet;
use std::panic;
use std::sync::Arc;
use std::thread;

use marga_map::{LaneId, MapService, Point2D};

use crate::config::ExtractionConfig;
use crate::error::{ExtractionError, Result, Upstream};
use crate::feature::{EgoLane, ScenarioFeature};
use crate::snapshot::{JunctionAhead, PathProvider, PlannedPath, PoseProvider, PoseSnapshot};

use super::junction::resolve_junction;
use super::kinematics::{self, Kinematics};
use super::locator::{LaneLocator, LaneMatch};
use super::neighbors::NeighborLaneResolver;

type LaneFeatures = (Option<LaneMatch>, BTreeSet<LaneId>);

/// Assembles scenario features against a shared lane map.
pub struct ScenarioExtractor {
    map: Arc<dyn MapService>,
    config: ExtractionConfig,
}

impl ScenarioExtractor {
    pub fn new(map: Arc<dyn MapService>, config: ExtractionConfig) -> Self {
        Self { map, config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Build the feature for one pose/path pair.
    ///
    /// Never returns a partially filled feature: an off-lane vehicle yields
    /// no ego lane and no neighbors, a route without a junction yields no
    /// junction.
    pub fn extract(&self, pose: &PoseSnapshot, path: &PlannedPath) -> ScenarioFeature {
        self.extract_from(Kinematics::from(pose), path)
    }

    /// Like [`extract`](Self::extract), but fails when either snapshot is
    /// unavailable.
    pub fn try_extract(
        &self,
        pose: Option<&PoseSnapshot>,
        path: Option<&PlannedPath>,
    ) -> Result<ScenarioFeature> {
        let kinematics = kinematics::snapshot(pose)?;
        let path = path.ok_or(ExtractionError::MissingUpstreamState(Upstream::Path))?;
        Ok(self.extract_from(kinematics, path))
    }

    fn extract_from(&self, kinematics: Kinematics, path: &PlannedPath) -> ScenarioFeature {
        let ego = kinematics.position;
        let (junction, (lane_match, neighbors)) = if self.config.parallel {
            self.extract_parallel(ego, path)
        } else {
            (resolve_junction(path), self.lane_features(ego, &path.lanes))
        };

        let ego_lane = match lane_match {
            Some(found) => Some(EgoLane {
                lane: found.lane,
                s: found.s,
            }),
            None => {
                log::warn!("Ego vehicle is not on any lane at ({:.2}, {:.2})", ego.x, ego.y);
                None
            }
        };

        ScenarioFeature::assemble(
            kinematics.speed,
            kinematics.heading,
            ego_lane,
            neighbors,
            junction,
        )
    }

    fn lane_features(&self, ego: Point2D, lanes: &[LaneId]) -> LaneFeatures {
        let map = self.map.as_ref();
        let lane_match = LaneLocator::new(map).locate(ego, lanes);
        let neighbors = NeighborLaneResolver::new(map, self.config.max_neighbor_heading_diff)
            .neighbors(lane_match.as_ref(), ego);
        (lane_match, neighbors)
    }

    fn extract_parallel(
        &self,
        ego: Point2D,
        path: &PlannedPath,
    ) -> (Option<JunctionAhead>, LaneFeatures) {
        thread::scope(|scope| {
            let worker = thread::Builder::new()
                .name("lane-features".into())
                .spawn_scoped(scope, || self.lane_features(ego, &path.lanes));

            let junction = resolve_junction(path);

            let lane_features = match worker {
                Ok(handle) => match handle.join() {
                    Ok(features) => features,
                    Err(payload) => panic::resume_unwind(payload),
                },
                Err(e) => {
                    log::warn!("Failed to spawn lane-features worker, running inline: {}", e);
                    self.lane_features(ego, &path.lanes)
                }
            };

            (junction, lane_features)
        })
    }
}

/// Pulls upstream snapshots and keeps the latest scenario feature.
pub struct FeatureExtractor {
    pose: Arc<dyn PoseProvider>,
    path: Arc<dyn PathProvider>,
    extractor: ScenarioExtractor,
    latest: Option<ScenarioFeature>,
    cycles: u64,
}

impl FeatureExtractor {
    pub fn new(
        pose: Arc<dyn PoseProvider>,
        path: Arc<dyn PathProvider>,
        extractor: ScenarioExtractor,
    ) -> Self {
        Self {
            pose,
            path,
            extractor,
            latest: None,
            cycles: 0,
        }
    }

    /// Run one extraction cycle.
    ///
    /// Each provider is read exactly once. On failure the previously stored
    /// feature is discarded so a stale summary is never served.
    pub fn extract_features(&mut self) -> Result<&ScenarioFeature> {
        let pose = self.pose.current_pose();
        let path = self.path.current_path();

        match self.extractor.try_extract(pose.as_ref(), path.as_ref()) {
            Ok(feature) => {
                self.cycles += 1;
                log::debug!(
                    "Cycle {}: lane={:?}, neighbors={}",
                    self.cycles,
                    feature.current_lane().map(LaneId::as_str),
                    feature.neighbor_lanes().len()
                );
                Ok(&*self.latest.insert(feature))
            }
            Err(e) => {
                self.latest = None;
                Err(e)
            }
        }
    }

    /// Feature from the last successful cycle, if the last cycle succeeded.
    pub fn latest(&self) -> Option<&ScenarioFeature> {
        self.latest.as_ref()
    }

    /// Number of successful cycles so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{PathContainer, PoseContainer};
    use approx::assert_relative_eq;
    use marga_map::{Centerline, JunctionId, LaneInfo, LaneMap, Side};

    fn lane(id: &str, from: (f32, f32), to: (f32, f32)) -> LaneInfo {
        let line = Centerline::new(vec![Point2D::new(from.0, from.1), Point2D::new(to.0, to.1)])
            .unwrap();
        LaneInfo::new(LaneId::new(id), line, 1.75, 1.75).unwrap()
    }

    fn road() -> Arc<LaneMap> {
        Arc::new(
            LaneMap::from_lanes([
                lane("lane_A", (0.0, 2.0), (20.0, 2.0))
                    .with_neighbor(Side::Left, LaneId::new("lane_L")),
                lane("lane_B", (20.0, 2.0), (40.0, 2.0)),
                lane("lane_L", (0.0, 5.5), (20.0, 5.5)),
            ])
            .unwrap(),
        )
    }

    fn extractor(parallel: bool) -> ScenarioExtractor {
        let config = ExtractionConfig {
            parallel,
            ..Default::default()
        };
        ScenarioExtractor::new(road(), config)
    }

    #[test]
    fn test_on_lane_feature() {
        let pose = PoseSnapshot::new(Point2D::new(10.0, 2.0), 0.0, 5.0);
        let path = PlannedPath::new([LaneId::new("lane_A"), LaneId::new("lane_B")]);
        let feature = extractor(false).extract(&pose, &path);

        assert_eq!(feature.current_lane(), Some(&LaneId::new("lane_A")));
        assert_relative_eq!(feature.current_lane_s().unwrap(), 10.0, epsilon = 1e-4);
        assert_eq!(
            feature.neighbor_lanes(),
            &BTreeSet::from([LaneId::new("lane_L")])
        );
        assert_eq!(feature.speed(), 5.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let path = PlannedPath::new([LaneId::new("lane_A"), LaneId::new("lane_B")])
            .with_junction(JunctionId::new("j_1"), 30.0);
        let sequential = extractor(false);
        let parallel = extractor(true);

        for x in [-5.0f32, 0.0, 10.0, 20.0, 35.0, 60.0] {
            let pose = PoseSnapshot::new(Point2D::new(x, 2.3), 0.05, 7.0);
            assert_eq!(
                sequential.extract(&pose, &path),
                parallel.extract(&pose, &path)
            );
        }
    }

    #[test]
    fn test_try_extract_missing_inputs() {
        let extractor = extractor(false);
        let pose = PoseSnapshot::new(Point2D::new(10.0, 2.0), 0.0, 5.0);
        let path = PlannedPath::new([LaneId::new("lane_A")]);

        assert_eq!(
            extractor.try_extract(None, Some(&path)),
            Err(ExtractionError::MissingUpstreamState(Upstream::Pose))
        );
        assert_eq!(
            extractor.try_extract(Some(&pose), None),
            Err(ExtractionError::MissingUpstreamState(Upstream::Path))
        );
        assert!(extractor.try_extract(Some(&pose), Some(&path)).is_ok());
    }

    #[test]
    fn test_feature_extractor_discards_stale_feature() {
        let pose = Arc::new(PoseContainer::new());
        let path = Arc::new(PathContainer::new());
        let mut features = FeatureExtractor::new(pose.clone(), path.clone(), extractor(false));

        assert!(features.extract_features().is_err());
        assert!(features.latest().is_none());

        pose.update(PoseSnapshot::new(Point2D::new(10.0, 2.0), 0.0, 5.0));
        path.update(PlannedPath::new([LaneId::new("lane_A")]));
        assert!(features.extract_features().is_ok());
        assert!(features.latest().is_some());
        assert_eq!(features.cycles(), 1);

        pose.clear();
        let err = features.extract_features().unwrap_err();
        assert_eq!(err.code(), "MISSING_UPSTREAM_STATE");
        assert!(features.latest().is_none());
        assert_eq!(features.cycles(), 1);
    }
}
