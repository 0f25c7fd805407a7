//! Lane location: which planned lane contains the ego position.

use marga_map::{LaneId, MapService, Point2D};

/// Lane containing the ego position and the ego's (s, l) on it.
#[derive(Clone, Debug, PartialEq)]
pub struct LaneMatch {
    pub lane: LaneId,
    /// Arc length along the lane (meters)
    pub s: f32,
    /// Lateral offset from the centerline (meters, left positive)
    pub l: f32,
}

/// Scans candidate lanes in travel order for the one containing a point.
pub struct LaneLocator<'a> {
    map: &'a dyn MapService,
}

impl<'a> LaneLocator<'a> {
    pub fn new(map: &'a dyn MapService) -> Self {
        Self { map }
    }

    /// Find the first candidate lane, in the given order, containing `ego`.
    ///
    /// Candidates the map cannot resolve are skipped. Returns `None` when no
    /// candidate contains the position, which is a normal outcome during
    /// lane changes.
    pub fn locate(&self, ego: Point2D, candidates: &[LaneId]) -> Option<LaneMatch> {
        for id in candidates {
            let Some(lane) = self.map.resolve_lane(id) else {
                log::warn!("Planned lane {} is not in the map, skipping", id);
                continue;
            };

            if self.map.contains_point(lane, ego) {
                let proj = self.map.project(lane, ego);
                log::trace!("Ego on lane {} at s={:.2}, l={:.2}", id, proj.s, proj.l);
                return Some(LaneMatch {
                    lane: id.clone(),
                    s: proj.s,
                    l: proj.l,
                });
            }
        }
        None
    }
}
