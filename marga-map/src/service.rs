//! Map query interface consumed by feature extraction.

use crate::core::Point2D;
use crate::ids::LaneId;
use crate::lane::{LaneInfo, LaneProjection, Side};

/// Read-only lane queries against an already-loaded map.
///
/// All queries are in-memory lookups; implementations must be shareable
/// across worker threads.
///
/// # Example
///
/// ```rust,ignore
/// use marga_map::{LaneId, MapService, Point2D};
///
/// fn lane_s(map: &dyn MapService, id: &LaneId, p: Point2D) -> Option<f32> {
///     let lane = map.resolve_lane(id)?;
///     map.contains_point(lane, p).then(|| map.project(lane, p).s)
/// }
/// ```
pub trait MapService: Send + Sync {
    /// Look up a lane by id. `None` for ids the map does not know.
    fn resolve_lane(&self, id: &LaneId) -> Option<&LaneInfo>;

    /// Check whether a point lies within a lane's bounds.
    fn contains_point(&self, lane: &LaneInfo, point: Point2D) -> bool {
        lane.contains(point)
    }

    /// Project a point into a lane's (s, l) frame.
    fn project(&self, lane: &LaneInfo, point: Point2D) -> LaneProjection {
        lane.project(point)
    }

    /// The lane immediately to one side of `id` sharing its travel direction.
    fn adjacent_lane(&self, id: &LaneId, side: Side) -> Option<LaneId>;
}
