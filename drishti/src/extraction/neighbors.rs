//! Same-direction neighbor lanes of the current lane.

use std::collections::BTreeSet;

use marga_map::core::angle_diff;
use marga_map::{LaneId, MapService, Point2D, Side};

use super::locator::LaneMatch;

/// Resolves the lanes immediately left and right of the ego lane.
///
/// A map-labelled neighbor is kept only when it exists, is not the current
/// lane itself, and runs in the same direction as the current lane at the
/// ego's position.
pub struct NeighborLaneResolver<'a> {
    map: &'a dyn MapService,
    max_heading_diff: f32,
}

impl<'a> NeighborLaneResolver<'a> {
    pub fn new(map: &'a dyn MapService, max_heading_diff: f32) -> Self {
        Self {
            map,
            max_heading_diff,
        }
    }

    /// Neighbor lane ids; empty when the ego is off-lane.
    pub fn neighbors(&self, current: Option<&LaneMatch>, ego: Point2D) -> BTreeSet<LaneId> {
        let mut found = BTreeSet::new();
        let Some(current) = current else {
            return found;
        };
        let Some(current_lane) = self.map.resolve_lane(&current.lane) else {
            log::warn!("Current lane {} vanished from the map", current.lane);
            return found;
        };
        let current_heading = current_lane.heading_at(current.s);

        for side in Side::BOTH {
            let Some(id) = self.map.adjacent_lane(&current.lane, side) else {
                continue;
            };
            if id == current.lane {
                log::debug!("Lane {} lists itself as its {:?} neighbor", id, side);
                continue;
            }
            let Some(neighbor) = self.map.resolve_lane(&id) else {
                log::warn!(
                    "{:?} neighbor {} of lane {} is not in the map, skipping",
                    side,
                    id,
                    current.lane
                );
                continue;
            };

            let heading = self.map.project(neighbor, ego).heading;
            let diff = angle_diff(current_heading, heading).abs();
            if diff > self.max_heading_diff {
                log::debug!(
                    "Dropping {:?} neighbor {}: heading differs by {:.2} rad",
                    side,
                    id,
                    diff
                );
                continue;
            }
            found.insert(id);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marga_map::{Centerline, LaneInfo, LaneMap};
    use std::f32::consts::FRAC_PI_2;

    fn lane(id: &str, from: (f32, f32), to: (f32, f32)) -> LaneInfo {
        let line = Centerline::new(vec![Point2D::new(from.0, from.1), Point2D::new(to.0, to.1)])
            .unwrap();
        LaneInfo::new(LaneId::new(id), line, 1.75, 1.75).unwrap()
    }

    fn on(lane: &str, s: f32) -> LaneMatch {
        LaneMatch {
            lane: LaneId::new(lane),
            s,
            l: 0.0,
        }
    }

    /// Three eastbound lanes, 3.5 m apart, middle lane at y = 0.
    fn three_lane_road() -> LaneMap {
        LaneMap::from_lanes([
            lane("middle", (0.0, 0.0), (50.0, 0.0))
                .with_neighbor(Side::Left, LaneId::new("left"))
                .with_neighbor(Side::Right, LaneId::new("right")),
            lane("left", (0.0, 3.5), (50.0, 3.5)).with_neighbor(Side::Right, LaneId::new("middle")),
            lane("right", (0.0, -3.5), (50.0, -3.5)).with_neighbor(Side::Left, LaneId::new("middle")),
        ])
        .unwrap()
    }

    #[test]
    fn test_off_lane_has_no_neighbors() {
        let map = three_lane_road();
        let resolver = NeighborLaneResolver::new(&map, FRAC_PI_2);
        assert!(resolver.neighbors(None, Point2D::new(10.0, 0.0)).is_empty());
    }

    #[test]
    fn test_middle_lane_has_both_sides() {
        let map = three_lane_road();
        let resolver = NeighborLaneResolver::new(&map, FRAC_PI_2);
        let found = resolver.neighbors(Some(&on("middle", 10.0)), Point2D::new(10.0, 0.0));
        assert_eq!(found, BTreeSet::from([LaneId::new("left"), LaneId::new("right")]));
    }

    #[test]
    fn test_edge_lane_has_one_side() {
        let map = three_lane_road();
        let resolver = NeighborLaneResolver::new(&map, FRAC_PI_2);
        let found = resolver.neighbors(Some(&on("left", 10.0)), Point2D::new(10.0, 3.5));
        assert_eq!(found, BTreeSet::from([LaneId::new("middle")]));
    }

    #[test]
    fn test_opposite_direction_excluded() {
        let map = LaneMap::from_lanes([
            lane("east", (0.0, 0.0), (50.0, 0.0)).with_neighbor(Side::Left, LaneId::new("west")),
            lane("west", (50.0, 3.5), (0.0, 3.5)),
        ])
        .unwrap();
        let resolver = NeighborLaneResolver::new(&map, FRAC_PI_2);
        let found = resolver.neighbors(Some(&on("east", 20.0)), Point2D::new(20.0, 0.0));
        assert!(found.is_empty());
    }

    #[test]
    fn test_self_and_dangling_neighbors_skipped() {
        let map = LaneMap::from_lanes([lane("solo", (0.0, 0.0), (50.0, 0.0))
            .with_neighbor(Side::Left, LaneId::new("solo"))
            .with_neighbor(Side::Right, LaneId::new("ghost"))])
        .unwrap();
        let resolver = NeighborLaneResolver::new(&map, FRAC_PI_2);
        let found = resolver.neighbors(Some(&on("solo", 5.0)), Point2D::new(5.0, 0.0));
        assert!(found.is_empty());
    }

    #[test]
    fn test_tight_threshold_rejects_diverging_lane() {
        // Exit ramp peeling off at ~0.46 rad
        let map = LaneMap::from_lanes([
            lane("main", (0.0, 0.0), (50.0, 0.0)).with_neighbor(Side::Right, LaneId::new("ramp")),
            lane("ramp", (0.0, -3.5), (40.0, -23.5)),
        ])
        .unwrap();
        let ego = Point2D::new(10.0, 0.0);

        let loose = NeighborLaneResolver::new(&map, FRAC_PI_2);
        assert_eq!(loose.neighbors(Some(&on("main", 10.0)), ego).len(), 1);

        let strict = NeighborLaneResolver::new(&map, 0.2);
        assert!(strict.neighbors(Some(&on("main", 10.0)), ego).is_empty());
    }
}
