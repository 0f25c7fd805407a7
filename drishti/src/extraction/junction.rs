//! Junction proximity.

use crate::snapshot::{JunctionAhead, PlannedPath};

/// Next junction on the planned route, exactly as the planner reported it.
///
/// The id and distance pass through untouched; `None` when the route has no
/// junction within its horizon.
pub fn resolve_junction(path: &PlannedPath) -> Option<JunctionAhead> {
    path.junction.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use marga_map::{JunctionId, LaneId};

    #[test]
    fn test_passthrough_is_exact() {
        let path = PlannedPath::new([LaneId::new("lane_A")]).with_junction(JunctionId::new("j_7"), 45.3);
        let junction = resolve_junction(&path).unwrap();
        assert_eq!(junction.junction, JunctionId::new("j_7"));
        assert_eq!(junction.distance.to_bits(), 45.3f32.to_bits());
    }

    #[test]
    fn test_no_junction_ahead() {
        let path = PlannedPath::new([LaneId::new("lane_A")]);
        assert!(resolve_junction(&path).is_none());
    }
}
