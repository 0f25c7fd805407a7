//! Lane centerline as a polyline with arc-length parameterization.
//!
//! A centerline is an ordered list of vertices in travel direction. Each
//! consecutive pair forms a segment; the cumulative length at every vertex is
//! precomputed so projections resolve to a longitudinal coordinate `s` without
//! walking the polyline twice.
//!
//! # Frenet Coordinates
//!
//! ```text
//!            l > 0 (left)
//!               ▲
//!   v0 ─────────┼──────────► v1 ──────────► v2
//!   s = 0       │ s                        s = length
//!               ▼
//!            l < 0 (right)
//! ```

use crate::core::Point2D;
use crate::error::CenterlineError;

/// Longitudinal/lateral coordinates of a point relative to a centerline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaneProjection {
    /// Arc length along the centerline (meters). Negative before the first
    /// vertex, greater than the lane length past the last vertex.
    pub s: f32,
    /// Signed lateral offset (meters), positive to the left of travel direction.
    /// Measured to the nearest centerline point, or perpendicular to the end
    /// segment when `s` is extrapolated.
    pub l: f32,
    /// Heading of the centerline segment the point projected onto (radians).
    pub heading: f32,
}

/// Polyline centerline with cumulative arc length.
#[derive(Clone, Debug, PartialEq)]
pub struct Centerline {
    points: Vec<Point2D>,
    /// Cumulative length at each vertex; `accumulated[0] == 0.0`.
    accumulated: Vec<f32>,
}

impl Centerline {
    /// Build a centerline from vertices in travel order.
    ///
    /// Requires at least two finite vertices and no zero-length segments.
    pub fn new(points: Vec<Point2D>) -> Result<Self, CenterlineError> {
        if points.len() < 2 {
            return Err(CenterlineError::TooFewPoints(points.len()));
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(CenterlineError::NonFinite(index));
        }

        let mut accumulated = Vec::with_capacity(points.len());
        accumulated.push(0.0);
        for (i, pair) in points.windows(2).enumerate() {
            let len = pair[0].distance(&pair[1]);
            if len < f32::EPSILON {
                return Err(CenterlineError::DegenerateSegment(i));
            }
            accumulated.push(accumulated[i] + len);
        }

        Ok(Self {
            points,
            accumulated,
        })
    }

    /// Vertices in travel order.
    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Total arc length (meters).
    #[inline]
    pub fn length(&self) -> f32 {
        self.accumulated[self.accumulated.len() - 1]
    }

    /// Number of segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Project a point onto the centerline.
    ///
    /// The nearest segment (by clamped distance) is chosen; on equal distance
    /// the earlier segment wins. Offsets are clamped to the chosen segment
    /// except before the first vertex and past the last one, where the
    /// projection extrapolates along the end segment.
    ///
    /// `l` is the signed distance to the nearest centerline point, so points
    /// off the outside of a bend get their true offset from the shared
    /// vertex. Only on the extrapolated ends is it the perpendicular offset
    /// from the end segment's line.
    pub fn project(&self, point: Point2D) -> LaneProjection {
        let last = self.segment_count() - 1;

        let mut best_index = 0;
        let mut best_dist_sq = f32::INFINITY;
        let mut best_raw_t = 0.0;

        for i in 0..=last {
            let start = self.points[i];
            let dir = self.points[i + 1] - start;
            let raw_t = (point - start).dot(&dir) / dir.length_squared();
            let t = raw_t.clamp(0.0, 1.0);
            let dist_sq = point.distance_squared(&(start + dir * t));

            if dist_sq < best_dist_sq {
                best_index = i;
                best_dist_sq = dist_sq;
                best_raw_t = raw_t;
            }
        }

        let start = self.points[best_index];
        let dir = self.points[best_index + 1] - start;
        let seg_len = self.accumulated[best_index + 1] - self.accumulated[best_index];

        let extrapolated =
            (best_index == 0 && best_raw_t < 0.0) || (best_index == last && best_raw_t > 1.0);
        let cross = dir.cross(&(point - start));

        let (t, l) = if extrapolated {
            (best_raw_t, cross / seg_len)
        } else {
            // Distance to the clamped foot point, signed by side of travel
            let dist = best_dist_sq.sqrt();
            (best_raw_t.clamp(0.0, 1.0), if cross < 0.0 { -dist } else { dist })
        };

        LaneProjection {
            s: self.accumulated[best_index] + t * seg_len,
            l,
            heading: dir.angle(),
        }
    }

    /// Heading of the segment containing arc length `s` (clamped to the lane).
    pub fn heading_at(&self, s: f32) -> f32 {
        let index = self
            .accumulated
            .partition_point(|&acc| acc <= s)
            .saturating_sub(1)
            .min(self.segment_count() - 1);
        (self.points[index + 1] - self.points[index]).angle()
    }
}
