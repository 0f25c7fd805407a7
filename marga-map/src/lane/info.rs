//! Lane geometry and adjacency.

use crate::core::Point2D;
use crate::error::{MapError, Result};
use crate::ids::LaneId;

use super::centerline::{Centerline, LaneProjection};

/// Lateral side relative to a lane's travel direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left of travel direction (positive `l`).
    Left,
    /// Right of travel direction (negative `l`).
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

/// A lane: centerline, half widths and same-direction neighbors.
///
/// The lane occupies the band `-right_width <= l <= left_width` around its
/// centerline for `0 <= s <= length`.
#[derive(Clone, Debug, PartialEq)]
pub struct LaneInfo {
    id: LaneId,
    centerline: Centerline,
    left_width: f32,
    right_width: f32,
    left_neighbor: Option<LaneId>,
    right_neighbor: Option<LaneId>,
}

impl LaneInfo {
    /// Create a lane with the given half widths and no neighbors.
    pub fn new(id: LaneId, centerline: Centerline, left_width: f32, right_width: f32) -> Result<Self> {
        for (name, width) in [("left_width", left_width), ("right_width", right_width)] {
            if !width.is_finite() || width <= 0.0 {
                return Err(MapError::InvalidLane {
                    id: id.to_string(),
                    reason: format!("{} must be positive and finite, got {}", name, width),
                });
            }
        }

        Ok(Self {
            id,
            centerline,
            left_width,
            right_width,
            left_neighbor: None,
            right_neighbor: None,
        })
    }

    /// Set the same-direction neighbor on one side.
    pub fn with_neighbor(mut self, side: Side, neighbor: LaneId) -> Self {
        match side {
            Side::Left => self.left_neighbor = Some(neighbor),
            Side::Right => self.right_neighbor = Some(neighbor),
        }
        self
    }

    /// Lane id
    #[inline]
    pub fn id(&self) -> &LaneId {
        &self.id
    }

    /// Lane centerline
    #[inline]
    pub fn centerline(&self) -> &Centerline {
        &self.centerline
    }

    /// Lane length along the centerline (meters).
    #[inline]
    pub fn length(&self) -> f32 {
        self.centerline.length()
    }

    /// Half width to the left of the centerline (meters).
    #[inline]
    pub fn left_width(&self) -> f32 {
        self.left_width
    }

    /// Half width to the right of the centerline (meters).
    #[inline]
    pub fn right_width(&self) -> f32 {
        self.right_width
    }

    /// Neighbor recorded on the given side, if any.
    #[inline]
    pub fn neighbor(&self, side: Side) -> Option<&LaneId> {
        match side {
            Side::Left => self.left_neighbor.as_ref(),
            Side::Right => self.right_neighbor.as_ref(),
        }
    }

    /// Project a point into this lane's (s, l) frame.
    #[inline]
    pub fn project(&self, point: Point2D) -> LaneProjection {
        self.centerline.project(point)
    }

    /// Check whether a point lies within the lane's longitudinal and lateral bounds.
    pub fn contains(&self, point: Point2D) -> bool {
        if !point.is_finite() {
            return false;
        }
        let proj = self.project(point);
        (0.0..=self.length()).contains(&proj.s) && (-self.right_width..=self.left_width).contains(&proj.l)
    }

    /// Travel heading at arc length `s` (radians).
    #[inline]
    pub fn heading_at(&self, s: f32) -> f32 {
        self.centerline.heading_at(s)
    }
}
