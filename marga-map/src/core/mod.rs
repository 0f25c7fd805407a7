//! Core geometry types shared by the lane map.

pub mod math;
mod point;

pub use math::{angle_diff, normalize_angle};
pub use point::Point2D;
