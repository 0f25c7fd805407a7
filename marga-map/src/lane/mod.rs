//! Lane geometry: centerline projection, containment and adjacency.

mod centerline;
mod info;

pub use centerline::{Centerline, LaneProjection};
pub use info::{LaneInfo, Side};
