//! # Marga-Map: Lane Map Queries
//!
//! An in-memory lane map answering the geometric questions behavior
//! prediction needs: which lane contains a point, where along that lane the
//! point is, and which lanes run alongside it.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_map::{LaneId, LaneMap, MapService, Point2D};
//!
//! let map = LaneMap::from_yaml_str(r#"
//! lanes:
//!   - id: lane_A
//!     centerline:
//!       - { x: 0.0, y: 2.0 }
//!       - { x: 20.0, y: 2.0 }
//! "#).unwrap();
//!
//! let lane = map.resolve_lane(&LaneId::new("lane_A")).unwrap();
//! let ego = Point2D::new(10.0, 2.0);
//! assert!(map.contains_point(lane, ego));
//! assert!((map.project(lane, ego).s - 10.0).abs() < 1e-5);
//! ```
//!
//! ## Coordinate Frame
//!
//! Planar map frame, meters. Headings in radians, counter-clockwise positive
//! from +X. Lane-relative coordinates are `(s, l)`: arc length along the
//! centerline in travel direction, and signed lateral offset with `l > 0`
//! to the left of travel.
//!
//! ## Architecture
//!
//! - [`core`]: Point type and angle helpers
//! - [`lane`]: Centerline projection, lane bounds, adjacency
//! - [`map`]: [`LaneMap`] storage
//! - [`service`]: [`MapService`] query trait
//! - [`io`]: YAML map files

pub mod core;
pub mod error;
pub mod ids;
pub mod io;
pub mod lane;
pub mod map;
pub mod service;

pub use crate::core::Point2D;
pub use error::{CenterlineError, MapError};
pub use ids::{JunctionId, LaneId};
pub use lane::{Centerline, LaneInfo, LaneProjection, Side};
pub use map::LaneMap;
pub use service::MapService;
