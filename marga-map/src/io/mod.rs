//! Map persistence.

mod yaml;

pub use yaml::{LaneMapFile, LaneRecord};
