//! Configuration loading for Drishti
//!
//! ```toml
//! [map]
//! path = "data/lanes.yaml"
//!
//! [extraction]
//! parallel = true
//! max_neighbor_heading_diff = 1.5708   # radians
//!
//! [scenario]
//! path = "data/replay.yaml"
//! ```

use std::f32::consts::{FRAC_PI_2, PI};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Main configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DrishtiConfig {
    #[serde(default)]
    pub map: MapSection,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub scenario: ScenarioSection,
}

/// Lane map source
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapSection {
    /// Path to the YAML lane map (default: data/lanes.yaml)
    #[serde(default = "default_map_path")]
    pub path: PathBuf,
}

/// Recorded scenario to replay
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioSection {
    /// Path to the YAML scenario (default: data/replay.yaml)
    #[serde(default = "default_scenario_path")]
    pub path: PathBuf,
}

/// Per-cycle extraction settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Run lane location and neighbor resolution on a worker thread while
    /// kinematics and junction resolution run on the caller (default: false)
    #[serde(default)]
    pub parallel: bool,

    /// Largest heading difference (radians) between the ego lane and an
    /// adjacent lane for both to count as the same travel direction
    /// (default: π/2)
    #[serde(default = "default_max_neighbor_heading_diff")]
    pub max_neighbor_heading_diff: f32,
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            path: default_map_path(),
        }
    }
}

impl Default for ScenarioSection {
    fn default() -> Self {
        Self {
            path: default_scenario_path(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            max_neighbor_heading_diff: default_max_neighbor_heading_diff(),
        }
    }
}

fn default_map_path() -> PathBuf {
    PathBuf::from("data/lanes.yaml")
}
fn default_scenario_path() -> PathBuf {
    PathBuf::from("data/replay.yaml")
}
fn default_max_neighbor_heading_diff() -> f32 {
    FRAC_PI_2
}

impl ExtractionConfig {
    /// Reject thresholds that would make neighbor filtering meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diff = self.max_neighbor_heading_diff;
        if !diff.is_finite() || !(0.0..PI).contains(&diff) {
            return Err(ConfigError::Invalid(format!(
                "max_neighbor_heading_diff must be in [0, π), got {}",
                diff
            )));
        }
        Ok(())
    }
}

impl DrishtiConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load `drishti.toml` from the working directory, or defaults if absent
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new("drishti.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate from a TOML string
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: DrishtiConfig = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extraction.validate()
    }
}
