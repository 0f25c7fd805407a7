//! Drishti replay tool
//!
//! Replays a recorded scenario against a lane map and prints the scenario
//! feature extracted on every cycle as YAML.
//!
//! ```bash
//! drishti --config drishti.toml
//! drishti --map data/lanes.yaml --scenario data/replay.yaml --parallel
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};

use drishti::{
    DrishtiConfig, DrishtiError, FeatureExtractor, PathContainer, PoseContainer,
    ScenarioExtractor, ScenarioFile,
};
use marga_map::LaneMap;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file (default: drishti.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lane map YAML, overrides [map] path
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Scenario YAML, overrides [scenario] path
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Run lane features on a worker thread
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<(), DrishtiError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            DrishtiConfig::load(path)?
        }
        None => DrishtiConfig::load_default()?,
    };
    if let Some(map) = args.map {
        config.map.path = map;
    }
    if let Some(scenario) = args.scenario {
        config.scenario.path = scenario;
    }
    if args.parallel {
        config.extraction.parallel = true;
    }

    info!("Drishti v{}", env!("CARGO_PKG_VERSION"));

    let map = LaneMap::from_yaml_file(&config.map.path)?;
    let scenario = ScenarioFile::from_yaml_file(&config.scenario.path)?;

    let pose = Arc::new(PoseContainer::new());
    let path = Arc::new(PathContainer::new());
    let extractor = ScenarioExtractor::new(Arc::new(map), config.extraction.clone());
    let mut features = FeatureExtractor::new(pose.clone(), path.clone(), extractor);

    let mut failed = 0usize;
    for (index, cycle) in scenario.cycles.iter().enumerate() {
        cycle.publish(&pose, &path);

        match features.extract_features() {
            Ok(feature) => {
                println!("# cycle {}", index);
                print!("{}", serde_yaml::to_string(feature)?);
            }
            Err(e) => {
                warn!("Cycle {} skipped [{}]: {}", index, e.code(), e);
                failed += 1;
            }
        }
    }

    info!(
        "Replayed {} cycles: {} extracted, {} skipped",
        scenario.cycles.len(),
        features.cycles(),
        failed
    );
    Ok(())
}
