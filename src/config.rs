/// Pipeline configuration loader - parses pipeline.toml
///
/// The converter and the snapshot fetcher take no command-line flags and
/// read no environment variables; file paths and query tuning live here.
/// Every field has a compiled default matching the dashboard's static data
/// layout, so `pipeline.toml` may be absent or partial.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_PATH: &str = "pipeline.toml";

/// Pipeline settings shared by both utilities.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Flood threshold table (CSV, header row required).
    pub input_csv: PathBuf,
    /// JSON output consumed by the dashboard map loader. Overwritten on
    /// each successful run.
    pub output_json: PathBuf,
    /// How many at-risk gauges the snapshot fetcher prints.
    pub preview_count: usize,
    /// Result window requested from the feature service in one page.
    pub max_record_count: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_csv: PathBuf::from("data/flood_levels_all_sites_valid.csv"),
            output_json: PathBuf::from("data/flood_thresholds.json"),
            preview_count: 5,
            max_record_count: 8000,
        }
    }
}

impl PipelineConfig {
    /// Loads `pipeline.toml` from the current working directory, falling
    /// back to the defaults when the file is absent.
    ///
    /// # Panics
    /// Panics if the file exists but is malformed. This is intentional —
    /// a present-but-broken override should not silently run with
    /// defaults.
    pub fn load_or_default() -> Self {
        Self::load_from(Path::new(CONFIG_PATH))
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e)),
            Err(_) => Self::default(),
        }
    }
}
