//! Flood Threshold Table Conversion
//!
//! Converts the curated gauge threshold CSV into the JSON array consumed
//! by the dashboard's map loader:
//! 1. Read data/flood_levels_all_sites_valid.csv (one row per site)
//! 2. Coerce each row into a typed FloodSite record
//! 3. Write data/flood_thresholds.json, pretty-printed, atomically
//!
//! Any unreadable row aborts the run; a previous output file is left
//! unchanged. Paths can be overridden in pipeline.toml.
//!
//! Usage:
//!   cargo run --bin convert_thresholds

use floodmap_data::config::PipelineConfig;
use floodmap_data::convert;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🌊 Flood Threshold Converter");
    println!("============================\n");

    let config = PipelineConfig::load_or_default();

    println!("📋 Reading {}", config.input_csv.display());
    let sites = convert::convert_file(&config.input_csv, &config.output_json)?;

    let incomplete = sites
        .iter()
        .filter(|s| !s.flood_thresholds.is_complete())
        .count();
    if incomplete > 0 {
        println!("⚠ {} sites have no published thresholds", incomplete);
    }

    println!("✓ Wrote {}", config.output_json.display());
    println!("Converted {} flood sites to JSON.", sites.len());

    Ok(())
}
