//! At-Risk Gauge Snapshot
//!
//! Queries the NWS river gauges map service for every gauge currently at
//! minor flood stage or above, reprojects the returned Web Mercator
//! points to latitude/longitude, and prints a preview of the first few:
//! 1. One GET against the riv_gauges MapServer query endpoint
//! 2. Typed decode of objectid/status/geometry per feature
//! 3. Reproject EPSG:3857 → EPSG:4326
//! 4. Print the first five records
//!
//! No output file is produced; the snapshot is a manual spot check of the
//! live feed the dashboard overlays on its map.
//!
//! Usage:
//!   cargo run --bin fetch_risk_snapshot

use chrono::Utc;
use floodmap_data::config::PipelineConfig;
use floodmap_data::ingest::riv_gauges;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🌊 At-Risk Gauge Snapshot");
    println!("=========================\n");

    let config = PipelineConfig::load_or_default();
    let client = reqwest::blocking::Client::new();

    println!("📡 Querying river gauges service...");
    let sites = riv_gauges::fetch_at_risk_sites(&client, config.max_record_count)?;

    println!(
        "\n✓ {} gauges at risk as of {}",
        sites.len(),
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    );

    for site in sites.iter().take(config.preview_count) {
        println!("   {}", site);
    }
    if sites.len() > config.preview_count {
        println!("   … {} more not shown", sites.len() - config.preview_count);
    }

    Ok(())
}
