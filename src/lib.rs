/// floodmap_data: data pipeline utilities for the flood-monitoring dashboard.
///
/// Two independent one-shot tools share this library: the threshold
/// converter (`convert_thresholds`) turns the curated gauge CSV into the
/// dashboard's `flood_thresholds.json`, and the snapshot fetcher
/// (`fetch_risk_snapshot`) pulls the current at-risk gauge set from the
/// NWS river gauges map service and prints a preview.
///
/// # Module structure
///
/// ```text
/// floodmap_data
/// ├── model       — shared data types (FloodSite, RiskSite, GaugeStatus, …)
/// ├── config      — pipeline configuration loader (pipeline.toml)
/// ├── convert     — CSV threshold table → flood_thresholds.json
/// ├── projection  — Web Mercator (EPSG:3857) ↔ WGS84 (EPSG:4326)
/// └── ingest
///     ├── riv_gauges — NWS river gauges API: URL construction + JSON parsing
///     └── fixtures (test only) — representative API response payloads
/// ```

/// Public modules
pub mod config;
pub mod convert;
pub mod ingest;
pub mod model;
pub mod projection;
