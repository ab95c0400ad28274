/// Flood threshold table converter: CSV → flood_thresholds.json
///
/// Reads the curated gauge threshold table (one row per site) and emits
/// the JSON array the dashboard's map loader consumes. Conversion is
/// all-or-nothing: any unreadable row fails the run before the output
/// path is touched, so a previous successful output survives a bad input.
///
/// Expected CSV header:
///   site_code, usgsId, siteName, latitude, longitude,
///   minor_stage, mod_stage, major_stage, action_stage
///
/// Extra columns are ignored; padded headers are trimmed.

use crate::model::{ConvertError, FloodSite, FloodThresholds};
use serde::Deserialize;
use std::fs;
use std::path::Path;

// ---------------------------------------------------------------------------
// CSV row schema
// ---------------------------------------------------------------------------

/// One row of the threshold table. Numeric fields deserialize directly to
/// their target types; a non-numeric value fails the whole run with the
/// offending row's position.
#[derive(Debug, Deserialize)]
struct ThresholdRow {
    site_code: u64,
    #[serde(rename = "usgsId")]
    usgs_id: u64,
    #[serde(rename = "siteName")]
    site_name: String,
    latitude: f64,
    longitude: f64,
    minor_stage: f64,
    mod_stage: f64,
    major_stage: f64,
    action_stage: f64,
}

impl From<ThresholdRow> for FloodSite {
    fn from(row: ThresholdRow) -> Self {
        FloodSite {
            id: row.site_code,
            usgs_id: row.usgs_id,
            name: row.site_name,
            latitude: row.latitude,
            longitude: row.longitude,
            flood_thresholds: FloodThresholds {
                minor: row.minor_stage,
                moderate: row.mod_stage,
                major: row.major_stage,
                action: row.action_stage,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Reads the threshold table into `FloodSite` records, one per data row,
/// preserving input row order.
///
/// # Errors
/// - `ConvertError::Csv` — missing or unreadable input file (wrapped
///   I/O error), missing column, or unparseable numeric value; no
///   partial result is returned.
pub fn read_flood_sites(path: &Path) -> Result<Vec<FloodSite>, ConvertError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut sites = Vec::new();
    for row in reader.deserialize::<ThresholdRow>() {
        sites.push(row?.into());
    }
    Ok(sites)
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Writes the sites as a pretty-printed JSON array (2-space indentation)
/// to `path`, overwriting any previous output.
///
/// The document is serialized fully in memory, written to a `.tmp`
/// sibling, then renamed into place, so a failed run never leaves a
/// truncated file behind.
pub fn write_thresholds_json(sites: &[FloodSite], path: &Path) -> Result<(), ConvertError> {
    let json = serde_json::to_string_pretty(sites)?;

    let mut tmp_path = path.to_path_buf();
    tmp_path.set_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Full conversion: read `input`, write `output`, return the records for
/// reporting.
pub fn convert_file(input: &Path, output: &Path) -> Result<Vec<FloodSite>, ConvertError> {
    let sites = read_flood_sites(input)?;
    write_thresholds_json(&sites, output)?;
    Ok(sites)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
