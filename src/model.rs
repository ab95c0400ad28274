/// Shared data types for the dashboard data pipeline.
///
/// `FloodSite` is the record shape written to `flood_thresholds.json` and
/// consumed by the dashboard's map loader; its serde field order is the
/// JSON key order, so changing it changes the output bytes. `RiskSite` is
/// the transient record printed by the snapshot fetcher and is never
/// persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Flood threshold records (ThresholdConverter output)
// ---------------------------------------------------------------------------

/// Source-data marker for a site with no published stage threshold.
pub const STAGE_SENTINEL: f64 = -9999.0;

/// NWS flood stage thresholds for a gauge site, in feet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloodThresholds {
    pub minor: f64,
    pub moderate: f64,
    pub major: f64,
    pub action: f64,
}

impl FloodThresholds {
    /// Whether the minor/moderate/major stages are all published values.
    /// Sites without official NWS thresholds carry the `-9999` sentinel.
    pub fn is_complete(&self) -> bool {
        self.minor != STAGE_SENTINEL
            && self.moderate != STAGE_SENTINEL
            && self.major != STAGE_SENTINEL
    }

    /// Evaluates a stage reading against these thresholds.
    ///
    /// Checks descend from major to action; incomplete thresholds classify
    /// every reading as `Normal`, and a sentinel action stage never matches.
    pub fn classify(&self, stage_ft: f64) -> FloodSeverity {
        if !self.is_complete() {
            return FloodSeverity::Normal;
        }
        if stage_ft >= self.major {
            FloodSeverity::Major
        } else if stage_ft >= self.moderate {
            FloodSeverity::Moderate
        } else if stage_ft >= self.minor {
            FloodSeverity::Minor
        } else if self.action != STAGE_SENTINEL && stage_ft >= self.action {
            FloodSeverity::Action
        } else {
            FloodSeverity::Normal
        }
    }
}

/// A single gauge site with its flood thresholds, as written to
/// `flood_thresholds.json`. Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloodSite {
    pub id: u64,
    #[serde(rename = "usgsId")]
    pub usgs_id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "floodThresholds")]
    pub flood_thresholds: FloodThresholds,
}

/// Flood severity of a stage reading relative to a site's thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloodSeverity {
    Normal,
    Action,
    Minor,
    Moderate,
    Major,
}

impl FloodSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloodSeverity::Normal => "normal",
            FloodSeverity::Action => "action",
            FloodSeverity::Minor => "minor",
            FloodSeverity::Moderate => "moderate",
            FloodSeverity::Major => "major",
        }
    }
}

impl fmt::Display for FloodSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// At-risk gauge records (RiskSnapshotFetcher output)
// ---------------------------------------------------------------------------

/// At-risk status reported by the river gauges feature service.
///
/// The query filters server-side to exactly this set, so anything else in
/// a response is a response-shape error and fails typed decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeStatus {
    Minor,
    Moderate,
    Major,
}

impl GaugeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GaugeStatus::Minor => "minor",
            GaugeStatus::Moderate => "moderate",
            GaugeStatus::Major => "major",
        }
    }
}

impl fmt::Display for GaugeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One at-risk gauge from the feature service, after reprojection to
/// geographic coordinates. Printed, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSite {
    pub id: u64,
    pub status: GaugeStatus,
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for RiskSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} at ({:.4}, {:.4})",
            self.id, self.status, self.latitude, self.longitude
        )
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the threshold converter. Every variant is fatal — the run
/// aborts without writing output.
#[derive(Debug)]
pub enum ConvertError {
    /// Missing or unreadable input file, or a failed write/rename.
    Io(std::io::Error),
    /// Missing column or unparseable value; carries the row position.
    Csv(csv::Error),
    /// JSON serialization failure.
    Json(serde_json::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(e) => write!(f, "I/O error: {}", e),
            ConvertError::Csv(e) => write!(f, "CSV error: {}", e),
            ConvertError::Json(e) => write!(f, "JSON serialization error: {}", e),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io(e) => Some(e),
            ConvertError::Csv(e) => Some(e),
            ConvertError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(e: std::io::Error) -> Self {
        ConvertError::Io(e)
    }
}

impl From<csv::Error> for ConvertError {
    fn from(e: csv::Error) -> Self {
        ConvertError::Csv(e)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(e: serde_json::Error) -> Self {
        ConvertError::Json(e)
    }
}

/// Errors from the river gauges query parser.
#[derive(Debug)]
pub enum QueryError {
    /// Malformed or unexpected JSON structure, including missing keys and
    /// statuses outside the closed set.
    ParseError(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::ParseError(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

impl std::error::Error for QueryError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
