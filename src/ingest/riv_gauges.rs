/// NWS river gauges feature service client.
///
/// Handles URL construction and JSON response parsing for the at-risk
/// gauge layer of the National Weather Service event-driven map service:
///   https://mapservices.weather.noaa.gov/eventdriven/rest/services/water/riv_gauges/MapServer/15
///
/// The layer is queried once, server-side filtered to gauges whose status
/// is in the at-risk set, ordered by object id, in a single page. Point
/// geometry comes back in Web Mercator (spatial reference 102100) and is
/// reprojected to latitude/longitude here. See `fixtures.rs` for annotated
/// examples of the response envelope.

use crate::model::{GaugeStatus, QueryError, RiskSite};
use crate::projection;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde structures for feature service JSON deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct QueryResponse {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    attributes: FeatureAttributes,
    geometry: FeatureGeometry,
}

#[derive(Deserialize)]
struct FeatureAttributes {
    objectid: u64,
    status: GaugeStatus,
}

#[derive(Deserialize)]
struct FeatureGeometry {
    x: f64,
    y: f64,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

const QUERY_BASE_URL: &str =
    "https://mapservices.weather.noaa.gov/eventdriven/rest/services/water/riv_gauges/MapServer/15/query";

/// Statuses requested from the service, in filter order. Everything else
/// (no_flooding, obs_not_current, …) stays server-side.
pub const AT_RISK_STATUSES: [GaugeStatus; 3] =
    [GaugeStatus::Minor, GaugeStatus::Moderate, GaugeStatus::Major];

/// Builds the fully-parameterized query URL for the at-risk gauge layer.
///
/// Requests JSON output in Web Mercator (out SR 102100), fields
/// `objectid,status`, ordered `objectid ASC`, one page of up to
/// `max_records` starting at offset 0.
pub fn build_query_url(max_records: u32) -> String {
    let where_clause = AT_RISK_STATUSES
        .iter()
        .map(|status| format!("status = '{}'", status))
        .collect::<Vec<_>>()
        .join(" OR ");

    format!(
        "{}?f=json&cacheHint=true&maxRecordCountFactor=4&resultOffset=0&resultRecordCount={}&where={}&orderByFields={}&outFields={}&outSR=102100&spatialRel=esriSpatialRelIntersects",
        QUERY_BASE_URL,
        max_records,
        urlencoding::encode(&where_clause),
        urlencoding::encode("objectid ASC"),
        urlencoding::encode("objectid,status"),
    )
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a feature service query response into `RiskSite`s, one per
/// feature, preserving response order, with geometry reprojected from
/// Web Mercator to latitude/longitude.
///
/// An empty `features` array is not an error — no gauges are currently
/// at risk — and yields an empty Vec.
///
/// # Errors
/// - `QueryError::ParseError` — malformed JSON, a missing expected key
///   (including the ArcGIS "HTTP 200 with error object" shape, which has
///   no `features` key), or a status outside the at-risk set.
pub fn parse_query_response(json: &str) -> Result<Vec<RiskSite>, QueryError> {
    let response: QueryResponse = serde_json::from_str(json)
        .map_err(|e| QueryError::ParseError(format!("JSON deserialization failed: {}", e)))?;

    let sites = response
        .features
        .into_iter()
        .map(|feature| {
            let (lon, lat) = projection::mercator_to_geo(feature.geometry.x, feature.geometry.y);
            RiskSite {
                id: feature.attributes.objectid,
                status: feature.attributes.status,
                latitude: lat,
                longitude: lon,
            }
        })
        .collect();

    Ok(sites)
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Fetches the current at-risk gauge set in one blocking request.
///
/// No retry and no explicit timeout: the call blocks until the transport
/// responds or errors, and any non-2xx status fails the run.
pub fn fetch_at_risk_sites(
    client: &reqwest::blocking::Client,
    max_records: u32,
) -> Result<Vec<RiskSite>, Box<dyn std::error::Error>> {
    let url = build_query_url(max_records);

    println!("   Fetching: {}", url);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()?;

    if !response.status().is_success() {
        return Err(format!("riv_gauges API error: {}", response.status()).into());
    }

    let body = response.text()?;
    Ok(parse_query_response(&body)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::fixtures::*;

    // --- URL construction ---------------------------------------------------

    #[test]
    fn test_build_url_matches_dashboard_query() {
        // The dashboard's API route issues exactly this URL; the converter
        // side of the pipeline depends on matching its result set.
        let expected = "https://mapservices.weather.noaa.gov/eventdriven/rest/services/water/riv_gauges/MapServer/15/query?f=json&cacheHint=true&maxRecordCountFactor=4&resultOffset=0&resultRecordCount=8000&where=status%20%3D%20%27minor%27%20OR%20status%20%3D%20%27moderate%27%20OR%20status%20%3D%20%27major%27&orderByFields=objectid%20ASC&outFields=objectid%2Cstatus&outSR=102100&spatialRel=esriSpatialRelIntersects";
        assert_eq!(build_query_url(8000), expected);
    }

    #[test]
    fn test_build_url_requests_json_in_web_mercator() {
        let url = build_query_url(8000);
        assert!(url.contains("f=json"), "must request JSON output");
        assert!(url.contains("outSR=102100"), "must request Web Mercator geometry");
        assert!(url.contains("outFields=objectid%2Cstatus"), "must limit out fields");
    }

    #[test]
    fn test_build_url_filters_to_at_risk_statuses() {
        let url = build_query_url(8000);
        for status in &AT_RISK_STATUSES {
            assert!(
                url.contains(&format!("%27{}%27", status)),
                "where clause must include '{}', got: {}",
                status,
                url
            );
        }
        assert!(!url.contains("no_flooding"), "must not request quiet gauges");
    }

    #[test]
    fn test_build_url_orders_and_windows_results() {
        let url = build_query_url(500);
        assert!(url.contains("orderByFields=objectid%20ASC"));
        assert!(url.contains("resultOffset=0"));
        assert!(url.contains("resultRecordCount=500"), "window size must be configurable");
    }

    // --- Parsing: happy path ------------------------------------------------

    #[test]
    fn test_parse_reprojects_potomac_gauge() {
        let sites = parse_query_response(fixture_at_risk_sites_json())
            .expect("valid fixture should parse without error");

        let potomac = sites.iter().find(|s| s.id == 1001).expect("objectid 1001");
        assert_eq!(potomac.status, GaugeStatus::Minor);
        assert!(
            (potomac.longitude - (-77.0305)).abs() < 0.001,
            "longitude should reproject to ~-77.03, got {}",
            potomac.longitude
        );
        assert!(
            (potomac.latitude - 38.8975).abs() < 0.001,
            "latitude should reproject to ~38.90, got {}",
            potomac.latitude
        );
    }

    #[test]
    fn test_parse_returns_one_site_per_feature_in_order() {
        let sites = parse_query_response(fixture_at_risk_sites_json()).expect("should parse");

        assert_eq!(sites.len(), 3);
        let ids: Vec<u64> = sites.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1001, 1002, 1003], "service order must be preserved");
    }

    #[test]
    fn test_parse_decodes_all_status_levels() {
        let sites = parse_query_response(fixture_at_risk_sites_json()).expect("should parse");

        assert_eq!(sites[0].status, GaugeStatus::Minor);
        assert_eq!(sites[1].status, GaugeStatus::Moderate);
        assert_eq!(sites[2].status, GaugeStatus::Major);
    }

    #[test]
    fn test_parse_coordinates_land_in_conus() {
        let sites = parse_query_response(fixture_at_risk_sites_json()).expect("should parse");

        for site in &sites {
            assert!(
                (-125.0..=-66.0).contains(&site.longitude),
                "#{} longitude out of CONUS bounds: {}",
                site.id,
                site.longitude
            );
            assert!(
                (24.0..=50.0).contains(&site.latitude),
                "#{} latitude out of CONUS bounds: {}",
                site.id,
                site.latitude
            );
        }
    }

    // --- Parsing: error and edge cases --------------------------------------

    #[test]
    fn test_parse_empty_feature_list_is_not_an_error() {
        // A quiet day nationwide: no gauge at minor stage or above.
        let sites = parse_query_response(fixture_empty_features_json())
            .expect("empty feature list should parse");
        assert!(sites.is_empty());
    }

    #[test]
    fn test_parse_service_error_object_returns_parse_error() {
        // ArcGIS reports request errors as HTTP 200 with an `error` body
        // and no `features` key.
        let result = parse_query_response(fixture_service_error_json());
        assert!(
            matches!(result, Err(QueryError::ParseError(_))),
            "error object should fail parsing, got {:?}",
            result
        );
    }

    #[test]
    fn test_parse_missing_geometry_returns_parse_error() {
        let result = parse_query_response(fixture_missing_geometry_json());
        assert!(matches!(result, Err(QueryError::ParseError(_))));
    }

    #[test]
    fn test_parse_out_of_set_status_returns_parse_error() {
        let result = parse_query_response(fixture_unexpected_status_json());
        assert!(
            matches!(result, Err(QueryError::ParseError(_))),
            "statuses outside the filter set mean the response shape changed"
        );
    }

    #[test]
    fn test_parse_malformed_json_returns_parse_error() {
        let result = parse_query_response("{ this is not valid json }}}");
        assert!(matches!(result, Err(QueryError::ParseError(_))));
    }

    #[test]
    fn test_parse_empty_string_returns_parse_error() {
        let result = parse_query_response("");
        assert!(matches!(result, Err(QueryError::ParseError(_))));
    }
}
