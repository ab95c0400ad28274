/// Test fixtures: representative JSON payloads from the river gauges
/// feature service.
///
/// These fixtures are structurally complete but truncated to the minimum
/// needed to exercise the parser. They reflect the real envelope returned
/// by the MapServer query endpoint with `f=json&outSR=102100`:
///
///   response.features[]
///     .attributes.objectid — feature identifier (number)
///     .attributes.status   — "minor" | "moderate" | "major"
///     .geometry.x, .geometry.y — Web Mercator meters (EPSG:3857)
///
/// Geometry values below are real reprojections: the Potomac gauge point
/// maps back to lon ≈ -77.03, lat ≈ 38.90.

/// Three at-risk gauges, one per status level, ordered by objectid as the
/// service returns them.
#[cfg(test)]
pub(crate) fn fixture_at_risk_sites_json() -> &'static str {
    r#"{
      "objectIdFieldName": "objectid",
      "globalIdFieldName": "",
      "geometryType": "esriGeometryPoint",
      "spatialReference": { "wkid": 102100, "latestWkid": 3857 },
      "fields": [
        { "name": "objectid", "type": "esriFieldTypeOID", "alias": "objectid" },
        { "name": "status", "type": "esriFieldTypeString", "alias": "status", "length": 30 }
      ],
      "features": [
        {
          "attributes": { "objectid": 1001, "status": "minor" },
          "geometry": { "x": -8575000.0, "y": 4707000.0 }
        },
        {
          "attributes": { "objectid": 1002, "status": "moderate" },
          "geometry": { "x": -10018264.4, "y": 4947861.9 }
        },
        {
          "attributes": { "objectid": 1003, "status": "major" },
          "geometry": { "x": -10116481.6, "y": 3809684.4 }
        }
      ]
    }"#
}

/// No gauges at minor stage or above anywhere — a valid, empty result.
#[cfg(test)]
pub(crate) fn fixture_empty_features_json() -> &'static str {
    r#"{
      "objectIdFieldName": "objectid",
      "geometryType": "esriGeometryPoint",
      "spatialReference": { "wkid": 102100, "latestWkid": 3857 },
      "fields": [],
      "features": []
    }"#
}

/// ArcGIS reports request-level failures as HTTP 200 with an `error`
/// object and no `features` key.
#[cfg(test)]
pub(crate) fn fixture_service_error_json() -> &'static str {
    r#"{
      "error": {
        "code": 400,
        "message": "Unable to complete operation.",
        "details": ["Unable to perform query operation."]
      }
    }"#
}

/// A feature with attributes but no geometry — seen when a layer is
/// queried with returnGeometry=false, which this pipeline never requests.
#[cfg(test)]
pub(crate) fn fixture_missing_geometry_json() -> &'static str {
    r#"{
      "features": [
        { "attributes": { "objectid": 1001, "status": "minor" } }
      ]
    }"#
}

/// A status outside the filtered set; the where clause should make this
/// impossible, so treat it as a shape change.
#[cfg(test)]
pub(crate) fn fixture_unexpected_status_json() -> &'static str {
    r#"{
      "features": [
        {
          "attributes": { "objectid": 1001, "status": "obs_not_current" },
          "geometry": { "x": -8575000.0, "y": 4707000.0 }
        }
      ]
    }"#
}
