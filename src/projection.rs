/// Web Mercator (EPSG:3857) ↔ WGS84 geographic (EPSG:4326) transforms.
///
/// The river gauges feature service returns point geometry in spherical
/// Web Mercator (spatial reference 102100/3857); the dashboard wants
/// latitude/longitude. The transform is closed-form on the sphere of
/// radius `EARTH_RADIUS_M`, so no geodesy dependency is involved.
///
/// Both directions preserve (lon, lat) / (x, y) ordering; callers split
/// the pair into named latitude/longitude fields themselves.

use std::f64::consts::PI;

/// WGS84 equatorial radius in meters, the sphere radius used by EPSG:3857.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Converts a projected Web Mercator point to geographic (lon, lat) in
/// degrees.
pub fn mercator_to_geo(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS_M).exp().atan() - PI / 2.0).to_degrees();
    (lon, lat)
}

/// Converts geographic (lon, lat) in degrees to a projected Web Mercator
/// point in meters.
pub fn geo_to_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let x = lon.to_radians() * EARTH_RADIUS_M;
    let y = (PI / 4.0 + lat.to_radians() / 2.0).tan().ln() * EARTH_RADIUS_M;
    (x, y)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    #[test]
    fn test_origin_maps_to_null_island() {
        let (lon, lat) = mercator_to_geo(0.0, 0.0);
        assert!(lon.abs() < TOL, "lon at origin: {}", lon);
        assert!(lat.abs() < TOL, "lat at origin: {}", lat);
    }

    #[test]
    fn test_potomac_reference_point() {
        // Known point from the gauge service near Washington DC.
        let (lon, lat) = mercator_to_geo(-8_575_000.0, 4_707_000.0);
        assert!(
            (lon - (-77.030536)).abs() < 0.001,
            "lon for reference point: {}",
            lon
        );
        assert!(
            (lat - 38.897500).abs() < 0.001,
            "lat for reference point: {}",
            lat
        );
        // Must land inside continental-US bounds.
        assert!((-125.0..=-66.0).contains(&lon));
        assert!((24.0..=50.0).contains(&lat));
    }

    #[test]
    fn test_roundtrip_within_tolerance() {
        let test_points = [
            (0.0, 0.0),           // equator / prime meridian
            (-77.0312, 38.8583),  // Washington DC
            (-89.9956, 40.5614),  // Illinois River
            (151.2093, -33.8688), // Sydney (southern hemisphere)
            (-179.9, 80.0),       // near the antimeridian, high latitude
        ];

        for (lon, lat) in test_points {
            let (x, y) = geo_to_mercator(lon, lat);
            let (lon2, lat2) = mercator_to_geo(x, y);
            assert!(
                (lon - lon2).abs() < TOL,
                "lon roundtrip failed: {} -> {} -> {}",
                lon,
                x,
                lon2
            );
            assert!(
                (lat - lat2).abs() < TOL,
                "lat roundtrip failed: {} -> {} -> {}",
                lat,
                y,
                lat2
            );
        }
    }

    #[test]
    fn test_forward_transform_known_values() {
        // One degree of longitude at the equator spans R * pi / 180 meters.
        let (x, _) = geo_to_mercator(1.0, 0.0);
        assert!(
            (x - EARTH_RADIUS_M * PI / 180.0).abs() < 1e-6,
            "x for 1 degree lon: {}",
            x
        );

        // y grows toward the poles faster than linear.
        let (_, y45) = geo_to_mercator(0.0, 45.0);
        let (_, y60) = geo_to_mercator(0.0, 60.0);
        assert!(y45 > 4_000_000.0 && y45 < 6_000_000.0, "y at 45N: {}", y45);
        assert!(y60 / y45 > 60.0 / 45.0, "mercator y must outpace latitude");
    }

    #[test]
    fn test_hemispheres_keep_signs() {
        let (lon_w, lat_n) = mercator_to_geo(-8_575_000.0, 4_707_000.0);
        assert!(lon_w < 0.0 && lat_n > 0.0);

        let (lon_e, lat_s) = mercator_to_geo(8_575_000.0, -4_707_000.0);
        assert!(lon_e > 0.0 && lat_s < 0.0);
        assert!((lon_e + lon_w).abs() < TOL, "transform must be antisymmetric");
        assert!((lat_s + lat_n).abs() < TOL);
    }
}
