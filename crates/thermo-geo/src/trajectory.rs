//! Great-circle distance and waypoint interpolation on a spherical Earth.

use thermo_core::types::GeoCoord;

use crate::GeoError;

/// Below this angular distance (radians) two points are considered coincident.
const COINCIDENT_EPSILON: f64 = 1e-12;

/// Below this `sin(distance)` distinct points are considered antipodal.
const ANTIPODAL_EPSILON: f64 = 1e-9;

/// Haversine angular distance (radians) between two points given in radians.
pub fn haversine_rad(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Haversine angular distance (radians) between two coordinates in degrees.
pub fn haversine(p1: GeoCoord, p2: GeoCoord) -> f64 {
    haversine_rad(p1.lon_rad(), p1.lat_rad(), p2.lon_rad(), p2.lat_rad())
}

/// Generate `n` evenly spaced points strictly between `a` and `b` along
/// the great circle joining them (spherical linear interpolation at
/// fractions `i / (n + 1)`, `i = 1..=n`). Endpoints are excluded.
///
/// `n == 0` always yields an empty sequence. Otherwise coincident or
/// antipodal endpoints are rejected: the interpolation divides by
/// `sin(distance)`.
pub fn equidistant_points(a: GeoCoord, b: GeoCoord, n: usize) -> Result<Vec<GeoCoord>, GeoError> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let (lon1, lat1) = (a.lon_rad(), a.lat_rad());
    let (lon2, lat2) = (b.lon_rad(), b.lat_rad());
    let distance = haversine_rad(lon1, lat1, lon2, lat2);
    if distance < COINCIDENT_EPSILON {
        return Err(GeoError::CoincidentEndpoints {
            lon: a.lon,
            lat: a.lat,
        });
    }
    let sin_distance = distance.sin();
    if sin_distance.abs() < ANTIPODAL_EPSILON {
        return Err(GeoError::AntipodalEndpoints { distance });
    }

    let points = (1..=n)
        .map(|i| {
            let f = i as f64 / (n + 1) as f64;
            let wa = ((1.0 - f) * distance).sin() / sin_distance;
            let wb = (f * distance).sin() / sin_distance;
            let x = wa * lat1.cos() * lon1.cos() + wb * lat2.cos() * lon2.cos();
            let y = wa * lat1.cos() * lon1.sin() + wb * lat2.cos() * lon2.sin();
            let z = wa * lat1.sin() + wb * lat2.sin();
            let lat = z.atan2((x * x + y * y).sqrt());
            let lon = y.atan2(x);
            GeoCoord::new(lon.to_degrees(), lat.to_degrees())
        })
        .collect();
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GeoCoord::new(3.755, 50.346);
        assert_eq!(haversine(p, p), 0.0);
    }

    #[test]
    fn test_quarter_circle_on_equator() {
        let d = haversine(GeoCoord::new(0.0, 0.0), GeoCoord::new(90.0, 0.0));
        assert!((d - std::f64::consts::FRAC_PI_2).abs() < 1e-12, "{d}");
    }

    #[test]
    fn test_pole_to_pole_is_pi() {
        let d = haversine(GeoCoord::new(0.0, 90.0), GeoCoord::new(0.0, -90.0));
        assert!((d - std::f64::consts::PI).abs() < 1e-9, "{d}");
    }

    #[test]
    fn test_equator_midpoint() {
        let points =
            equidistant_points(GeoCoord::new(0.0, 0.0), GeoCoord::new(90.0, 0.0), 1).unwrap();
        assert_eq!(points.len(), 1);
        assert!((points[0].lon - 45.0).abs() < 1e-9, "{:?}", points[0]);
        assert!(points[0].lat.abs() < 1e-9, "{:?}", points[0]);
    }

    #[test]
    fn test_meridian_points_are_evenly_spaced() {
        let points =
            equidistant_points(GeoCoord::new(10.0, 0.0), GeoCoord::new(10.0, 40.0), 3).unwrap();
        let lats: Vec<f64> = points.iter().map(|p| p.lat).collect();
        for (lat, expected) in lats.iter().zip([10.0, 20.0, 30.0]) {
            assert!((lat - expected).abs() < 1e-9, "{lats:?}");
        }
        assert!(points.iter().all(|p| (p.lon - 10.0).abs() < 1e-9));
    }

    #[test]
    fn test_zero_points_is_empty_even_when_degenerate() {
        let p = GeoCoord::new(1.0, 2.0);
        assert_eq!(equidistant_points(p, p, 0), Ok(Vec::new()));
    }

    #[test]
    fn test_coincident_endpoints_rejected() {
        let p = GeoCoord::new(1.0, 2.0);
        assert!(matches!(
            equidistant_points(p, p, 4),
            Err(GeoError::CoincidentEndpoints { .. })
        ));
    }

    #[test]
    fn test_antipodal_endpoints_rejected() {
        let a = GeoCoord::new(0.0, 0.0);
        let b = GeoCoord::new(180.0, 0.0);
        assert!(matches!(
            equidistant_points(a, b, 4),
            Err(GeoError::AntipodalEndpoints { .. })
        ));
    }
}
