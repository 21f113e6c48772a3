//! Spherical-earth geometry between two geographic points
//!
//! All functions take positions in degrees and assume a spherical earth with
//! [`EARTH_RADIUS`], the same convention slippy-map engines use for their
//! distance readouts, so distances computed here agree with what the map shows.

use crate::types::LatLng;

/// Mean earth radius in meters
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters (haversine formula)
pub fn distance(a: LatLng, b: LatLng) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS * h.sqrt().min(1.0).asin()
}

/// Initial bearing from `a` towards `b` in degrees, within `[0, 360)`
///
/// 0° is true north and 90° is east. The bearing between identical points is
/// undefined; this returns 0 for that case.
pub fn initial_bearing(a: LatLng, b: LatLng) -> f64 {
    if a == b {
        return 0.0;
    }

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let x = delta_lng.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    // `rem_euclid` can return exactly 360.0 for tiny negative inputs
    (x.atan2(y).to_degrees() + 360.0) % 360.0
}

/// Midpoint of `a` and `b` as the arithmetic mean of their coordinates
///
/// This is not the great-circle midpoint. For outdoor links of up to ~50 km the
/// difference is far below a pixel at any useful zoom, but it grows with the
/// span and is wrong for links crossing the antimeridian.
pub fn midpoint(a: LatLng, b: LatLng) -> LatLng {
    LatLng::new((a.lat + b.lat) / 2.0, (a.lng + b.lng) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_gt, assert_lt};

    const PARIS: LatLng = LatLng {
        lat: 48.8566,
        lng: 2.3522,
    };
    const LONDON: LatLng = LatLng {
        lat: 51.5074,
        lng: -0.1278,
    };

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    #[test]
    fn test_distance_one_degree_of_latitude() {
        let d = distance(LatLng::new(0.0, 0.0), LatLng::new(1.0, 0.0));
        assert_close(d, EARTH_RADIUS * std::f64::consts::PI / 180.0, 1e-6);
    }

    #[test]
    fn test_distance_paris_london() {
        let d = distance(PARIS, LONDON);
        assert_gt!(d, 343_000.0);
        assert_lt!(d, 344_500.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        assert_close(distance(PARIS, LONDON), distance(LONDON, PARIS), 1e-6);

        let a = LatLng::new(-33.8688, 151.2093);
        let b = LatLng::new(-33.9, 151.3);
        assert_close(distance(a, b), distance(b, a), 1e-9);
    }

    #[test]
    fn test_distance_identical_points() {
        assert_eq!(distance(PARIS, PARIS), 0.0);
    }

    #[test]
    fn test_distance_antipodal() {
        let d = distance(LatLng::new(0.0, 0.0), LatLng::new(0.0, 180.0));
        assert_close(d, EARTH_RADIUS * std::f64::consts::PI, 1e-3);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = LatLng::new(0.0, 0.0);
        assert_close(initial_bearing(origin, LatLng::new(1.0, 0.0)), 0.0, 1e-9);
        assert_close(initial_bearing(origin, LatLng::new(0.0, 1.0)), 90.0, 1e-9);
        assert_close(initial_bearing(origin, LatLng::new(-1.0, 0.0)), 180.0, 1e-9);
        assert_close(initial_bearing(origin, LatLng::new(0.0, -1.0)), 270.0, 1e-9);
    }

    #[test]
    fn test_bearing_identical_points() {
        assert_eq!(initial_bearing(PARIS, PARIS), 0.0);
        assert_eq!(initial_bearing(LatLng::new(0.0, 0.0), LatLng::new(0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_bearing_range() {
        for (a, b) in [(PARIS, LONDON), (LONDON, PARIS)] {
            let bearing = initial_bearing(a, b);
            assert!((0.0..360.0).contains(&bearing), "{bearing} out of range");
        }
    }

    #[test]
    fn test_bearing_paris_london() {
        // London lies north-west of Paris
        let bearing = initial_bearing(PARIS, LONDON);
        assert_gt!(bearing, 320.0);
        assert_lt!(bearing, 335.0);
    }

    #[test]
    fn test_midpoint_is_arithmetic_mean() {
        let mid = midpoint(LatLng::new(10.0, 20.0), LatLng::new(12.0, 24.0));
        assert_eq!(mid, LatLng::new(11.0, 22.0));
    }
}
