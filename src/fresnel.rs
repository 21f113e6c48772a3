//! First Fresnel Zone physics
//!
//! The clearance overlay is a first-order visualization: the zone radius is
//! computed once, at the link midpoint where it peaks, and the lens-shaped zone
//! is then drawn as an ellipse using that radius as its semi-minor axis. Both
//! steps are deliberate simplifications; this is not a link-budget engine.

/// Propagation speed used for wavelength calculations in m/s
///
/// Rounded from 299 792 458 m/s. The ~0.07% error is invisible on a map overlay.
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Wavelength in meters for a frequency in Hz
pub fn wavelength(frequency_hz: f64) -> f64 {
    SPEED_OF_LIGHT / frequency_hz
}

/// Radius of the first Fresnel zone at the midpoint of a link, in meters
///
/// With `d1 = d2 = d / 2` the general `sqrt(λ·d1·d2 / d)` reduces to
/// `sqrt(λ·d / 4)`, the largest radius anywhere along the path.
///
/// Returns 0 if either input is zero, negative or NaN.
pub fn max_fresnel_radius(frequency_hz: f64, distance_m: f64) -> f64 {
    if frequency_hz.is_nan() || distance_m.is_nan() || frequency_hz <= 0.0 || distance_m <= 0.0 {
        return 0.0;
    }

    (wavelength(frequency_hz) * distance_m / 4.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_gt, assert_lt};

    #[test]
    fn test_wavelength_5_8_ghz() {
        let lambda = wavelength(5.8e9);
        assert!((lambda - 0.051_724).abs() < 1e-6, "got {lambda}");
    }

    #[test]
    fn test_max_radius_5_8_ghz_1_km() {
        let radius = max_fresnel_radius(5.8e9, 1000.0);
        assert!((radius - 3.596).abs() < 1e-3, "got {radius}");
    }

    #[test]
    fn test_max_radius_zero_inputs() {
        assert_eq!(max_fresnel_radius(5.8e9, 0.0), 0.0);
        assert_eq!(max_fresnel_radius(0.0, 1000.0), 0.0);
        assert_eq!(max_fresnel_radius(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_max_radius_negative_and_nan_inputs() {
        assert_eq!(max_fresnel_radius(-5.8e9, 1000.0), 0.0);
        assert_eq!(max_fresnel_radius(5.8e9, -1000.0), 0.0);
        assert_eq!(max_fresnel_radius(f64::NAN, 1000.0), 0.0);
        assert_eq!(max_fresnel_radius(5.8e9, f64::NAN), 0.0);
    }

    #[test]
    fn test_max_radius_positive() {
        for frequency_hz in [900e6, 2.4e9, 5.8e9, 24e9, 60e9] {
            for distance_m in [1.0, 100.0, 1000.0, 25_000.0] {
                assert_gt!(max_fresnel_radius(frequency_hz, distance_m), 0.0);
            }
        }
    }

    #[test]
    fn test_max_radius_increases_with_distance() {
        let distances = [10.0, 100.0, 500.0, 1000.0, 5000.0, 50_000.0];
        for pair in distances.windows(2) {
            assert_lt!(
                max_fresnel_radius(5.8e9, pair[0]),
                max_fresnel_radius(5.8e9, pair[1])
            );
        }
    }

    #[test]
    fn test_max_radius_decreases_with_frequency() {
        let frequencies = [900e6, 2.4e9, 5.0e9, 5.8e9, 24e9, 60e9];
        for pair in frequencies.windows(2) {
            assert_gt!(
                max_fresnel_radius(pair[0], 1000.0),
                max_fresnel_radius(pair[1], 1000.0)
            );
        }
    }
}
