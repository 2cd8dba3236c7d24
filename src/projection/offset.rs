//! GCJ-02 obfuscation series.
//!
//! The correction curves are empirically fitted and carry no physical meaning.
//! Coefficients and operation order must stay exactly as written; any change
//! moves the output by meters.

use std::f64::consts::PI;

use super::constants::{
    A, ANCHOR_LAT, ANCHOR_LNG, CHINA_MAX_LAT, CHINA_MAX_LNG, CHINA_MIN_LAT, CHINA_MIN_LNG, EE,
};

/// Returns true unless the point lies strictly inside the mainland China envelope.
///
/// The bounds are open: a point exactly on the edge is out of China.
pub fn out_of_china(lng: f64, lat: f64) -> bool {
    !(lng > CHINA_MIN_LNG && lng < CHINA_MAX_LNG && lat > CHINA_MIN_LAT && lat < CHINA_MAX_LAT)
}

/// Raw latitude correction for a point offset from the series anchor
pub fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Raw longitude correction for a point offset from the series anchor
pub fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Applies the GCJ-02 shift to a point, without the region check.
///
/// Returns the shifted `(lng, lat)`. The raw corrections are scaled from
/// meters to degrees on the Krasovsky ellipsoid at the point's latitude.
pub fn gcj02_shift(lng: f64, lat: f64) -> (f64, f64) {
    let mut dlat = transform_lat(lng - ANCHOR_LNG, lat - ANCHOR_LAT);
    let mut dlng = transform_lng(lng - ANCHOR_LNG, lat - ANCHOR_LAT);

    let radlat = lat / 180.0 * PI;
    let mut magic = radlat.sin();
    magic = 1.0 - EE * magic * magic;
    let sqrtmagic = magic.sqrt();

    dlat = (dlat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrtmagic) * PI);
    dlng = (dlng * 180.0) / (A / sqrtmagic * radlat.cos() * PI);

    (lng + dlng, lat + dlat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_out_of_china_boundaries_are_open() {
        assert!(out_of_china(73.66, 30.0));
        assert!(!out_of_china(73.661, 30.0));
        assert!(out_of_china(135.05, 30.0));
        assert!(out_of_china(100.0, 3.86));
        assert!(out_of_china(100.0, 53.55));
        assert!(!out_of_china(100.0, 53.549));
    }

    #[test]
    fn test_out_of_china_far_points() {
        assert!(out_of_china(2.3522, 48.8566)); // Paris
        assert!(out_of_china(-74.006, 40.7128)); // New York
        assert!(!out_of_china(116.4074, 39.9042)); // Beijing
    }

    #[test]
    fn test_series_at_anchor() {
        // every trigonometric term vanishes at the anchor
        assert_abs_diff_eq!(transform_lat(0.0, 0.0), -100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(transform_lng(0.0, 0.0), 300.0, epsilon = 1e-12);
    }

    #[test]
    fn test_series_polynomial_terms() {
        // at integer offsets every sin(k * x * PI) term is zero up to rounding
        // x = 1, y = 0: lat has 2x + 0.2 sqrt|x|, lng has x + 0.1 x^2 + 0.1 sqrt|x|
        // plus the sin(x/3), sin(x/12), sin(x/30) harmonics on the lng side
        let expected_lat = -100.0 + 2.0 + 0.2;
        assert_abs_diff_eq!(transform_lat(1.0, 0.0), expected_lat, epsilon = 1e-9);

        let expected_lng = 300.0 + 1.0 + 0.1 + 0.1
            + (40.0 * (PI / 3.0).sin()) * 2.0 / 3.0
            + (150.0 * (PI / 12.0).sin() + 300.0 * (PI / 30.0).sin()) * 2.0 / 3.0;
        assert_abs_diff_eq!(transform_lng(1.0, 0.0), expected_lng, epsilon = 1e-9);
    }

    #[test]
    fn test_shift_is_hundreds_of_meters() {
        let (lng, lat) = gcj02_shift(116.4074, 39.9042);
        assert!((lng - 116.4074).abs() < 0.01);
        assert!((lat - 39.9042).abs() < 0.01);
        assert!((lng - 116.4074).abs() > 0.001);
    }
}
