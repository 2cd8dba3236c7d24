//! Primitive conversions between WGS84, GCJ-02 and BD-09.
//!
//! Every function takes `(lng, lat)` in the source system and returns the
//! pair in the target system. None of them validate their input.

use super::constants::{BD_LAT_SHIFT, BD_LNG_SHIFT, X_PI};
use super::offset::{gcj02_shift, out_of_china};

/// GCJ-02 to BD-09.
///
/// Applied unconditionally, with no region check, unlike the WGS84 / GCJ-02 pair.
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let z = (lng * lng + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lng) + 0.000003 * (lng * X_PI).cos();
    (z * theta.cos() + BD_LNG_SHIFT, z * theta.sin() + BD_LAT_SHIFT)
}

/// BD-09 to GCJ-02. Approximate inverse of [`gcj02_to_bd09`].
pub fn bd09_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    let x = lng - BD_LNG_SHIFT;
    let y = lat - BD_LAT_SHIFT;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    (z * theta.cos(), z * theta.sin())
}

/// WGS84 to GCJ-02. Identity outside mainland China.
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    gcj02_shift(lng, lat)
}

/// GCJ-02 to WGS84. Identity outside mainland China.
///
/// The shift is evaluated at the GCJ-02 point itself and reflected through it.
/// This is the reference approximation and must not be replaced by an
/// iterative inverse: displayed values are expected to match it to six decimals.
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    let (mglng, mglat) = gcj02_shift(lng, lat);
    (lng * 2.0 - mglng, lat * 2.0 - mglat)
}

/// BD-09 to WGS84, via GCJ-02
pub fn bd09_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    let (gcj_lng, gcj_lat) = bd09_to_gcj02(lng, lat);
    gcj02_to_wgs84(gcj_lng, gcj_lat)
}

/// WGS84 to BD-09, via GCJ-02
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let (gcj_lng, gcj_lat) = wgs84_to_gcj02(lng, lat);
    gcj02_to_bd09(gcj_lng, gcj_lat)
}
