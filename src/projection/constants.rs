//! Constants of the GCJ-02 and BD-09 offset transforms

use std::f64::consts::PI;

/// Semi-major axis of the Krasovsky 1940 ellipsoid, in meters
pub const A: f64 = 6378245.0;

/// First eccentricity squared of the same ellipsoid
pub const EE: f64 = 0.00669342162296594323;

/// Angular scale used by the GCJ-02 / BD-09 pair
pub const X_PI: f64 = PI * 3000.0 / 180.0;

/// Anchor of the GCJ-02 correction series
pub const ANCHOR_LNG: f64 = 105.0;
pub const ANCHOR_LAT: f64 = 35.0;

/// Open bounding envelope of mainland China
pub const CHINA_MIN_LNG: f64 = 73.66;
pub const CHINA_MAX_LNG: f64 = 135.05;
pub const CHINA_MIN_LAT: f64 = 3.86;
pub const CHINA_MAX_LAT: f64 = 53.55;

/// Constant shift applied by BD-09 on top of GCJ-02
pub const BD_LNG_SHIFT: f64 = 0.0065;
pub const BD_LAT_SHIFT: f64 = 0.006;
