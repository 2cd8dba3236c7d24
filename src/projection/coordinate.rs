use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A longitude/latitude pair in decimal degrees.
///
/// The reference system is implied by the function it is passed to. On the
/// wire a coordinate is a two-element array `[lng, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Creates a coordinate from longitude and latitude in degrees
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Creates a coordinate from latitude first, as map widgets report it
    pub fn from_latlng(lat: f64, lng: f64) -> Self {
        Self::new(lng, lat)
    }

    /// Returns the coordinate as a `(lng, lat)` tuple
    pub fn to_tuple(self) -> (f64, f64) {
        (self.lng, self.lat)
    }

    /// Checks that the coordinate is finite and inside the geodetic range.
    ///
    /// Conversions never call this; it is for input surfaces only.
    pub fn validate(&self) -> Result<()> {
        if !self.lng.is_finite() || !self.lat.is_finite() {
            return Err(Error::InvalidCoordinate(format!(
                "({}, {}) is not a finite pair",
                self.lng, self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::InvalidCoordinate(format!(
                "longitude {} must be between -180 and 180",
                self.lng
            )));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::InvalidCoordinate(format!(
                "latitude {} must be between -90 and 90",
                self.lat
            )));
        }
        Ok(())
    }

    /// Largest per-axis difference to another coordinate, in degrees
    pub fn max_abs_diff(&self, other: &Coordinate) -> f64 {
        (self.lng - other.lng).abs().max((self.lat - other.lat).abs())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self::new(lng, lat)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self::new(lng, lat)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lng, coord.lat]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ranges() {
        assert!(Coordinate::new(116.4074, 39.9042).validate().is_ok());
        assert!(Coordinate::new(180.0, -90.0).validate().is_ok());
        assert!(matches!(
            Coordinate::new(180.5, 0.0).validate(),
            Err(Error::InvalidCoordinate(_))
        ));
        assert!(Coordinate::new(0.0, 91.0).validate().is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn test_from_latlng_swaps_axes() {
        let coord = Coordinate::from_latlng(39.9042, 116.4074);
        assert_eq!(coord.lng, 116.4074);
        assert_eq!(coord.lat, 39.9042);
    }

    #[test]
    fn test_serde_as_pair() {
        let coord: Coordinate = serde_json::from_str("[121.4737, 31.2304]").unwrap();
        assert_eq!(coord, Coordinate::new(121.4737, 31.2304));
        assert_eq!(serde_json::to_string(&coord).unwrap(), "[121.4737,31.2304]");
    }
}
