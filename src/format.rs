//! Display formatting for coordinates

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::projection::Coordinate;

/// Which axis a value belongs to, for picking the hemisphere letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

/// Output notation for displayed coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateFormat {
    /// Decimal degrees with six fractional digits
    #[default]
    Decimal,
    /// Degrees, minutes and seconds with a hemisphere letter
    Dms,
}

impl FromStr for CoordinateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" => Ok(CoordinateFormat::Decimal),
            "dms" => Ok(CoordinateFormat::Dms),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Both axes of a coordinate rendered as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedCoordinate {
    pub lng: String,
    pub lat: String,
}

impl fmt::Display for FormattedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lng, self.lat)
    }
}

/// Formats a value in decimal degrees with six fractional digits
pub fn format_decimal(value: f64) -> String {
    format!("{:.6}", value)
}

/// Formats a value as `D°M'S.SS"H`.
///
/// Degrees and minutes are truncated, seconds keep two decimals. Zero and
/// positive values take `E` or `N`.
pub fn decimal_to_dms(value: f64, axis: Axis) -> String {
    let abs = value.abs();
    let degrees = abs.floor();
    let minutes = ((abs - degrees) * 60.0).floor();
    let seconds = ((abs - degrees) * 60.0 - minutes) * 60.0;

    let hemisphere = match (axis, value >= 0.0) {
        (Axis::Longitude, true) => 'E',
        (Axis::Longitude, false) => 'W',
        (Axis::Latitude, true) => 'N',
        (Axis::Latitude, false) => 'S',
    };

    format!("{}°{}'{:.2}\"{}", degrees, minutes, seconds, hemisphere)
}

/// Formats both axes of a coordinate
pub fn format_coordinate(coord: Coordinate, format: CoordinateFormat) -> FormattedCoordinate {
    match format {
        CoordinateFormat::Decimal => FormattedCoordinate {
            lng: format_decimal(coord.lng),
            lat: format_decimal(coord.lat),
        },
        CoordinateFormat::Dms => FormattedCoordinate {
            lng: decimal_to_dms(coord.lng, Axis::Longitude),
            lat: decimal_to_dms(coord.lat, Axis::Latitude),
        },
    }
}
