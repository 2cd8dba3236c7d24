//! Tile providers and the coordinate systems they emit

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::projection::{Coordinate, Transformer};
use crate::types::CoordinateSystem;

/// Map tile providers the query tool can sit on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapProvider {
    /// Gaode (AMap) tiles, drawn in GCJ-02
    Gaode,
    /// OpenStreetMap tiles, drawn in WGS84
    Osm,
}

impl MapProvider {
    /// The system pointer positions on this provider's tiles are expressed in
    pub fn native_system(&self) -> CoordinateSystem {
        match self {
            MapProvider::Gaode => CoordinateSystem::Gcj02,
            MapProvider::Osm => CoordinateSystem::Wgs84,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MapProvider::Gaode => "gaode",
            MapProvider::Osm => "osm",
        }
    }

    /// Converts a native pointer position to WGS84 for display
    pub fn to_display(&self, native: Coordinate) -> Result<Coordinate> {
        let transformer = Transformer::new(self.native_system(), CoordinateSystem::Wgs84)?;
        Ok(transformer.transform(native))
    }

    /// Converts a user-entered WGS84 position to the provider's frame
    pub fn to_native(&self, wgs84: Coordinate) -> Result<Coordinate> {
        let transformer = Transformer::new(CoordinateSystem::Wgs84, self.native_system())?;
        Ok(transformer.transform(wgs84))
    }
}

impl fmt::Display for MapProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapProvider {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gaode" | "amap" => Ok(MapProvider::Gaode),
            "osm" | "openstreetmap" => Ok(MapProvider::Osm),
            _ => Err(Error::UnknownProvider(s.to_string())),
        }
    }
}
