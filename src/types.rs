//! Core data types for coord-query

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Coordinate reference systems used by Chinese web maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// World Geodetic System 1984, plain GPS coordinates
    Wgs84,
    /// GCJ-02, the offset national standard
    Gcj02,
    /// BD-09, a further offset layered on GCJ-02
    Bd09,
}

impl CoordinateSystem {
    /// All supported systems
    pub const ALL: [CoordinateSystem; 3] = [
        CoordinateSystem::Wgs84,
        CoordinateSystem::Gcj02,
        CoordinateSystem::Bd09,
    ];

    /// Returns the lowercase identifier of this system
    pub fn name(&self) -> &'static str {
        match self {
            CoordinateSystem::Wgs84 => "wgs84",
            CoordinateSystem::Gcj02 => "gcj02",
            CoordinateSystem::Bd09 => "bd09",
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoordinateSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs84" | "wgs-84" => Ok(CoordinateSystem::Wgs84),
            "gcj02" | "gcj-02" => Ok(CoordinateSystem::Gcj02),
            "bd09" | "bd-09" => Ok(CoordinateSystem::Bd09),
            _ => Err(Error::UnknownSystem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_name() {
        assert_eq!(CoordinateSystem::Wgs84.name(), "wgs84");
        assert_eq!(CoordinateSystem::Gcj02.name(), "gcj02");
        assert_eq!(CoordinateSystem::Bd09.to_string(), "bd09");
    }

    #[test]
    fn test_system_parse() {
        assert_eq!("WGS84".parse::<CoordinateSystem>().unwrap(), CoordinateSystem::Wgs84);
        assert_eq!("gcj-02".parse::<CoordinateSystem>().unwrap(), CoordinateSystem::Gcj02);
        assert_eq!(" bd09 ".parse::<CoordinateSystem>().unwrap(), CoordinateSystem::Bd09);
        assert!(matches!(
            "nonexistent".parse::<CoordinateSystem>(),
            Err(Error::UnknownSystem(_))
        ));
    }

    #[test]
    fn test_system_serde() {
        let json = serde_json::to_string(&CoordinateSystem::Gcj02).unwrap();
        assert_eq!(json, "\"gcj02\"");
        let parsed: CoordinateSystem = serde_json::from_str("\"bd09\"").unwrap();
        assert_eq!(parsed, CoordinateSystem::Bd09);
    }
}
