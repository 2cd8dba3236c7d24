use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::projection::coordinate::Coordinate;
use crate::projection::datum;
use crate::types::CoordinateSystem;

/// A primitive or composed conversion over `(lng, lat)`
pub type ConvertFn = fn(f64, f64) -> (f64, f64);

/// Batches at least this long are converted on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 4096;

fn identity(lng: f64, lat: f64) -> (f64, f64) {
    (lng, lat)
}

/// Looks up the conversion for a directed pair of systems.
///
/// Returns `None` when `from == to`; the six distinct pairs always resolve.
pub fn route(from: CoordinateSystem, to: CoordinateSystem) -> Option<ConvertFn> {
    use CoordinateSystem::*;

    let convert: ConvertFn = match (from, to) {
        (Gcj02, Bd09) => datum::gcj02_to_bd09,
        (Bd09, Gcj02) => datum::bd09_to_gcj02,
        (Wgs84, Gcj02) => datum::wgs84_to_gcj02,
        (Gcj02, Wgs84) => datum::gcj02_to_wgs84,
        (Bd09, Wgs84) => datum::bd09_to_wgs84,
        (Wgs84, Bd09) => datum::wgs84_to_bd09,
        _ => return None,
    };
    Some(convert)
}

/// Converts coordinates from one system to another
#[derive(Clone, Copy)]
pub struct Transformer {
    convert: ConvertFn,
    from: CoordinateSystem,
    to: CoordinateSystem,
}

impl Transformer {
    /// Creates a transformer from source to target system
    pub fn new(from: CoordinateSystem, to: CoordinateSystem) -> Result<Self> {
        let convert: ConvertFn = if from == to {
            identity
        } else {
            route(from, to).ok_or_else(|| {
                warn!(%from, %to, "no conversion route");
                Error::UnsupportedConversion {
                    from: from.to_string(),
                    to: to.to_string(),
                }
            })?
        };

        debug!(%from, %to, "resolved conversion route");

        Ok(Self { convert, from, to })
    }

    /// Creates a transformer from system names such as `"wgs84"`
    pub fn from_names(from: &str, to: &str) -> Result<Self> {
        let unsupported = || Error::UnsupportedConversion {
            from: from.to_string(),
            to: to.to_string(),
        };
        let from_system = from.parse::<CoordinateSystem>().map_err(|_| unsupported())?;
        let to_system = to.parse::<CoordinateSystem>().map_err(|_| unsupported())?;
        Self::new(from_system, to_system)
    }

    /// Converts a raw `(lng, lat)` pair
    pub fn convert(&self, lng: f64, lat: f64) -> (f64, f64) {
        (self.convert)(lng, lat)
    }

    /// Converts a coordinate from source to target system
    pub fn transform(&self, coord: Coordinate) -> Coordinate {
        self.convert(coord.lng, coord.lat).into()
    }

    /// Converts multiple coordinates, preserving order.
    ///
    /// Large batches are split across the rayon thread pool.
    pub fn transform_many(&self, coords: &[Coordinate]) -> Vec<Coordinate> {
        if coords.len() >= PARALLEL_THRESHOLD {
            debug!(points = coords.len(), "converting batch in parallel");
            coords.par_iter().map(|&coord| self.transform(coord)).collect()
        } else {
            coords.iter().map(|&coord| self.transform(coord)).collect()
        }
    }

    /// Returns the transformer for the opposite direction
    pub fn inverse(&self) -> Result<Self> {
        Self::new(self.to, self.from)
    }

    /// Returns true when source and target are the same system
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    /// Returns the source system
    pub fn from_system(&self) -> CoordinateSystem {
        self.from
    }

    /// Returns the target system
    pub fn to_system(&self) -> CoordinateSystem {
        self.to
    }
}

impl std::fmt::Debug for Transformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transformer")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_distinct_pairs_resolve() {
        for &from in &CoordinateSystem::ALL {
            for &to in &CoordinateSystem::ALL {
                assert_eq!(route(from, to).is_some(), from != to);
                assert!(Transformer::new(from, to).is_ok());
            }
        }
    }

    #[test]
    fn test_transform_matches_primitive() {
        let transformer = Transformer::new(CoordinateSystem::Gcj02, CoordinateSystem::Wgs84).unwrap();
        let coord = transformer.transform(Coordinate::new(116.4074, 39.9042));
        let (lng, lat) = datum::gcj02_to_wgs84(116.4074, 39.9042);
        assert_eq!(coord, Coordinate::new(lng, lat));
    }

    #[test]
    fn test_identity_transformer() {
        let transformer = Transformer::new(CoordinateSystem::Bd09, CoordinateSystem::Bd09).unwrap();
        assert!(transformer.is_identity());
        let coord = Coordinate::new(116.4074, 39.9042);
        assert_eq!(transformer.transform(coord), coord);
    }

    #[test]
    fn test_from_names_unknown_system() {
        let err = Transformer::from_names("gcj02", "nonexistent").unwrap_err();
        match err {
            Error::UnsupportedConversion { from, to } => {
                assert_eq!(from, "gcj02");
                assert_eq!(to, "nonexistent");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        let forward = Transformer::new(CoordinateSystem::Wgs84, CoordinateSystem::Bd09).unwrap();
        let inverse = forward.inverse().unwrap();
        assert_eq!(inverse.from_system(), CoordinateSystem::Bd09);
        assert_eq!(inverse.to_system(), CoordinateSystem::Wgs84);

        let start = Coordinate::new(121.4737, 31.2304);
        let back = inverse.transform(forward.transform(start));
        assert!(back.max_abs_diff(&start) < 2e-5);
    }

    #[test]
    fn test_transform_many_parallel_preserves_order() {
        let transformer = Transformer::new(CoordinateSystem::Wgs84, CoordinateSystem::Gcj02).unwrap();
        let coords: Vec<Coordinate> = (0..PARALLEL_THRESHOLD + 10)
            .map(|i| Coordinate::new(100.0 + (i as f64) * 1e-3, 30.0))
            .collect();

        let converted = transformer.transform_many(&coords);
        assert_eq!(converted.len(), coords.len());
        for (input, output) in coords.iter().zip(&converted) {
            let (lng, lat) = datum::wgs84_to_gcj02(input.lng, input.lat);
            assert_eq!(output.to_tuple(), (lng, lat));
        }
    }
}
