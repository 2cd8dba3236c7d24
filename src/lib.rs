//! coord-query - coordinate conversion for Chinese web maps
//!
//! Converts longitude/latitude pairs between WGS84 (GPS), GCJ-02 (the offset
//! national standard used by Gaode and other domestic providers) and BD-09
//! (a further offset used by Baidu). Every conversion is a pure function of
//! its inputs and safe to call from any thread.
//!
//! # Examples
//!
//! ## Single points
//!
//! ```
//! use coord_query::{wgs84_to_gcj02, gcj02_to_wgs84, out_of_china};
//!
//! let (lng, lat) = wgs84_to_gcj02(116.4074, 39.9042);
//! assert!((lng - 116.413642).abs() < 1e-6);
//!
//! // outside mainland China the offset does not apply
//! assert!(out_of_china(2.3522, 48.8566));
//! assert_eq!(gcj02_to_wgs84(2.3522, 48.8566), (2.3522, 48.8566));
//! ```
//!
//! ## Batches of points and polygon rings
//!
//! ```
//! use coord_query::{batch_convert, Coordinate, Shape};
//!
//! let shapes = vec![
//!     Shape::Point(Coordinate::new(116.4074, 39.9042)),
//!     Shape::Ring(vec![Coordinate::new(121.4737, 31.2304), Coordinate::new(121.48, 31.24)]),
//! ];
//! let converted = batch_convert(&shapes, "wgs84", "bd09")?;
//! assert_eq!(converted.len(), 2);
//! assert_eq!(converted[1].point_count(), 2);
//! # Ok::<(), coord_query::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod projection;
pub mod provider;
pub mod records;
pub mod types;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use format::{decimal_to_dms, format_coordinate, format_decimal, Axis, CoordinateFormat};
pub use projection::{
    batch_convert, bd09_to_gcj02, bd09_to_wgs84, convert_shapes, gcj02_to_bd09, gcj02_to_wgs84,
    out_of_china, transform_lat, transform_lng, wgs84_to_bd09, wgs84_to_gcj02, Coordinate, Shape,
    Transformer,
};
pub use provider::MapProvider;
pub use types::CoordinateSystem;
