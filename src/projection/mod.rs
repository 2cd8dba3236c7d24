//! Conversions between WGS84, GCJ-02 and BD-09

pub mod batch;
pub mod constants;
pub mod coordinate;
pub mod datum;
pub mod offset;
pub mod transformer;

pub use batch::{batch_convert, convert_shapes, transform_shapes, Shape};
pub use coordinate::Coordinate;
pub use datum::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, wgs84_to_bd09, wgs84_to_gcj02,
};
pub use offset::{out_of_china, transform_lat, transform_lng};
pub use transformer::{route, ConvertFn, Transformer};
