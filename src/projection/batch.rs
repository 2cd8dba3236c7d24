//! Batch conversion over points and polygon rings

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::projection::coordinate::Coordinate;
use crate::projection::transformer::Transformer;
use crate::types::CoordinateSystem;

/// One entry of a batch: a single point or a ring of points.
///
/// Deserializes from `[lng, lat]` or `[[lng, lat], ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shape {
    Point(Coordinate),
    Ring(Vec<Coordinate>),
}

impl Shape {
    /// Number of points in this entry
    pub fn point_count(&self) -> usize {
        match self {
            Shape::Point(_) => 1,
            Shape::Ring(ring) => ring.len(),
        }
    }

    /// Converts this entry, keeping its shape
    pub fn transform(&self, transformer: &Transformer) -> Shape {
        match self {
            Shape::Point(coord) => Shape::Point(transformer.transform(*coord)),
            Shape::Ring(ring) => Shape::Ring(transformer.transform_many(ring)),
        }
    }
}

impl From<Coordinate> for Shape {
    fn from(coord: Coordinate) -> Self {
        Shape::Point(coord)
    }
}

impl From<Vec<Coordinate>> for Shape {
    fn from(ring: Vec<Coordinate>) -> Self {
        Shape::Ring(ring)
    }
}

/// Converts every entry with an already resolved transformer
pub fn transform_shapes(shapes: &[Shape], transformer: &Transformer) -> Vec<Shape> {
    if transformer.is_identity() {
        return shapes.to_vec();
    }
    shapes.iter().map(|shape| shape.transform(transformer)).collect()
}

/// Converts a batch between two parsed systems
pub fn convert_shapes(
    shapes: &[Shape],
    from: CoordinateSystem,
    to: CoordinateSystem,
) -> Result<Vec<Shape>> {
    let transformer = Transformer::new(from, to)?;
    Ok(transform_shapes(shapes, &transformer))
}

/// Converts a batch between two systems given by name.
///
/// Identical names return a copy of the input without looking up a route, so
/// `batch_convert(c, "x", "x")` succeeds for any `x`. Otherwise unknown names
/// and missing routes fail with `UnsupportedConversion`.
pub fn batch_convert(shapes: &[Shape], from: &str, to: &str) -> Result<Vec<Shape>> {
    if from == to {
        return Ok(shapes.to_vec());
    }

    let transformer = Transformer::from_names(from, to)?;
    debug!(
        entries = shapes.len(),
        points = shapes.iter().map(Shape::point_count).sum::<usize>(),
        from,
        to,
        "batch conversion"
    );

    Ok(transform_shapes(shapes, &transformer))
}
