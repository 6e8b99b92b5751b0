//! Geometry primitives for level shapes.
//!
//! This module provides the small set of planar types the level tools need:
//! - [`Point`] - a 2D point / vector with floating-point coordinates
//! - [`Segment`] - the span between two consecutive points
//! - [`Polyline`] - an open path, called a "line" in level files
//! - [`BoundingBox`] - axis-aligned bounds used for plotting

mod bounding_box;
mod point;
mod polyline;
mod segment;

pub use bounding_box::BoundingBox;
pub use point::Point;
pub use polyline::Polyline;
pub use segment::Segment;

use crate::Coord;

/// Calculate the cross product of two 2D vectors (returns a scalar).
#[inline]
pub fn cross2(v1: Point, v2: Point) -> Coord {
    v1.x * v2.y - v1.y * v2.x
}

/// Calculate the dot product of two 2D vectors.
#[inline]
pub fn dot2(v1: Point, v2: Point) -> Coord {
    v1.x * v2.x + v1.y * v2.y
}

/// Check if a value is approximately equal to another within epsilon.
#[inline]
pub fn approx_eq(a: Coord, b: Coord, epsilon: Coord) -> bool {
    (a - b).abs() < epsilon
}

/// Check if two points are approximately equal.
#[inline]
pub fn points_approx_eq(a: Point, b: Point, epsilon: Coord) -> bool {
    approx_eq(a.x, b.x, epsilon) && approx_eq(a.y, b.y, epsilon)
}
