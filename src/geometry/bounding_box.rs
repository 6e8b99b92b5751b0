//! Axis-aligned bounding box.

use super::Point;
use crate::Coord;

/// An axis-aligned bounding box.
///
/// A default box is *undefined* (contains nothing) until a point is merged in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
    pub defined: bool,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundingBox {
    /// Create an empty (undefined) bounding box.
    pub const fn new() -> Self {
        Self {
            min: Point::zero(),
            max: Point::zero(),
            defined: false,
        }
    }

    /// Create a bounding box spanning two corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
            defined: true,
        }
    }

    /// Create a bounding box containing all the given points.
    pub fn from_points(points: &[Point]) -> Self {
        let mut bb = Self::new();
        for p in points {
            bb.merge_point(*p);
        }
        bb
    }

    /// Grow the box to include a point.
    pub fn merge_point(&mut self, p: Point) {
        if self.defined {
            self.min.x = self.min.x.min(p.x);
            self.min.y = self.min.y.min(p.y);
            self.max.x = self.max.x.max(p.x);
            self.max.y = self.max.y.max(p.y);
        } else {
            self.min = p;
            self.max = p;
            self.defined = true;
        }
    }

    /// Check whether the box contains any point at all.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.defined
    }

    #[inline]
    pub fn width(&self) -> Coord {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> Coord {
        self.max.y - self.min.y
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Point {
        self.min.midpoint(&self.max)
    }
}
