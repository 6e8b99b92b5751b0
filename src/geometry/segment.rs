//! Line segment type.
//!
//! A [`Segment`] is the straight span between two consecutive points of a
//! polyline. Level files call polylines "lines", so the two-point type is
//! named `Segment` here to keep the vocabulary unambiguous.

use super::Point;
use crate::Coord;
use std::fmt;

/// A line segment defined by two endpoints.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    /// Create a new segment from two points.
    #[inline]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Get the direction vector (b - a).
    #[inline]
    pub fn direction(&self) -> Point {
        self.b - self.a
    }

    /// Unit vector pointing from `a` to `b`.
    ///
    /// `None` for a zero-length segment, or when the direction does not fit
    /// in a finite `f64`.
    #[inline]
    pub fn unit_direction(&self) -> Option<Point> {
        self.direction().normalized()
    }

    /// Get the midpoint of the segment.
    ///
    /// Taken as `a + (b - a) / 2`, which stays finite whenever the direction
    /// is finite, even if `a + b` would not be.
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.a + self.direction() / 2.0
    }

    /// Get the length of the segment.
    #[inline]
    pub fn length(&self) -> Coord {
        self.a.distance(&self.b)
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment({:?} -> {:?})", self.a, self.b)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[({:.6}, {:.6}) -> ({:.6}, {:.6})]",
            self.a.x, self.a.y, self.b.x, self.b.y
        )
    }
}
