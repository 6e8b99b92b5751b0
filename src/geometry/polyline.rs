//! Polyline type for open paths.
//!
//! Level files call these "lines": an ordered run of points where each pair of
//! consecutive points forms a [`Segment`]. On disk a polyline is a bare JSON
//! array of `{x, y}` objects.

use super::{Point, Segment};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// An open polyline defined by a sequence of points.
///
/// Derefs to `[Point]`, so slicing and iteration work as on the points.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    #[inline]
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The segment from point `index` to point `index + 1`, if both exist.
    #[inline]
    pub fn edge(&self, index: usize) -> Option<Segment> {
        let a = *self.points.get(index)?;
        let b = *self.points.get(index.checked_add(1)?)?;
        Some(Segment::new(a, b))
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// A line needs at least one segment to be drawn or cut.
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 2
    }
}

impl fmt::Debug for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polyline({} points)", self.points.len())
    }
}

impl Deref for Polyline {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl FromIterator<Point> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_polyline() -> Polyline {
        [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect()
    }

    #[test]
    fn test_polyline_edge() {
        let pl = make_polyline();
        let edge = pl.edge(0).unwrap();
        assert_eq!(edge.a, Point::new(0.0, 0.0));
        assert_eq!(edge.b, Point::new(10.0, 0.0));

        assert!(pl.edge(2).is_some());
        assert!(pl.edge(3).is_none());
        assert!(pl.edge(usize::MAX).is_none());
    }

    #[test]
    fn test_polyline_edge_count() {
        assert_eq!(make_polyline().edge_count(), 3); // 4 points = 3 edges (open path)
        assert_eq!(Polyline::default().edge_count(), 0);
    }

    #[test]
    fn test_polyline_is_valid() {
        assert!(make_polyline().is_valid());
        assert!(!Polyline::from_points(vec![Point::zero()]).is_valid());
        assert!(!Polyline::default().is_valid());
    }

    #[test]
    fn test_polyline_derefs_to_points() {
        let pl = make_polyline();
        assert_eq!(pl.len(), 4);
        assert_eq!(pl[1], Point::new(10.0, 0.0));
        assert_eq!(&pl[..2], &pl.points()[..2]);
        assert_eq!(pl.last(), Some(&Point::new(0.0, 10.0)));
    }

    #[test]
    fn test_polyline_serializes_as_array() {
        let pl = Polyline::from_points(vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)]);
        let json = serde_json::to_string(&pl).unwrap();
        assert_eq!(json, r#"[{"x":0.0,"y":0.0},{"x":1.0,"y":2.0}]"#);

        let back: Polyline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pl);
    }
}
