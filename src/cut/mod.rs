//! Segment cutting.
//!
//! A cut opens a gap of a given width centred on the midpoint of one segment
//! of a polyline, splitting the polyline in two:
//!
//! ```text
//!   P0 ---- P1 ---------------- P2 ---- P3
//!                    cut(1, w)
//!   P0 ---- P1 ---- A    B ---- P2 ---- P3
//!                    |<-w->|
//! ```
//!
//! [`cut_segment`] only computes the two replacement polylines; splicing them
//! into a shape is done by [`Shape::cut_line`](crate::level::Shape::cut_line).

use crate::geometry::{Point, Polyline, Segment};
use crate::{Coord, Error, Result};
use log::debug;

/// The outcome of cutting one segment of a polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct Cut {
    /// Original points up to and including the segment start, then `A`.
    pub first: Polyline,
    /// `B`, then the original points from the segment end onwards.
    pub second: Polyline,
}

impl Cut {
    /// The new end point of the first polyline (`A`).
    pub fn gap_start(&self) -> Point {
        self.first[self.first.len() - 1]
    }

    /// The new start point of the second polyline (`B`).
    pub fn gap_end(&self) -> Point {
        self.second[0]
    }

    /// The gap left between the two polylines.
    pub fn gap(&self) -> Segment {
        Segment::new(self.gap_start(), self.gap_end())
    }

    /// Consume the cut, returning `(first, second)`.
    pub fn into_pair(self) -> (Polyline, Polyline) {
        (self.first, self.second)
    }
}

/// Check that `point_idx` names a segment of a polyline with `len` points.
pub fn check_segment_index(len: usize, point_idx: usize) -> Result<()> {
    if len < 2 || point_idx >= len - 1 {
        return Err(Error::InvalidIndex(format!(
            "point index {} does not start a segment of a line with {} point(s)",
            point_idx, len
        )));
    }
    Ok(())
}

/// Check that a gap width is a positive finite number.
pub fn check_width(width: Coord) -> Result<()> {
    if !(width.is_finite() && width > 0.0) {
        return Err(Error::InvalidWidth(width));
    }
    Ok(())
}

/// Cut the segment `line[point_idx] -> line[point_idx + 1]`, opening a gap of
/// `width` centred on its midpoint.
///
/// Fails with [`Error::SegmentTooShort`] when the segment is shorter than the
/// gap, with [`Error::NonFiniteSegment`] when its length or direction is not a
/// finite number, and with [`Error::InvalidIndex`] / [`Error::InvalidWidth`]
/// for bad arguments. The input polyline is never modified.
pub fn cut_segment(line: &Polyline, point_idx: usize, width: Coord) -> Result<Cut> {
    check_segment_index(line.len(), point_idx)?;
    check_width(width)?;

    let p1 = line[point_idx];
    let p2 = line[point_idx + 1];
    let segment = Segment::new(p1, p2);

    let length = segment.length();
    if length.is_finite() && length < width {
        return Err(Error::SegmentTooShort { length, width });
    }

    // Some for every finite length >= width > 0.
    let unit = segment
        .unit_direction()
        .ok_or(Error::NonFiniteSegment { from: p1, to: p2 })?;
    let mid = segment.midpoint();
    let half = unit * (width / 2.0);
    let a = mid - half;
    let b = mid + half;

    debug!(
        "Cutting segment {} of length {:.6}: gap {} -> {}",
        point_idx, length, a, b
    );

    let points = line.points();

    let mut first = Vec::with_capacity(point_idx + 2);
    first.extend_from_slice(&points[..=point_idx]);
    first.push(a);

    let mut second = Vec::with_capacity(points.len() - point_idx);
    second.push(b);
    second.extend_from_slice(&points[point_idx + 1..]);

    Ok(Cut {
        first: Polyline::from_points(first),
        second: Polyline::from_points(second),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{cross2, dot2, points_approx_eq};

    fn distance_to_line(seg: &Segment, p: Point) -> Coord {
        cross2(seg.direction(), p - seg.a).abs() / seg.length()
    }

    const EPS: Coord = 1e-9;

    fn line(coords: &[(Coord, Coord)]) -> Polyline {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_cut_horizontal_segment() {
        let pl = line(&[(0.0, 0.0), (10.0, 0.0)]);
        let cut = cut_segment(&pl, 0, 2.0).unwrap();

        assert_eq!(cut.first, line(&[(0.0, 0.0), (4.0, 0.0)]));
        assert_eq!(cut.second, line(&[(6.0, 0.0), (10.0, 0.0)]));
    }

    #[test]
    fn test_cut_too_short() {
        let pl = line(&[(0.0, 0.0), (10.0, 0.0)]);
        match cut_segment(&pl, 0, 20.0) {
            Err(Error::SegmentTooShort { length, width }) => {
                assert_eq!(length, 10.0);
                assert_eq!(width, 20.0);
            }
            other => panic!("expected SegmentTooShort, got {:?}", other),
        }
    }

    #[test]
    fn test_cut_full_width_leaves_original_endpoints() {
        let pl = line(&[(0.0, 0.0), (10.0, 0.0)]);
        let cut = cut_segment(&pl, 0, 10.0).unwrap();
        assert!(points_approx_eq(cut.gap_start(), Point::new(0.0, 0.0), EPS));
        assert!(points_approx_eq(cut.gap_end(), Point::new(10.0, 0.0), EPS));
    }

    #[test]
    fn test_cut_gap_has_requested_width() {
        let pl = line(&[(1.0, 2.0), (4.0, 6.0), (-3.0, 7.5), (0.25, -9.0)]);
        for point_idx in 0..pl.edge_count() {
            for width in [0.01, 0.2, 1.0, 4.9] {
                let cut = cut_segment(&pl, point_idx, width).unwrap();
                assert!(
                    (cut.gap().length() - width).abs() < EPS,
                    "segment {} width {}",
                    point_idx,
                    width
                );
            }
        }
    }

    #[test]
    fn test_cut_gap_is_on_segment_and_symmetric() {
        let pl = line(&[(1.0, 2.0), (4.0, 6.0), (-3.0, 7.5)]);
        let cut = cut_segment(&pl, 1, 0.5).unwrap();
        let seg = pl.edge(1).unwrap();
        let (a, b) = (cut.gap_start(), cut.gap_end());

        // Collinear with P1, P2.
        assert!(distance_to_line(&seg, a) < EPS);
        assert!(distance_to_line(&seg, b) < EPS);

        // Symmetric about the midpoint, with A nearer P1.
        assert!(points_approx_eq(a.midpoint(&b), seg.midpoint(), EPS));
        assert!(dot2(b - a, seg.direction()) > 0.0);
        assert!(a.distance(&seg.a) < b.distance(&seg.a));
    }

    #[test]
    fn test_cut_reconstructs_original_points() {
        let pl = line(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0), (0.0, 0.0)]);
        for point_idx in 0..pl.edge_count() {
            let (first, second) = cut_segment(&pl, point_idx, 1.0).unwrap().into_pair();
            let mut rebuilt: Vec<Point> = first.points()[..first.len() - 1].to_vec();
            rebuilt.extend_from_slice(&second.points()[1..]);
            assert_eq!(rebuilt, pl.points());
            assert_eq!(first.len() + second.len(), pl.len() + 2);
        }
    }

    #[test]
    fn test_cut_last_segment() {
        let pl = line(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0)]);
        let cut = cut_segment(&pl, 1, 2.0).unwrap();
        assert_eq!(cut.first, line(&[(0.0, 0.0), (0.0, 4.0), (1.0, 4.0)]));
        assert_eq!(cut.second, line(&[(3.0, 4.0), (4.0, 4.0)]));
    }

    #[test]
    fn test_cut_invalid_index() {
        let pl = line(&[(0.0, 0.0), (10.0, 0.0)]);
        assert!(matches!(cut_segment(&pl, 1, 1.0), Err(Error::InvalidIndex(_))));
        assert!(matches!(
            cut_segment(&pl, usize::MAX, 1.0),
            Err(Error::InvalidIndex(_))
        ));

        let single = line(&[(0.0, 0.0)]);
        assert!(matches!(cut_segment(&single, 0, 1.0), Err(Error::InvalidIndex(_))));
        assert!(matches!(
            cut_segment(&Polyline::default(), 0, 1.0),
            Err(Error::InvalidIndex(_))
        ));
    }

    #[test]
    fn test_cut_invalid_width() {
        let pl = line(&[(0.0, 0.0), (10.0, 0.0)]);
        for width in [0.0, -1.0, Coord::NAN, Coord::INFINITY] {
            assert!(matches!(
                cut_segment(&pl, 0, width),
                Err(Error::InvalidWidth(_))
            ));
        }
    }

    #[test]
    fn test_cut_zero_length_segment_is_too_short() {
        let pl = line(&[(1.0, 1.0), (1.0, 1.0)]);
        assert!(matches!(
            cut_segment(&pl, 0, 0.1),
            Err(Error::SegmentTooShort { .. })
        ));
    }

    #[test]
    fn test_cut_huge_coordinates_keeps_gap_width() {
        let pl = line(&[(-1e200, 0.0), (1e200, 0.0)]);
        let cut = cut_segment(&pl, 0, 2.0).unwrap();
        assert_eq!(cut.gap_start(), Point::new(-1.0, 0.0));
        assert_eq!(cut.gap_end(), Point::new(1.0, 0.0));
        assert_eq!(cut.gap().length(), 2.0);
    }

    #[test]
    fn test_cut_non_finite_segment() {
        let overflowing = line(&[(-1.7e308, 0.0), (1.7e308, 0.0)]);
        assert!(matches!(
            cut_segment(&overflowing, 0, 2.0),
            Err(Error::NonFiniteSegment { .. })
        ));

        let nan = line(&[(0.0, 0.0), (Coord::NAN, 1.0)]);
        assert!(matches!(
            cut_segment(&nan, 0, 0.1),
            Err(Error::NonFiniteSegment { .. })
        ));

        let infinite = line(&[(0.0, 0.0), (Coord::INFINITY, 0.0)]);
        assert!(matches!(
            cut_segment(&infinite, 0, 0.1),
            Err(Error::NonFiniteSegment { .. })
        ));
    }
}
