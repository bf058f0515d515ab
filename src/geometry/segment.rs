//! Orientation-based segment intersection.
//!
//! # Algorithm
//!
//! Segments `ab` and `cd` cross iff `a` and `b` lie on opposite sides of
//! line `cd`, and `c` and `d` lie on opposite sides of line `ab`:
//!
//! ```text
//! ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
//! ```
//!
//! `ccw` is strict, so collinear triples count as clockwise. Touching or
//! collinear segments are therefore not reliably reported; callers exclude
//! segments sharing an endpoint before asking.
//!
//! # Reference
//!
//! Cormen, Leiserson, Rivest & Stein, *Introduction to Algorithms*, §33.1.

use serde::{Deserialize, Serialize};

use crate::models::City;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&City> for Point {
    fn from(city: &City) -> Self {
        Self::new(city.x(), city.y())
    }
}

/// Returns `true` if `a → b → c` turns strictly counter-clockwise.
pub fn ccw(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Returns `true` if segment `p1p2` crosses segment `p3p4`.
///
/// # Examples
///
/// ```
/// use tsp_search::geometry::{segments_intersect, Point};
///
/// let cross = segments_intersect(
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 0.0),
/// );
/// assert!(cross);
/// ```
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    ccw(p1, p3, p4) != ccw(p2, p3, p4) && ccw(p1, p2, p3) != ccw(p1, p2, p4)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_ccw() {
        assert!(ccw(p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)));
        assert!(!ccw(p(0.0, 0.0), p(1.0, 1.0), p(1.0, 0.0)));
        // collinear is not counter-clockwise
        assert!(!ccw(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)));
    }

    #[test]
    fn test_diagonals_cross() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(10.0, 10.0),
            p(0.0, 10.0),
            p(10.0, 0.0)
        ));
    }

    #[test]
    fn test_parallel_segments_do_not_cross() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(0.0, 5.0),
            p(10.0, 5.0)
        ));
    }

    #[test]
    fn test_disjoint_segments_do_not_cross() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(5.0, 0.0),
            p(6.0, -3.0)
        ));
    }

    #[test]
    fn test_t_shape_not_reaching() {
        // second segment stops short of the first
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(5.0, 1.0),
            p(5.0, 10.0)
        ));
    }

    #[test]
    fn test_symmetric_in_segment_order() {
        let (a, b, c, d) = (p(0.0, 0.0), p(4.0, 3.0), p(0.0, 3.0), p(4.0, 0.0));
        assert_eq!(segments_intersect(a, b, c, d), segments_intersect(c, d, a, b));
        assert_eq!(segments_intersect(a, b, c, d), segments_intersect(b, a, d, c));
    }
}
