/// Line segment bounded by two collinear extremes
use super::{Point, Slope};
use std::fmt;

/// Maximal segment through four or more collinear points
///
/// `p` always precedes `q` in canonical point order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment {
    /// Lower endpoint
    pub p: Point,
    /// Upper endpoint
    pub q: Point,
}

impl LineSegment {
    /// Create a segment, storing the endpoints in canonical order
    pub fn new(a: Point, b: Point) -> Self {
        if a <= b {
            Self { p: a, q: b }
        } else {
            Self { p: b, q: a }
        }
    }

    /// Slope of the supporting line
    pub fn slope(&self) -> Slope {
        self.p.slope_to(&self.q)
    }

    /// True if `point` lies on the supporting line of this segment
    pub fn on_line(&self, point: &Point) -> bool {
        self.p.is_collinear_with(&self.q, point)
    }

    /// True if `point` lies on the segment, endpoints included
    pub fn contains(&self, point: &Point) -> bool {
        self.on_line(point) && self.p <= *point && *point <= self.q
    }

    /// True if both segments lie on the same infinite line
    pub fn same_line(&self, other: &LineSegment) -> bool {
        self.slope() == other.slope() && (self.on_line(&other.p) || self.on_line(&other.q))
    }

    /// Endpoints as a pair, handy for set comparisons
    pub fn endpoints(&self) -> (Point, Point) {
        (self.p, self.q)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.p, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_canonical() {
        let seg = LineSegment::new(Point::new(4, 4), Point::new(1, 1));
        assert_eq!(seg.p, Point::new(1, 1));
        assert_eq!(seg.q, Point::new(4, 4));
        assert_eq!(seg, LineSegment::new(Point::new(1, 1), Point::new(4, 4)));
    }

    #[test]
    fn test_contains() {
        let seg = LineSegment::new(Point::new(0, 0), Point::new(6, 3));
        assert!(seg.contains(&Point::new(2, 1)));
        assert!(seg.contains(&Point::new(6, 3)));
        assert!(!seg.contains(&Point::new(8, 4)));
        assert!(seg.on_line(&Point::new(8, 4)));
        assert!(!seg.on_line(&Point::new(1, 1)));
    }

    #[test]
    fn test_same_line() {
        let long = LineSegment::new(Point::new(0, 0), Point::new(5, 5));
        let sub = LineSegment::new(Point::new(2, 2), Point::new(5, 5));
        let parallel = LineSegment::new(Point::new(0, 1), Point::new(4, 5));
        assert!(long.same_line(&sub));
        assert!(sub.same_line(&long));
        assert!(!long.same_line(&parallel));
    }

    #[test]
    fn test_display() {
        let seg = LineSegment::new(Point::new(1, 4), Point::new(4, 1));
        assert_eq!(seg.to_string(), "(4, 1) -> (1, 4)");
    }
}
