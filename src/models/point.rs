/// 2D point with integer coordinates
use super::Slope;
use std::cmp::Ordering;
use std::fmt;

/// Immutable integer point
///
/// Points are totally ordered by y, then by x. Every detector relies on this
/// order to pick segment endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Slope of the line from this point to `other`
    pub fn slope_to(&self, other: &Point) -> Slope {
        let dy = other.y as i64 - self.y as i64;
        let dx = other.x as i64 - self.x as i64;
        Slope::from_deltas(dy, dx)
    }

    /// Comparator ordering other points by their slope to this point
    pub fn slope_order(&self) -> impl Fn(&Point, &Point) -> Ordering + '_ {
        move |a, b| self.slope_to(a).cmp(&self.slope_to(b))
    }

    /// True if `a`, `b` and `self` lie on one line
    pub fn is_collinear_with(&self, a: &Point, b: &Point) -> bool {
        let ax = a.x as i128 - self.x as i128;
        let ay = a.y as i128 - self.y as i128;
        let bx = b.x as i128 - self.x as i128;
        let by = b.y as i128 - self.y as i128;
        ax * by == ay * bx
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_y_then_x() {
        let mut points = vec![
            Point::new(3, 1),
            Point::new(0, 2),
            Point::new(1, 1),
            Point::new(5, 0),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![
                Point::new(5, 0),
                Point::new(1, 1),
                Point::new(3, 1),
                Point::new(0, 2)
            ]
        );
    }

    #[test]
    fn test_slope_to_sentinels() {
        let p = Point::new(2, 3);
        assert_eq!(p.slope_to(&p), Slope::Degenerate);
        assert_eq!(p.slope_to(&Point::new(2, 9)), Slope::Vertical);
        assert_eq!(p.slope_to(&Point::new(-4, 3)), Slope::horizontal());
        assert_eq!(p.slope_to(&Point::new(4, 7)), Slope::from_deltas(2, 1));
    }

    #[test]
    fn test_slope_is_symmetric() {
        let a = Point::new(1, 7);
        let b = Point::new(4, -2);
        assert_eq!(a.slope_to(&b), b.slope_to(&a));
    }

    #[test]
    fn test_slope_order() {
        let origin = Point::new(0, 0);
        let mut others = vec![Point::new(0, 5), Point::new(1, 1), Point::new(3, 0)];
        others.sort_by(origin.slope_order());
        assert_eq!(
            others,
            vec![Point::new(3, 0), Point::new(1, 1), Point::new(0, 5)]
        );
    }

    #[test]
    fn test_collinearity() {
        let a = Point::new(0, 0);
        assert!(a.is_collinear_with(&Point::new(2, 2), &Point::new(-5, -5)));
        assert!(!a.is_collinear_with(&Point::new(2, 2), &Point::new(2, 3)));
    }
}
