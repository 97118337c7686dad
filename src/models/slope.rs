/// Exact slope between two integer points
use std::cmp::Ordering;
use std::fmt;

/// Slope of the line through two points, kept as a reduced rational.
///
/// The three special cases follow the usual float convention:
/// - `Degenerate` is the slope of a point to itself (`-inf` as a float)
/// - `Vertical` is a line with equal x coordinates (`+inf` as a float)
/// - horizontal lines are `Finite { rise: 0, run: 1 }` (`+0.0`, never `-0.0`)
///
/// `Finite` values are always normalized (`run > 0`, `gcd(rise, run) == 1`),
/// so derived equality and hashing agree with numeric equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slope {
    /// Both points coincide
    Degenerate,
    /// Non-vertical line with slope `rise / run`
    Finite {
        /// Numerator (dy)
        rise: i64,
        /// Denominator (dx), strictly positive
        run: i64,
    },
    /// Both points share an x coordinate
    Vertical,
}

impl Slope {
    /// Build a slope from raw deltas (`dy / dx`)
    pub fn from_deltas(dy: i64, dx: i64) -> Self {
        match (dy, dx) {
            (0, 0) => Slope::Degenerate,
            (_, 0) => Slope::Vertical,
            (0, _) => Slope::Finite { rise: 0, run: 1 },
            _ => {
                let g = gcd(dy.abs(), dx.abs());
                let sign = dx.signum();
                Slope::Finite {
                    rise: sign * dy / g,
                    run: sign * dx / g,
                }
            }
        }
    }

    /// Horizontal slope (`+0.0`)
    pub const fn horizontal() -> Self {
        Slope::Finite { rise: 0, run: 1 }
    }

    /// True for the same-point sentinel
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Slope::Degenerate)
    }

    /// Floating point view using the signed-infinity convention
    pub fn as_f64(&self) -> f64 {
        match *self {
            Slope::Degenerate => f64::NEG_INFINITY,
            Slope::Vertical => f64::INFINITY,
            Slope::Finite { rise: 0, .. } => 0.0,
            Slope::Finite { rise, run } => rise as f64 / run as f64,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Slope::Degenerate => 0,
            Slope::Finite { .. } => 1,
            Slope::Vertical => 2,
        }
    }
}

impl Ord for Slope {
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Slope::Finite { rise: a, run: b }, Slope::Finite { rise: c, run: d }) => {
                // Both runs are positive, so cross-multiplication keeps the order
                (a as i128 * d as i128).cmp(&(c as i128 * b as i128))
            }
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Slope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slope::Degenerate => write!(f, "-inf"),
            Slope::Vertical => write!(f, "+inf"),
            Slope::Finite { rise, run: 1 } => write!(f, "{}", rise),
            Slope::Finite { rise, run } => write!(f, "{}/{}", rise, run),
        }
    }
}

fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
