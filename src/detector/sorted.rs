/// Validated, canonically sorted working copy of the input points
use crate::error::{CollinearError, Result};
use crate::models::Point;
use std::ops::Deref;

/// Sorted, duplicate-free copy of a point set
///
/// Construction is the shared validation step of every detector: the caller's
/// data is copied, sorted once, and checked for repeats by comparing
/// neighbours.
#[derive(Debug, Clone)]
pub struct SortedPoints {
    points: Vec<Point>,
}

impl SortedPoints {
    /// Copy and sort `points`, rejecting duplicates
    pub fn new(points: &[Point]) -> Result<Self> {
        Self::from_vec(points.to_vec())
    }

    /// Validate a collection that may be absent or contain absent elements
    pub fn from_nullable(points: Option<&[Option<Point>]>) -> Result<Self> {
        let points = points.ok_or(CollinearError::NullInput { index: None })?;
        let owned = points
            .iter()
            .enumerate()
            .map(|(i, p)| p.ok_or(CollinearError::NullInput { index: Some(i) }))
            .collect::<Result<Vec<Point>>>()?;
        Self::from_vec(owned)
    }

    fn from_vec(mut points: Vec<Point>) -> Result<Self> {
        points.sort_unstable();
        if let Some(pair) = points.windows(2).find(|w| w[0] == w[1]) {
            log::debug!("rejecting input: duplicate point {}", pair[0]);
            return Err(CollinearError::DuplicatePoint { point: pair[0] });
        }
        Ok(Self { points })
    }

    /// Sorted points as a slice
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }
}

impl Deref for SortedPoints {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.points
    }
}
