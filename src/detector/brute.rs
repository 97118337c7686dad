/// Exhaustive O(n^4) collinear search, used as the reference oracle
use super::ledger::SegmentLedger;
use super::sorted::SortedPoints;
use super::{Algorithm, CollinearDetector, MIN_POINTS_PER_SEGMENT};
use crate::error::Result;
use crate::models::{LineSegment, Point};

/// Brute force detector
///
/// For each pair `i < j` in sorted order, scans every later point for the
/// same slope from `i` and extends the run to the furthest match.
#[derive(Debug, Clone)]
pub struct BruteForceDetector {
    segments: Vec<LineSegment>,
}

impl BruteForceDetector {
    /// Run the search over `points`
    pub fn new(points: &[Point]) -> Result<Self> {
        Ok(Self::from_sorted(&SortedPoints::new(points)?))
    }

    /// Run the search over a collection that may hold absent entries
    pub fn from_nullable(points: Option<&[Option<Point>]>) -> Result<Self> {
        Ok(Self::from_sorted(&SortedPoints::from_nullable(points)?))
    }

    /// Run the search over an already validated point set
    pub fn from_sorted(points: &SortedPoints) -> Self {
        let n = points.len();
        log::debug!("brute force search over {} points", n);

        let mut ledger = SegmentLedger::new();
        for i in 0..n {
            let start = points[i];
            for j in (i + 1)..n {
                let reference = start.slope_to(&points[j]);
                let mut in_line = 2usize;
                let mut end = points[j];
                for k in (j + 1)..n {
                    if start.slope_to(&points[k]) == reference {
                        end = end.max(points[k]);
                        in_line += 1;
                    }
                }
                if in_line >= MIN_POINTS_PER_SEGMENT {
                    ledger.record(LineSegment::new(start, end));
                }
            }
        }

        log::debug!("brute force search found {} segments", ledger.len());
        Self {
            segments: ledger.into_segments(),
        }
    }
}

impl CollinearDetector for BruteForceDetector {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BruteForce
    }

    fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn segments(&self) -> Vec<LineSegment> {
        self.segments.clone()
    }
}
