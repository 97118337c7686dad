/// Sort-and-group O(n^2 log n) collinear search
use super::ledger::SegmentLedger;
use super::sorted::SortedPoints;
use super::{Algorithm, CollinearDetector, MIN_POINTS_PER_SEGMENT};
use crate::error::{CollinearError, Result};
use crate::models::{LineSegment, Point, Slope};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Fast detector
///
/// Each point in sorted order acts as a pivot: the points after it are grouped
/// by slope to the pivot, and every group of three or more yields a candidate
/// from the pivot to the group's last member.
#[derive(Debug, Clone)]
pub struct FastDetector {
    segments: Vec<LineSegment>,
    parallel: bool,
}

impl FastDetector {
    /// Run the search over `points`
    pub fn new(points: &[Point]) -> Result<Self> {
        Self::from_sorted(&SortedPoints::new(points)?)
    }

    /// Run the search with pivots spread across the rayon thread pool
    pub fn new_parallel(points: &[Point]) -> Result<Self> {
        Self::from_sorted_parallel(&SortedPoints::new(points)?)
    }

    /// Run the search over a collection that may hold absent entries
    pub fn from_nullable(points: Option<&[Option<Point>]>) -> Result<Self> {
        Self::from_sorted(&SortedPoints::from_nullable(points)?)
    }

    /// Run the search over an already validated point set
    pub fn from_sorted(points: &SortedPoints) -> Result<Self> {
        log::debug!("fast search over {} points", points.len());
        let mut ledger = SegmentLedger::new();
        for pivot in 0..points.len() {
            for candidate in pivot_candidates(points, pivot)? {
                ledger.record(candidate);
            }
        }
        Ok(Self::finish(ledger, false))
    }

    /// Parallel variant of [`FastDetector::from_sorted`]
    ///
    /// Candidates are computed per pivot on worker threads, then merged in
    /// pivot order through one ledger so suppression sees the same sequence
    /// as the sequential search.
    pub fn from_sorted_parallel(points: &SortedPoints) -> Result<Self> {
        log::debug!("parallel fast search over {} points", points.len());
        let per_pivot: Vec<Vec<LineSegment>> = (0..points.len())
            .into_par_iter()
            .map(|pivot| pivot_candidates(points, pivot))
            .collect::<Result<_>>()?;

        let mut ledger = SegmentLedger::new();
        for candidate in per_pivot.into_iter().flatten() {
            ledger.record(candidate);
        }
        Ok(Self::finish(ledger, true))
    }

    fn finish(ledger: SegmentLedger, parallel: bool) -> Self {
        log::debug!("fast search found {} segments", ledger.len());
        Self {
            segments: ledger.into_segments(),
            parallel,
        }
    }
}

/// Candidate segments starting at `points[pivot]`
fn pivot_candidates(points: &[Point], pivot: usize) -> Result<Vec<LineSegment>> {
    let origin = points[pivot];
    let tail = &points[pivot + 1..];

    // Slope -> tail indices; indices are pushed in sorted point order
    let mut groups: BTreeMap<Slope, Vec<usize>> = BTreeMap::new();
    for (k, point) in tail.iter().enumerate() {
        let slope = origin.slope_to(point);
        if slope.is_degenerate() {
            return Err(CollinearError::DuplicatePoint { point: origin });
        }
        groups.entry(slope).or_default().push(k);
    }

    let candidates: Vec<LineSegment> = groups
        .values()
        .filter(|members| members.len() + 1 >= MIN_POINTS_PER_SEGMENT)
        .filter_map(|members| members.last())
        .map(|&last| LineSegment::new(origin, tail[last]))
        .collect();

    if !candidates.is_empty() {
        log::trace!("pivot {} yields {} candidates", origin, candidates.len());
    }
    Ok(candidates)
}

impl CollinearDetector for FastDetector {
    fn algorithm(&self) -> Algorithm {
        if self.parallel {
            Algorithm::FastParallel
        } else {
            Algorithm::Fast
        }
    }

    fn segment_count(&self) -> usize {
        self.segments.len()
    }

    fn segments(&self) -> Vec<LineSegment> {
        self.segments.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn test_pivot_groups() {
        let sorted = SortedPoints::new(&pts(&[(0, 0), (1, 1), (2, 2), (3, 3), (1, 0), (2, 0), (3, 0)]))
            .unwrap();
        let candidates = pivot_candidates(&sorted, 0).unwrap();
        assert_eq!(
            candidates,
            vec![
                LineSegment::new(Point::new(0, 0), Point::new(3, 0)),
                LineSegment::new(Point::new(0, 0), Point::new(3, 3)),
            ]
        );
    }

    #[test]
    fn test_long_line_rediscovered_once() {
        let line: Vec<Point> = (0..7).map(|i| Point::new(2 * i, i)).collect();
        let det = FastDetector::new(&line).unwrap();
        assert_eq!(
            det.segments(),
            vec![LineSegment::new(Point::new(0, 0), Point::new(12, 6))]
        );
    }

    #[test]
    fn test_parallel_matches_sequential_order() {
        let mut points = pts(&[(1, 1), (2, 2), (3, 3), (4, 4), (1, 4), (2, 3), (3, 2), (4, 1)]);
        points.extend((0..5).map(|i| Point::new(10, 10 + i)));
        let seq = FastDetector::new(&points).unwrap();
        let par = FastDetector::new_parallel(&points).unwrap();
        assert_eq!(seq.segments(), par.segments());
        assert_eq!(par.algorithm(), Algorithm::FastParallel);
    }

    #[test]
    fn test_fewer_than_four_points() {
        let det = FastDetector::new(&pts(&[(0, 0), (1, 1), (2, 2)])).unwrap();
        assert_eq!(det.segment_count(), 0);
    }
}
