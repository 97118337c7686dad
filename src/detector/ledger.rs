/// Growing segment list with sub-segment suppression
use crate::models::{LineSegment, Point};
use std::collections::HashMap;

/// Ordered list of discovered segments
///
/// A candidate is dropped when an already recorded segment ends at the same
/// far endpoint and the slope from that endpoint back to both start points is
/// equal. Candidates must arrive with their start points in increasing
/// canonical order, so the first discovery of a line always carries its true
/// minimal point.
#[derive(Debug, Default, Clone)]
pub struct SegmentLedger {
    segments: Vec<LineSegment>,
    // far endpoint -> indices into `segments`
    by_end: HashMap<Point, Vec<usize>>,
}

impl SegmentLedger {
    /// Empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `candidate` lies inside a segment recorded earlier
    pub fn covers(&self, candidate: &LineSegment) -> bool {
        let end = candidate.q;
        let Some(indices) = self.by_end.get(&end) else {
            return false;
        };
        let slope = end.slope_to(&candidate.p);
        indices
            .iter()
            .any(|&i| end.slope_to(&self.segments[i].p) == slope)
    }

    /// Record `candidate` unless it is covered; returns whether it was kept
    pub fn record(&mut self, candidate: LineSegment) -> bool {
        if self.covers(&candidate) {
            log::trace!("discarding sub-segment {}", candidate);
            return false;
        }
        self.by_end
            .entry(candidate.q)
            .or_default()
            .push(self.segments.len());
        self.segments.push(candidate);
        true
    }

    /// Number of recorded segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Consume the ledger, keeping discovery order
    pub fn into_segments(self) -> Vec<LineSegment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(a: (i32, i32), b: (i32, i32)) -> LineSegment {
        LineSegment::new(a.into(), b.into())
    }

    #[test]
    fn test_suffix_is_discarded() {
        let mut ledger = SegmentLedger::new();
        assert!(ledger.record(seg((0, 0), (4, 4))));
        assert!(!ledger.record(seg((1, 1), (4, 4))));
        assert!(!ledger.record(seg((0, 0), (4, 4))));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_shared_endpoint_other_line_is_kept() {
        let mut ledger = SegmentLedger::new();
        assert!(ledger.record(seg((0, 0), (4, 4))));
        assert!(ledger.record(seg((4, 0), (4, 4))));
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_same_slope_different_end_is_kept() {
        let mut ledger = SegmentLedger::new();
        assert!(ledger.record(seg((0, 0), (3, 3))));
        assert!(ledger.record(seg((0, 1), (3, 4))));
        assert_eq!(
            ledger.into_segments(),
            vec![seg((0, 0), (3, 3)), seg((0, 1), (3, 4))]
        );
    }
}
