//! Collinear segment detection
//!
//! Two interchangeable detectors find every maximal line segment through four
//! or more input points:
//! - Brute force: every pair extended by a scan of later points, O(n^4)
//! - Fast: per-pivot slope grouping, O(n^2 log n), optionally parallel
//!
//! Both validate input the same way and produce the same set of segments.

/// Exhaustive search used as a reference oracle
pub mod brute;
/// Slope grouping search
pub mod fast;
/// Discovered segment list with sub-segment suppression
pub mod ledger;
/// Input validation and sorting
pub mod sorted;

use crate::models::LineSegment;
use std::fmt;

pub use brute::BruteForceDetector;
pub use fast::FastDetector;
pub use ledger::SegmentLedger;
pub use sorted::SortedPoints;

/// Smallest number of collinear points reported as a segment
pub const MIN_POINTS_PER_SEGMENT: usize = 4;

/// Detection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Exhaustive search
    BruteForce,
    /// Sequential slope grouping
    Fast,
    /// Slope grouping with pivots sharded across threads
    FastParallel,
    /// Fast search, parallel once the input is large enough
    #[default]
    Auto,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::BruteForce => "brute",
            Algorithm::Fast => "fast",
            Algorithm::FastParallel => "parallel",
            Algorithm::Auto => "auto",
        };
        f.write_str(name)
    }
}

/// Query interface shared by the detectors
///
/// All work happens at construction; a detector is read-only afterwards.
pub trait CollinearDetector {
    /// Strategy that produced the result
    fn algorithm(&self) -> Algorithm;

    /// Number of maximal segments found
    fn segment_count(&self) -> usize;

    /// Owned copy of the segments, in discovery order
    fn segments(&self) -> Vec<LineSegment>;
}
