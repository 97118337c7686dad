//! Collinear points - maximal line segments through four or more points
//!
//! Given a fixed set of distinct integer points, finds every straight line
//! containing at least four of them and reports it as the segment between its
//! two extreme points. Two detectors are provided: an exhaustive brute force
//! search and a sort-and-group search, with an optional rayon-parallel variant.
//!
//! # Example
//! ```
//! use collinear_points::{Algorithm, Point, detect_segments};
//!
//! let points = [(1, 1), (2, 2), (3, 3), (4, 4), (1, 4), (2, 3), (3, 2), (4, 1)]
//!     .map(Point::from);
//! let segments = detect_segments(&points, Algorithm::Fast).unwrap();
//! assert_eq!(segments.len(), 2);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment driven settings
pub mod config;
/// Collinear segment detectors
pub mod detector;
/// Error and result types
pub mod error;
/// Core data structures (Point, Slope, LineSegment)
pub mod models;
/// Input parsing, rendering and reporting helpers
pub mod tools;

pub use detector::{Algorithm, BruteForceDetector, CollinearDetector, FastDetector, SortedPoints};
pub use error::{CollinearError, Result};
pub use models::{LineSegment, Point, Slope};

/// Resolve `Auto` to a concrete strategy for an input of `len` points
pub fn resolve_algorithm(algorithm: Algorithm, len: usize) -> Algorithm {
    match algorithm {
        Algorithm::Auto if len >= config::parallel_min_points() => Algorithm::FastParallel,
        Algorithm::Auto => Algorithm::Fast,
        other => other,
    }
}

/// Build a detector for `points` using the requested strategy
pub fn build_detector(points: &[Point], algorithm: Algorithm) -> Result<Box<dyn CollinearDetector>> {
    let sorted = SortedPoints::new(points)?;
    let detector: Box<dyn CollinearDetector> = match resolve_algorithm(algorithm, sorted.len()) {
        Algorithm::BruteForce => Box::new(BruteForceDetector::from_sorted(&sorted)),
        Algorithm::FastParallel => Box::new(FastDetector::from_sorted_parallel(&sorted)?),
        Algorithm::Fast | Algorithm::Auto => Box::new(FastDetector::from_sorted(&sorted)?),
    };
    Ok(detector)
}

/// Detect all maximal segments through four or more of `points`
///
/// # Arguments
/// * `points` - Input points, which must be pairwise distinct
/// * `algorithm` - Detection strategy
///
/// # Returns
/// Segments in discovery order
pub fn detect_segments(points: &[Point], algorithm: Algorithm) -> Result<Vec<LineSegment>> {
    Ok(build_detector(points, algorithm)?.segments())
}
