//! Input and output helpers around the detectors
//!
//! The detectors never touch files; this module reads point sets from text,
//! checks coordinate ranges, and formats or renders the results.

/// Raster rendering of points and segments
pub mod render;

pub use render::{render_segments, save_render};

use crate::config;
use crate::error::{CollinearError, Result};
use crate::models::{LineSegment, Point};
use std::fs;
use std::path::Path;

/// Parse whitespace-delimited integer coordinates using the configured range
///
/// An odd number of integers means the first one is the point count. Lines
/// starting with `#` are ignored.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    parse_points_with_max(text, config::max_coord())
}

/// Parse points, accepting coordinates in `0..=max`
pub fn parse_points_with_max(text: &str, max: i32) -> Result<Vec<Point>> {
    let mut values = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            let value = token.parse::<i32>().map_err(|_| CollinearError::Parse {
                line: line_idx + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }

    let coords = if values.len() % 2 == 1 {
        let expected = usize::try_from(values[0]).map_err(|_| CollinearError::Parse {
            line: 1,
            token: values[0].to_string(),
        })?;
        let coords = &values[1..];
        if coords.len() != expected * 2 {
            return Err(CollinearError::PointCount {
                expected,
                found: coords.len() / 2,
            });
        }
        coords
    } else {
        &values[..]
    };

    coords
        .chunks_exact(2)
        .map(|pair| {
            let point = Point::new(pair[0], pair[1]);
            if (0..=max).contains(&point.x) && (0..=max).contains(&point.y) {
                Ok(point)
            } else {
                Err(CollinearError::CoordinateOutOfRange { point, max })
            }
        })
        .collect()
}

/// Read and parse a point file
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let content = fs::read_to_string(path)?;
    parse_points(&content)
}

/// One segment per line, `(x1, y1) -> (x2, y2)`
pub fn format_segments(segments: &[LineSegment]) -> String {
    segments.iter().map(|s| format!("{}\n", s)).collect()
}

/// Compare two segment lists as unordered sets of endpoint pairs
pub fn same_segment_set(a: &[LineSegment], b: &[LineSegment]) -> bool {
    let mut a: Vec<_> = a.iter().map(LineSegment::endpoints).collect();
    let mut b: Vec<_> = b.iter().map(LineSegment::endpoints).collect();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
