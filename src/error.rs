//! Error types for collinear point detection

use crate::models::Point;

/// Result type alias
pub type Result<T> = std::result::Result<T, CollinearError>;

/// Collinear detection error types
///
/// The detectors only ever return `NullInput` and `DuplicatePoint`; the other
/// variants belong to the input and rendering tools.
#[derive(Debug, thiserror::Error)]
pub enum CollinearError {
    /// The point collection, or one of its elements, is absent
    #[error("{}", null_input_message(.index))]
    NullInput {
        /// Index of the absent element, `None` for the whole collection
        index: Option<usize>,
    },

    /// Two input points are identical
    #[error("duplicate point {point}")]
    DuplicatePoint {
        /// The repeated point
        point: Point,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed token in a point file
    #[error("line {line}: cannot parse {token:?} as an integer")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Offending token
        token: String,
    },

    /// Declared point count does not match the coordinates present
    #[error("expected {expected} points, found {found}")]
    PointCount {
        /// Count declared in the header
        expected: usize,
        /// Points actually read
        found: usize,
    },

    /// Coordinate outside the accepted range
    #[error("point {point} outside coordinate range 0..={max}")]
    CoordinateOutOfRange {
        /// Rejected point
        point: Point,
        /// Inclusive upper bound
        max: i32,
    },

    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

fn null_input_message(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("point at index {} is absent", i),
        None => "point collection is absent".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CollinearError::NullInput { index: None };
        assert_eq!(err.to_string(), "point collection is absent");
        let err = CollinearError::NullInput { index: Some(3) };
        assert_eq!(err.to_string(), "point at index 3 is absent");
        let err = CollinearError::DuplicatePoint {
            point: Point::new(1, 1),
        };
        assert_eq!(err.to_string(), "duplicate point (1, 1)");
    }
}
