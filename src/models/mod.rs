pub mod point;
pub mod segment;
pub mod slope;

pub use point::Point;
pub use segment::LineSegment;
pub use slope::Slope;
