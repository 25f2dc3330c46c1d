//! Plane geometry
//!
//! Pure value types and predicates. Nothing here holds state; every
//! operation builds a new value from its inputs.

pub mod circle;
pub mod interval;
pub mod polygon;
pub mod segment;
pub mod vector;

pub use circle::Circle;
pub use interval::Interval;
pub use polygon::{Polygon4, Rectangle, Size};
pub use segment::LineSegment;
pub use vector::{DirectedPoint, OrthogonalSplit, Point, Vector};

use thiserror::Error;

/// Geometry precondition violations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The operation needs a direction and was handed a zero-length vector
    #[error("cannot {op}: vector has zero length")]
    DegenerateVector { op: &'static str },
}
