//! Line segments and segment-segment intersection

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::vector::{OrthogonalSplit, Point, Vector};
use super::GeometryError;
use crate::consts::EPSILON;

/// Segment endpoints as they appear in serialized data
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Endpoints {
    start: Point,
    end: Point,
}

/// A line segment between two distinct points
///
/// `unit_direction` is always the normalized `start -> end` vector, which is
/// why the fields are private and the only constructor is [`LineSegment::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Endpoints", into = "Endpoints")]
pub struct LineSegment {
    start: Point,
    end: Point,
    unit_direction: Vector,
}

impl LineSegment {
    /// Fails with `DegenerateVector` when `start == end`
    pub fn new(start: Point, end: Point) -> Result<Self, GeometryError> {
        let unit_direction = (end - start)
            .normalize()
            .map_err(|_| GeometryError::DegenerateVector { op: "build a line segment" })?;
        Ok(Self {
            start,
            end,
            unit_direction,
        })
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    #[inline]
    pub fn unit_direction(&self) -> Vector {
        self.unit_direction
    }

    /// Unit normal, a quarter turn counter-clockwise from the direction
    #[inline]
    pub fn normal(&self) -> Vector {
        self.unit_direction.rot90()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).magnitude()
    }

    /// Split `v` into the part along this segment and the part across it
    #[inline]
    pub fn decompose(&self, v: Vector) -> OrthogonalSplit {
        v.decompose(self.unit_direction)
    }

    /// Whether a scalar offset from `start` along the direction stays on the segment
    fn spans(&self, k: f64) -> bool {
        Interval::new(-EPSILON, self.length() + EPSILON).contains(k)
    }

    /// True if `p` lies on the segment
    pub fn contains(&self, p: Point) -> bool {
        let v = p - self.start;
        v.is_parallel(self.unit_direction) && self.spans(v.dot(self.unit_direction))
    }

    /// Point of the segment nearest to `p`
    pub fn closest_point(&self, p: Point) -> Point {
        let k = (p - self.start)
            .dot(self.unit_direction)
            .clamp(0.0, self.length());
        self.start + self.unit_direction * k
    }

    /// True if the two segments share at least one point
    pub fn intersects(&self, other: &LineSegment) -> bool {
        let normal = self.normal();
        let denominator = normal.dot(other.unit_direction);

        if denominator.abs() < EPSILON {
            // Parallel supporting lines: they can only meet if collinear, and
            // then some endpoint of one segment lies on the other.
            self.contains(other.start)
                || self.contains(other.end)
                || other.contains(self.start)
                || other.contains(self.end)
        } else {
            // Offset along `other` where it crosses the line through `self`
            let k = -normal.dot(other.start - self.start) / denominator;
            let crossing = other.start + other.unit_direction * k;
            other.spans(k) && self.contains(crossing)
        }
    }
}

impl TryFrom<Endpoints> for LineSegment {
    type Error = GeometryError;

    fn try_from(raw: Endpoints) -> Result<Self, Self::Error> {
        LineSegment::new(raw.start, raw.end)
    }
}

impl From<LineSegment> for Endpoints {
    fn from(segment: LineSegment) -> Self {
        Endpoints {
            start: segment.start,
            end: segment.end,
        }
    }
}
