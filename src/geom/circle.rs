//! Circles (attack hit-boxes)

use serde::{Deserialize, Serialize};

use super::segment::LineSegment;
use super::vector::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        (p - self.center).magnitude_squared() <= self.radius * self.radius
    }

    /// True if some point of `segment` lies within the disk
    pub fn intersects_line_segment(&self, segment: &LineSegment) -> bool {
        self.contains_point(segment.closest_point(self.center))
    }
}
