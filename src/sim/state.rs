//! World snapshot types
//!
//! A `World` is a value: each tick derives a new one from the previous one.

use serde::{Deserialize, Serialize};

use crate::geom::{DirectedPoint, GeometryError, LineSegment, Point, Polygon4, Rectangle, Size, Vector};

/// An oriented rectangle in the world: the player or a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rectangle,
    /// Facing; any non-zero length
    pub facing: Vector,
}

impl Body {
    pub const fn new(center: Point, size: Size, facing: Vector) -> Self {
        Self {
            rect: Rectangle::new(center, size),
            facing,
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.rect.center
    }

    #[inline]
    pub fn pose(&self) -> DirectedPoint {
        DirectedPoint::new(self.rect.center, self.facing)
    }

    /// Same body moved and turned to `pose`
    pub fn with_pose(&self, pose: DirectedPoint) -> Self {
        Self::new(pose.point, self.rect.size, pose.direction)
    }

    pub fn polygon(&self) -> Result<Polygon4, GeometryError> {
        Polygon4::from_rotated_rectangle(&self.rect, self.facing)
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub player: Body,
    /// Remaining targets, in spawn order
    pub targets: Vec<Body>,
    /// Static walls
    pub obstacles: Vec<LineSegment>,
    /// Time left in the current attack window (0 when closed)
    #[serde(default)]
    pub attack_remaining_ms: f64,
    /// Simulated time since the world was created
    #[serde(default)]
    pub elapsed_ms: f64,
    /// Targets defeated so far
    #[serde(default)]
    pub defeated: u32,
}

impl World {
    pub fn new(player: Body, obstacles: Vec<LineSegment>, targets: Vec<Body>) -> Self {
        Self {
            player,
            targets,
            obstacles,
            attack_remaining_ms: 0.0,
            elapsed_ms: 0.0,
            defeated: 0,
        }
    }

    #[inline]
    pub fn is_attacking(&self) -> bool {
        self.attack_remaining_ms > 0.0
    }

    /// True once every target has been defeated
    pub fn is_cleared(&self) -> bool {
        self.targets.is_empty()
    }
}
