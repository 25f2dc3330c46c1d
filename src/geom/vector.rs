//! Vector and point algebra
//!
//! `Vector` is a free displacement and `Point` a position in the plane. Keeping
//! them apart lets the operators say what they mean: `Point - Point` is a
//! `Vector`, `Point + Vector` is a `Point`, and two points cannot be added.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::GeometryError;
use crate::consts::EPSILON;

/// A free 2D displacement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

/// Split of a vector into the part along an axis and the part across it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthogonalSplit {
    /// Component parallel to the axis
    pub projection: Vector,
    /// Component orthogonal to the axis
    pub rejection: Vector,
}

impl Vector {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Vector of length `r` at `angle` radians from the +x axis
    pub fn from_polar(r: f64, angle: f64) -> Self {
        Self::new(r * angle.cos(), r * angle.sin())
    }

    /// Component-wise equality within `EPSILON`
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.dx - other.dx).abs() < EPSILON && (self.dy - other.dy).abs() < EPSILON
    }

    #[inline]
    pub fn scale(self, k: f64) -> Self {
        Self::new(k * self.dx, k * self.dy)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// True if the magnitude is strictly below `bound` (no square root taken)
    #[inline]
    pub fn is_strictly_bounded(self, bound: f64) -> bool {
        self.magnitude_squared() < bound * bound
    }

    /// Unit vector with the same direction
    ///
    /// The zero vector has no direction and yields `GeometryError::DegenerateVector`.
    pub fn normalize(self) -> Result<Self, GeometryError> {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            Ok(self.scale(1.0 / magnitude))
        } else {
            Err(GeometryError::DegenerateVector { op: "normalize" })
        }
    }

    /// Cosine of the angle between two vectors
    pub fn similarity(self, other: Self) -> Result<f64, GeometryError> {
        let denominator = self.magnitude() * other.magnitude();
        if denominator > 0.0 {
            Ok(self.dot(other) / denominator)
        } else {
            Err(GeometryError::DegenerateVector { op: "similarity" })
        }
    }

    /// Unsigned angle between two vectors, in `[0, π]`
    pub fn angle(self, other: Self) -> Result<f64, GeometryError> {
        self.similarity(other)
            .map_err(|_| GeometryError::DegenerateVector { op: "angle" })
            // Drift from repeated rotation can push the cosine just past ±1
            .map(|cos| cos.clamp(-1.0, 1.0).acos())
    }

    /// Exact 90° counter-clockwise rotation
    #[inline]
    pub fn rot90(self) -> Self {
        DVec2::from(self).perp().into()
    }

    /// Counter-clockwise rotation by `angle` radians
    pub fn rot_by(self, angle: f64) -> Self {
        DVec2::from_angle(angle).rotate(self.into()).into()
    }

    /// Split `self` along and across the axis `unit_axis`
    ///
    /// `unit_axis` must already be normalized; the result is meaningless otherwise.
    pub fn decompose(self, unit_axis: Self) -> OrthogonalSplit {
        let v = DVec2::from(self);
        let axis = DVec2::from(unit_axis);
        OrthogonalSplit {
            projection: v.project_onto_normalized(axis).into(),
            rejection: v.reject_from_normalized(axis).into(),
        }
    }

    /// 2D cross product (signed area of the spanned parallelogram)
    #[inline]
    pub fn determinant(self, other: Self) -> f64 {
        DVec2::from(self).perp_dot(other.into())
    }

    #[inline]
    pub fn is_parallel(self, other: Self) -> bool {
        self.determinant(other).abs() < EPSILON
    }

    #[inline]
    pub fn is_orthogonal(self, other: Self) -> bool {
        self.dot(other).abs() < EPSILON
    }
}

impl Add for Vector {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Neg for Vector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    #[inline]
    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    #[inline]
    fn mul(self, v: Vector) -> Vector {
        v.scale(self)
    }
}

/// Summing no vectors gives `Vector::ZERO`
impl Sum for Vector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Vector> for Vector {
    fn sum<I: Iterator<Item = &'a Vector>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<DVec2> for Vector {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for DVec2 {
    #[inline]
    fn from(v: Vector) -> Self {
        DVec2::new(v.dx, v.dy)
    }
}

/// A position in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        (self - other).approx_eq(Vector::ZERO)
    }
}

impl Add<Vector> for Point {
    type Output = Self;

    #[inline]
    fn add(self, v: Vector) -> Self {
        Self::new(self.x + v.dx, self.y + v.dy)
    }
}

impl AddAssign<Vector> for Point {
    #[inline]
    fn add_assign(&mut self, v: Vector) {
        *self = *self + v;
    }
}

impl Sub<Vector> for Point {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vector) -> Self {
        Self::new(self.x - v.dx, self.y - v.dy)
    }
}

impl Sub for Point {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Self) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl From<DVec2> for Point {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    #[inline]
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// An actor's pose: position plus facing (not necessarily unit length)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectedPoint {
    pub point: Point,
    pub direction: Vector,
}

impl DirectedPoint {
    #[inline]
    pub const fn new(point: Point, direction: Vector) -> Self {
        Self { point, direction }
    }
}
