//! Oriented rectangles and their four-vertex boundary

use serde::{Deserialize, Serialize};

use super::segment::LineSegment;
use super::vector::{Point, Vector};
use super::GeometryError;
use crate::consts::EPSILON;

/// Width is measured across the facing direction, height along it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Half the length of the diagonal
    pub fn half_diagonal(&self) -> f64 {
        0.5 * self.width.hypot(self.height)
    }
}

/// A rectangle with no orientation of its own; the facing is supplied where it is used
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub center: Point,
    pub size: Size,
}

impl Rectangle {
    pub const fn new(center: Point, size: Size) -> Self {
        Self { center, size }
    }

    pub const fn square(center: Point, side: f64) -> Self {
        Self::new(center, Size::square(side))
    }
}

/// Boundary of an oriented rectangle
///
/// `a` is forward-left, `b` forward-right, `c` backward-right and `d`
/// backward-left, so `a -> b` is the front edge and `a -> b -> c -> d -> a`
/// walks the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon4 {
    a: Point,
    b: Point,
    c: Point,
    d: Point,
}

impl Polygon4 {
    /// Place `rect` so its height runs along `face`
    ///
    /// Fails with `DegenerateVector` when `face` is the zero vector.
    pub fn from_rotated_rectangle(rect: &Rectangle, face: Vector) -> Result<Self, GeometryError> {
        let face = face
            .normalize()
            .map_err(|_| GeometryError::DegenerateVector { op: "orient a rectangle" })?;
        let left = face.rot_by(std::f64::consts::FRAC_PI_2);

        let half_forward = face * (rect.size.height / 2.0);
        let half_left = left * (rect.size.width / 2.0);

        let forward = rect.center + half_forward;
        let backward = rect.center - half_forward;

        Ok(Self {
            a: forward + half_left,
            b: forward - half_left,
            c: backward - half_left,
            d: backward + half_left,
        })
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    #[inline]
    pub fn c(&self) -> Point {
        self.c
    }

    #[inline]
    pub fn d(&self) -> Point {
        self.d
    }

    pub fn vertices(&self) -> [Point; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn center(&self) -> Point {
        self.a + (self.c - self.a) * 0.5
    }

    /// Boundary edges `(a,b)`, `(b,c)`, `(c,d)`, `(d,a)`
    ///
    /// A rectangle with zero width or height has coincident corners; those
    /// zero-length edges are skipped, the remaining edges still cover them.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> {
        [
            (self.a, self.b),
            (self.b, self.c),
            (self.c, self.d),
            (self.d, self.a),
        ]
        .into_iter()
        .filter_map(|(start, end)| LineSegment::new(start, end).ok())
    }

    /// True if any boundary edge intersects `segment`
    pub fn intersects_line_segment(&self, segment: &LineSegment) -> bool {
        self.edges().any(|edge| edge.intersects(segment))
    }

    /// True if `p` is inside or on the boundary
    pub fn contains_point(&self, p: Point) -> bool {
        let vertices = self.vertices();
        let sides = (0..4).map(|i| {
            let start = vertices[i];
            let end = vertices[(i + 1) % 4];
            (end - start).determinant(p - start)
        });
        let (mut any_left, mut any_right) = (false, false);
        for side in sides {
            any_left |= side > EPSILON;
            any_right |= side < -EPSILON;
        }
        !(any_left && any_right)
    }

    /// True if the two rectangles overlap (boundaries cross or one encloses the other)
    pub fn intersects_polygon(&self, other: &Polygon4) -> bool {
        self.edges()
            .any(|edge| other.intersects_line_segment(&edge))
            || self.contains_point(other.a)
            || other.contains_point(self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_facing(face: Vector) -> Polygon4 {
        let rect = Rectangle::new(Point::new(0.0, 0.0), Size::new(2.0, 4.0));
        Polygon4::from_rotated_rectangle(&rect, face).unwrap()
    }

    #[test]
    fn test_corners_facing_east() {
        let p = unit_box_facing(Vector::new(5.0, 0.0));
        assert!(p.a().approx_eq(Point::new(2.0, 1.0)));
        assert!(p.b().approx_eq(Point::new(2.0, -1.0)));
        assert!(p.c().approx_eq(Point::new(-2.0, -1.0)));
        assert!(p.d().approx_eq(Point::new(-2.0, 1.0)));
    }

    #[test]
    fn test_corners_facing_north() {
        let p = unit_box_facing(Vector::new(0.0, 1.0));
        // Left of north is west
        assert!(p.a().approx_eq(Point::new(-1.0, 2.0)));
        assert!(p.b().approx_eq(Point::new(1.0, 2.0)));
        assert!(p.center().approx_eq(Point::ORIGIN));
    }

    #[test]
    fn test_zero_face_is_error() {
        let rect = Rectangle::square(Point::ORIGIN, 1.0);
        assert!(Polygon4::from_rotated_rectangle(&rect, Vector::ZERO).is_err());
    }

    #[test]
    fn test_edges_form_closed_loop() {
        let p = unit_box_facing(Vector::new(1.0, 1.0));
        let edges: Vec<_> = p.edges().collect();
        assert_eq!(edges.len(), 4);
        for i in 0..4 {
            assert!(edges[i].end().approx_eq(edges[(i + 1) % 4].start()));
        }
        assert!((edges[0].length() - 2.0).abs() < EPSILON);
        assert!((edges[1].length() - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_rectangle_skips_zero_edges() {
        let rect = Rectangle::new(Point::ORIGIN, Size::new(0.0, 4.0));
        let p = Polygon4::from_rotated_rectangle(&rect, Vector::new(1.0, 0.0)).unwrap();
        assert_eq!(p.edges().count(), 2);
    }

    #[test]
    fn test_intersects_line_segment() {
        let p = unit_box_facing(Vector::new(1.0, 0.0));
        let through = LineSegment::new(Point::new(0.0, -5.0), Point::new(0.0, 5.0)).unwrap();
        let beside = LineSegment::new(Point::new(3.0, -5.0), Point::new(3.0, 5.0)).unwrap();
        let inside = LineSegment::new(Point::new(-0.5, 0.0), Point::new(0.5, 0.0)).unwrap();
        assert!(p.intersects_line_segment(&through));
        assert!(!p.intersects_line_segment(&beside));
        // Only the boundary is tested
        assert!(!p.intersects_line_segment(&inside));
    }

    #[test]
    fn test_contains_point() {
        let p = unit_box_facing(Vector::new(1.0, 1.0));
        assert!(p.contains_point(Point::ORIGIN));
        assert!(p.contains_point(p.c()));
        assert!(!p.contains_point(Point::new(3.0, -3.0)));
    }

    #[test]
    fn test_intersects_polygon() {
        let big = Polygon4::from_rotated_rectangle(
            &Rectangle::square(Point::ORIGIN, 10.0),
            Vector::new(1.0, 0.0),
        )
        .unwrap();
        let small = Polygon4::from_rotated_rectangle(
            &Rectangle::square(Point::new(1.0, 1.0), 1.0),
            Vector::new(1.0, 2.0),
        )
        .unwrap();
        let far = Polygon4::from_rotated_rectangle(
            &Rectangle::square(Point::new(20.0, 0.0), 1.0),
            Vector::new(1.0, 0.0),
        )
        .unwrap();
        assert!(big.intersects_polygon(&small));
        assert!(small.intersects_polygon(&big));
        assert!(!big.intersects_polygon(&far));
    }
}
