//! 2D integer points
//!
//! Two variants with the same coordinate model but different mutability
//! contracts: [`Point`] is fixed at construction, [`PointMut`] can be
//! reassigned freely. Everything that only needs to read coordinates goes
//! through [`PointLike`] and accepts either one.

use crate::geometry::rect::RectLike;

/// Read-only access to a 2D integer coordinate
pub trait PointLike {
    /// The x coordinate of the point
    fn x(&self) -> i32;

    /// The y coordinate of the point
    fn y(&self) -> i32;

    /// Returns true if the point resides inside `rect`
    ///
    /// The left and top edges count as inside, the right and bottom edges
    /// do not. An empty rectangle contains no points.
    fn in_rect<R: RectLike + ?Sized>(&self, rect: &R) -> bool {
        rect.contains(self)
    }
}

/// An immutable 2D point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a point with fixed coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl PointLike for Point {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}

/// A 2D point whose coordinates can be reassigned after construction
///
/// Not internally synchronized; concurrent mutation of a shared instance
/// must be serialized by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointMut {
    pub x: i32,
    pub y: i32,
}

impl PointMut {
    /// Creates a point with the given initial coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl PointLike for PointMut {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}

impl From<PointMut> for Point {
    fn from(point: PointMut) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<Point> for PointMut {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

// Equality is component-wise on the coordinate surface, so it also holds
// across the two variants.
impl PartialEq<PointMut> for Point {
    fn eq(&self, other: &PointMut) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl PartialEq<Point> for PointMut {
    fn eq(&self, other: &Point) -> bool {
        self.x == other.x() && self.y == other.y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect::Rect;

    #[test]
    fn point_accessors() {
        let point = Point::new(3, -7);
        assert_eq!(point.x(), 3);
        assert_eq!(point.y(), -7);
    }

    #[test]
    fn point_equality_is_component_wise() {
        assert_eq!(Point::new(1, 2), Point::new(1, 2));
        assert_ne!(Point::new(1, 2), Point::new(2, 1));
    }

    #[test]
    fn equality_across_variants() {
        let fixed = Point::new(4, 5);
        let mut movable = PointMut::new(4, 5);
        assert_eq!(fixed, movable);
        assert_eq!(movable, fixed);

        movable.x = 9;
        assert_ne!(fixed, movable);
    }

    #[test]
    fn conversions_round_trip() {
        let fixed = Point::new(-2, 11);
        let movable: PointMut = fixed.into();
        assert_eq!(Point::from(movable), fixed);
    }

    #[test]
    fn mutable_point_reassignment() {
        let mut point = PointMut::new(0, 0);
        point.x = 12;
        point.y = -3;
        assert_eq!(point, PointMut::new(12, -3));
    }

    #[test]
    fn in_rect_boundaries() {
        let rect = Rect::new(10, 10, 20, 20).unwrap();
        assert!(Point::new(15, 15).in_rect(&rect)); // inside
        assert!(Point::new(10, 10).in_rect(&rect)); // top-left corner
        assert!(!Point::new(30, 30).in_rect(&rect)); // right/bottom edge excluded
        assert!(!Point::new(29, 30).in_rect(&rect));
        assert!(!Point::new(5, 5).in_rect(&rect)); // outside left-top
    }

    #[test]
    fn empty_rect_contains_no_points() {
        let rect = Rect::new(10, 10, 0, 20).unwrap();
        assert!(!Point::new(10, 10).in_rect(&rect)); // not even its own origin
        assert!(!Point::new(10, 15).in_rect(&rect));
    }

    #[test]
    fn mutable_point_in_rect() {
        let rect = Rect::new(0, 0, 4, 4).unwrap();
        assert!(PointMut::new(3, 3).in_rect(&rect));
        assert!(!PointMut::new(4, 3).in_rect(&rect));
    }
}
