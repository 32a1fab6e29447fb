//! Typed 2D geometry for a native media layer
//!
//! This crate implements the geometry core consumed by windowing and
//! rendering code: integer points, axis-aligned rectangles with their
//! origin at the upper left, and the algorithms over them (containment,
//! intersection, segment clipping, union, and minimal enclosing
//! rectangles).
//!
//! Each value type comes in an immutable and a mutable variant. The
//! algorithms only require the read-only capability traits ([`PointLike`],
//! [`RectLike`]), so both variants run them identically, and [`RectLike`]
//! doubles as the surface that rectangle consumers accept.

pub mod error;
pub mod geometry;

pub use error::GeometryError;
pub use geometry::{
    enclose_points, enclose_points_clipped, Point, PointLike, PointMut, Rect, RectLike, RectMut,
};
