//! Minimal enclosing rectangles over point sets
//!
//! Spans are inclusive: a point occupies one coordinate cell, so the
//! enclosing rectangle of a single point is 1x1 and every result contains
//! all of its input points under [`RectLike::contains`].

use crate::error::GeometryError;
use crate::geometry::point::PointLike;
use crate::geometry::rect::{Rect, RectLike};

/// Computes the smallest rectangle containing every point in `points`
///
/// The result is independent of the order of the input points.
///
/// # Errors
/// Returns [`GeometryError::EmptyPointSet`] if `points` is empty; there is
/// no rectangle whose extrema could be taken over no elements.
pub fn enclose_points<P: PointLike>(points: &[P]) -> Result<Rect, GeometryError> {
    let Some(first) = points.first() else {
        return Err(GeometryError::EmptyPointSet);
    };

    let mut min_x = first.x();
    let mut max_x = first.x();
    let mut min_y = first.y();
    let mut max_y = first.y();

    for point in &points[1..] {
        min_x = min_x.min(point.x());
        max_x = max_x.max(point.x());
        min_y = min_y.min(point.y());
        max_y = max_y.max(point.y());
    }

    Ok(Rect::from_inclusive_span(min_x, min_y, max_x, max_y))
}

/// Computes the smallest rectangle containing the points that fall inside
/// `clip`
///
/// Points outside `clip` are discarded before the extrema are taken.
/// Returns None when no point survives the filter; that is an expected
/// outcome, not an error. A non-None result lies inside `clip` by
/// construction, since every surviving point does.
pub fn enclose_points_clipped<P, R>(points: &[P], clip: &R) -> Option<Rect>
where
    P: PointLike,
    R: RectLike + ?Sized,
{
    let mut extents: Option<(i32, i32, i32, i32)> = None;

    for point in points {
        if !clip.contains(point) {
            continue;
        }
        let (x, y) = (point.x(), point.y());
        extents = Some(match extents {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    extents.map(|(min_x, min_y, max_x, max_y)| {
        Rect::from_inclusive_span(min_x, min_y, max_x, max_y)
    })
}
