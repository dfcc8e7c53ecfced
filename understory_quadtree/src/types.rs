// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item contract and inclusive rectangle helpers.
//!
//! Kurbo's [`Rect::contains`] treats the right and bottom edges as outside.
//! The quadtree needs closed rectangles everywhere (a point on the far edge of
//! the tree bound is a valid insert, and a range query includes its boundary),
//! so the predicates used for insertion and pruning live here instead.

use kurbo::{Point, Rect};

/// A value that can report the point it is stored at.
///
/// This is the payload contract of [`Quadtree`](crate::Quadtree): any type that
/// can produce a [`Point`] can be indexed, so callers can attach arbitrary data
/// to a location. Returning `None` marks the value as unlocated, and
/// [`Quadtree::insert`](crate::Quadtree::insert) ignores it.
///
/// ```
/// use kurbo::Point;
/// use understory_quadtree::Located;
///
/// struct Stop {
///     name: &'static str,
///     at: Point,
/// }
///
/// impl Located for Stop {
///     fn location(&self) -> Option<Point> {
///         Some(self.at)
///     }
/// }
///
/// let stop = Stop { name: "depot", at: Point::new(3.0, 4.0) };
/// assert_eq!(stop.location(), Some(Point::new(3.0, 4.0)));
/// # let _ = stop.name;
/// ```
pub trait Located {
    /// The point this value lives at, if any.
    fn location(&self) -> Option<Point>;
}

impl Located for Point {
    #[inline]
    fn location(&self) -> Option<Point> {
        Some(*self)
    }
}

impl<T: Located + ?Sized> Located for &T {
    #[inline]
    fn location(&self) -> Option<Point> {
        (**self).location()
    }
}

impl<T: Located> Located for Option<T> {
    #[inline]
    fn location(&self) -> Option<Point> {
        self.as_ref().and_then(Located::location)
    }
}

/// A point paired with arbitrary data.
impl<T> Located for (Point, T) {
    #[inline]
    fn location(&self) -> Option<Point> {
        Some(self.0)
    }
}

/// An item together with the point it was inserted at.
///
/// The location is read once on insert so queries never call back into
/// [`Located`].
#[derive(Clone, Debug)]
pub(crate) struct Entry<I> {
    pub(crate) point: Point,
    pub(crate) item: I,
}

/// Whether `rect` contains `point`, edges included.
///
/// NaN coordinates are never contained.
#[inline]
pub fn contains_point(rect: &Rect, point: Point) -> bool {
    rect.x0 <= point.x && point.x <= rect.x1 && rect.y0 <= point.y && point.y <= rect.y1
}

/// Whether two rectangles share at least one point, touching edges included.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Smallest rectangle containing every point, or `None` for an empty input.
pub fn bounding_rect<P: IntoIterator<Item = Point>>(points: P) -> Option<Rect> {
    let mut it = points.into_iter();
    let first = it.next()?;
    Some(it.fold(Rect::from_points(first, first), |acc, p| acc.union_pt(p)))
}

/// Square of half-size `half` centered on `center`.
#[inline]
pub(crate) fn square_around(center: Point, half: f64) -> Rect {
    Rect::new(
        center.x - half,
        center.y - half,
        center.x + half,
        center.y + half,
    )
}
