// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant assignment shared by insertion and traversal.
//!
//! Both sides must agree on where a point on a midline goes, otherwise a
//! pruned search can skip the child that actually holds it. Points with
//! `x == cx` go east and points with `y == cy` go south, and each child
//! rectangle is closed so it still contains the midline points routed to it.

use kurbo::{Point, Rect};

/// One of the four children of a split rectangle.
///
/// The discriminant is the child slot index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Quadrant {
    /// `x < cx`, `y > cy`.
    NorthWest = 0,
    /// `x >= cx`, `y > cy`.
    NorthEast = 1,
    /// `x < cx`, `y <= cy`.
    SouthWest = 2,
    /// `x >= cx`, `y <= cy`.
    SouthEast = 3,
}

impl Quadrant {
    pub(crate) const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// The quadrant of `rect` that `point` is routed to.
    #[inline]
    pub(crate) fn of(rect: &Rect, point: Point) -> Self {
        let c = rect.center();
        match (point.x >= c.x, point.y <= c.y) {
            (false, false) => Self::NorthWest,
            (true, false) => Self::NorthEast,
            (false, true) => Self::SouthWest,
            (true, true) => Self::SouthEast,
        }
    }

    /// Child slot index.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// The closed sub-rectangle of `rect` covered by this quadrant.
    #[inline]
    pub(crate) fn rect_in(self, rect: &Rect) -> Rect {
        let c = rect.center();
        match self {
            Self::NorthWest => Rect::new(rect.x0, c.y, c.x, rect.y1),
            Self::NorthEast => Rect::new(c.x, c.y, rect.x1, rect.y1),
            Self::SouthWest => Rect::new(rect.x0, rect.y0, c.x, c.y),
            Self::SouthEast => Rect::new(c.x, rect.y0, rect.x1, c.y),
        }
    }

    /// All quadrants, starting at `self` and wrapping around.
    #[inline]
    pub(crate) fn cycle(self) -> [Self; 4] {
        let i = self.index();
        [
            Self::ALL[i],
            Self::ALL[(i + 1) % 4],
            Self::ALL[(i + 2) % 4],
            Self::ALL[(i + 3) % 4],
        ]
    }
}
