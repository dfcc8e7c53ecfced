// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion errors.

use kurbo::{Point, Rect};
use thiserror::Error;

/// Returned by [`Quadtree::insert`](crate::Quadtree::insert) when the item's
/// point lies outside the tree's fixed bound.
///
/// The tree is left unchanged. Callers can drop the item or rebuild a tree
/// over a larger bound.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[error("point {point:?} is outside the quadtree bound {bound:?}")]
pub struct OutOfBounds {
    /// The rejected point.
    pub point: Point,
    /// The tree's bound at the time of the insert.
    pub bound: Rect,
}
