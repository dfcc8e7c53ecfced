// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a 2D point quadtree over a fixed rectangle.
//!
//! - Insert items that know their location (see [`Located`]) into a tree
//!   covering a fixed bound.
//! - Find the nearest item to any point, or the `k` nearest, optionally
//!   limited by a predicate and a maximum distance.
//! - Collect every item inside a rectangle, edges included.
//!
//! Every node owns one quadrant of its parent's rectangle. Leaves hold a single
//! item; points closer than the tree's [threshold](Quadtree::threshold) are
//! treated as coincident, so clusters and exact duplicates stop splitting
//! instead of growing the tree without bound.
//!
//! Geometry uses [`kurbo`] types. Nodes live in a flat arena indexed by
//! position, and all queries share one pruned depth-first traversal driven
//! by an explicit stack.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_quadtree::Quadtree;
//!
//! let mut tree = Quadtree::new(Rect::new(0.0, 0.0, 1.0, 1.0));
//! tree.insert(Point::new(0.1, 0.1)).unwrap();
//! tree.insert(Point::new(0.9, 0.9)).unwrap();
//!
//! assert_eq!(tree.find(Point::new(0.0, 0.0)), Some(&Point::new(0.1, 0.1)));
//! assert_eq!(tree.in_bound(Rect::new(0.0, 0.0, 0.5, 0.5)).len(), 1);
//!
//! // Points outside the bound are rejected.
//! assert!(tree.insert(Point::new(2.0, 0.5)).is_err());
//! ```
//!
//! Items can carry data alongside their point, and queries can filter on it:
//!
//! ```rust
//! use kurbo::Point;
//! use understory_quadtree::Quadtree;
//!
//! let tree: Quadtree<(Point, &str)> = [
//!     (Point::new(0.0, 0.0), "cafe"),
//!     (Point::new(1.0, 0.0), "bank"),
//!     (Point::new(3.0, 4.0), "cafe"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let cafes =
//!     tree.find_k_nearest_matching(Point::new(1.0, 0.0), 5, |item| item.1 == "cafe", None);
//! assert_eq!(cafes.len(), 2);
//! assert_eq!(cafes[0].0, Point::new(0.0, 0.0));
//! ```
//!
//! ### Float semantics
//!
//! Tree bounds must be finite. A point with a NaN or infinite coordinate is
//! never inside a bound, so inserting one fails with [`OutOfBounds`].
//! Distances are compared squared; the values returned by [`Quadtree::find_k_nearest_with_distances`] are Euclidean.

#![no_std]

extern crate alloc;

mod arena;
pub mod error;
mod nearest;
mod quadrant;
mod range;
pub mod tree;
pub mod types;
mod visit;

pub use error::OutOfBounds;
pub use tree::Quadtree;
pub use types::{Located, bounding_rect, contains_point, overlaps};
