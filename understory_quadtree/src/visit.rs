// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pruned traversal shared by every query.
//!
//! A query supplies a [`Visitor`]: the region it still cares about, an
//! optional target point to steer the descent, and a callback for each
//! stored entry. [`walk`] skips any node whose rectangle does not touch the
//! region as it stands when the node is popped, so a visitor that shrinks its
//! region prunes the rest of the search immediately.
//!
//! Skipping is sound because every stored point lies inside the rectangle of
//! each node on its path: insertion and traversal route through the same
//! [`Quadrant`] rule, and child rectangles are closed.

use alloc::vec;
use kurbo::{Point, Rect};

use crate::arena::{Arena, NodeId};
use crate::quadrant::Quadrant;
use crate::tree::Node;
use crate::types::{Entry, overlaps};

pub(crate) trait Visitor<'a, I> {
    /// Current region of interest. Nodes outside it are skipped.
    fn region(&self) -> Rect;

    /// Point whose quadrant is explored first, if the query has one.
    fn target(&self) -> Option<Point> {
        None
    }

    fn visit(&mut self, entry: &'a Entry<I>);
}

/// Depth-first walk from `root`, whose rectangle is `bound`.
pub(crate) fn walk<'a, I, V>(
    arena: &'a Arena<Node<I>>,
    root: NodeId,
    bound: Rect,
    visitor: &mut V,
) where
    V: Visitor<'a, I>,
{
    let mut stack = vec![(root, bound)];
    while let Some((id, rect)) = stack.pop() {
        if !overlaps(&rect, &visitor.region()) {
            continue;
        }
        let node = match &arena[id] {
            Node::Leaf(entry) => {
                visitor.visit(entry);
                continue;
            }
            Node::Internal(node) => node,
        };
        if let Some(entry) = &node.resident {
            visitor.visit(entry);
        }

        let first = visitor
            .target()
            .map_or(Quadrant::NorthWest, |p| Quadrant::of(&rect, p));
        // Pushed in reverse so `first` is popped next.
        for quadrant in first.cycle().into_iter().rev() {
            if let Some(child) = node.children[quadrant.index()] {
                stack.push((child, quadrant.rect_in(&rect)));
            }
        }
    }
}
