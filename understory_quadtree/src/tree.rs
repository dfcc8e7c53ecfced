// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, insertion, queries.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::arena::{Arena, NodeId};
use crate::error::OutOfBounds;
use crate::nearest::{KNearest, Nearest};
use crate::quadrant::Quadrant;
use crate::range::InBound;
use crate::types::{Entry, Located, bounding_rect, contains_point};
use crate::visit::walk;

/// Default depth budget: points closer than `max(width, height) / 4096` are
/// coincident, which keeps random inputs at most about 12 levels deep.
const THRESHOLD_DIVISOR: f64 = 4096.0;

#[derive(Clone, Debug)]
pub(crate) enum Node<I> {
    Leaf(Entry<I>),
    Internal(Internal<I>),
}

#[derive(Clone, Debug)]
pub(crate) struct Internal<I> {
    pub(crate) children: [Option<NodeId>; 4],
    /// Entry kept in place by a coincident split. Its point lies inside this
    /// node's rectangle.
    pub(crate) resident: Option<Entry<I>>,
}

impl<I> Node<I> {
    /// Turn a leaf into an internal node with no children, handing back the
    /// leaf's entry. Internal nodes are left untouched.
    fn split(&mut self) -> Option<Entry<I>> {
        let empty = Self::Internal(Internal {
            children: [None; 4],
            resident: None,
        });
        match core::mem::replace(self, empty) {
            Self::Leaf(entry) => Some(entry),
            internal => {
                *self = internal;
                None
            }
        }
    }

    fn set_child(&mut self, quadrant: Quadrant, child: NodeId) {
        if let Self::Internal(node) = self {
            node.children[quadrant.index()] = Some(child);
        }
    }

    fn set_resident(&mut self, entry: Entry<I>) {
        if let Self::Internal(node) = self {
            node.resident = Some(entry);
        }
    }
}

/// A point quadtree over a fixed rectangle.
///
/// Items are anything implementing [`Located`]. The tree is built by
/// [`insert`](Self::insert) (or in bulk by [`from_items`](Self::from_items))
/// and then queried with [`find`](Self::find),
/// [`find_k_nearest`](Self::find_k_nearest) and [`in_bound`](Self::in_bound),
/// each of which has a `_matching` form taking a predicate.
///
/// Insertion needs `&mut self` and queries only `&self`, so any number of
/// threads can query a finished tree while none can insert into it.
pub struct Quadtree<I> {
    bound: Rect,
    threshold: f64,
    root: Option<NodeId>,
    arena: Arena<Node<I>>,
    len: usize,
}

impl<I> core::fmt::Debug for Quadtree<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Quadtree")
            .field("bound", &self.bound)
            .field("threshold", &self.threshold)
            .field("len", &self.len)
            .field("arena", &self.arena)
            .finish_non_exhaustive()
    }
}

impl<I: Located> FromIterator<I> for Quadtree<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::from_items(iter)
    }
}

impl<I: Located> Quadtree<I> {
    /// Create an empty tree over `bound`. Inserted points must lie within it.
    pub fn new(bound: Rect) -> Self {
        Self::with_capacity(bound, 0)
    }

    /// Create an empty tree over `bound` with room for `capacity` nodes
    /// before the arena has to grow.
    pub fn with_capacity(bound: Rect, capacity: usize) -> Self {
        debug_assert!(
            bound.x0 <= bound.x1 && bound.y0 <= bound.y1,
            "quadtree bound must have min <= max, got {bound:?}"
        );
        debug_assert!(bound.is_finite(), "quadtree bound must be finite, got {bound:?}");
        Self {
            bound,
            threshold: bound.width().max(bound.height()) / THRESHOLD_DIVISOR,
            root: None,
            arena: Arena::with_capacity(capacity),
            len: 0,
        }
    }

    /// Build a tree over the bounding rectangle of `items`.
    ///
    /// The arena is sized to the number of items up front, which makes this
    /// faster than [`new`](Self::new) followed by a loop of
    /// [`insert`](Self::insert). An empty input yields an empty tree over
    /// [`Rect::ZERO`]. Unlocated items, and items whose location has a NaN or
    /// infinite coordinate, are skipped.
    pub fn from_items<T: IntoIterator<Item = I>>(items: T) -> Self {
        let items: Vec<I> = items.into_iter().collect();
        let located = items
            .iter()
            .filter_map(|item| item.location())
            .filter(|p| p.is_finite());
        let bound = bounding_rect(located).unwrap_or(Rect::ZERO);
        tracing::debug!(items = items.len(), ?bound, "building quadtree from items");

        let mut tree = Self::with_capacity(bound, items.len());
        for item in items {
            if let Err(err) = tree.insert(item) {
                tracing::debug!(%err, "skipping item during bulk build");
            }
        }
        tree
    }

    /// The fixed rectangle this tree covers.
    pub fn bound(&self) -> Rect {
        self.bound
    }

    /// Distance under which two inserted points count as coincident.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Set the coincidence distance. Negative or NaN values become `0.0`.
    ///
    /// Meant to be tuned before the first insert. Smaller values let the tree
    /// go deeper around clustered points; larger values stop splitting sooner.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = if threshold >= 0.0 { threshold } else { 0.0 };
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no item has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes allocated in the arena.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Insert an item.
    ///
    /// Items without a location are ignored and return `Ok(())`. Items whose
    /// point is outside [`bound`](Self::bound) (edges count as inside), or has
    /// a NaN or infinite coordinate, are rejected with [`OutOfBounds`] and
    /// leave the tree unchanged.
    ///
    /// Points within [`threshold`](Self::threshold) of an already stored
    /// point are still stored separately; the earlier one stays on the node
    /// being split and the new one moves one level down, so duplicates cost
    /// one level each instead of splitting forever.
    pub fn insert(&mut self, item: I) -> Result<(), OutOfBounds> {
        let Some(point) = item.location() else {
            tracing::trace!("ignoring item without a location");
            return Ok(());
        };
        if !point.is_finite() || !contains_point(&self.bound, point) {
            return Err(OutOfBounds {
                point,
                bound: self.bound,
            });
        }

        let entry = Entry { point, item };
        self.len += 1;
        let Some(mut id) = self.root else {
            self.root = Some(self.arena.alloc(Node::Leaf(entry)));
            return Ok(());
        };

        let threshold_sq = self.threshold * self.threshold;
        let mut rect = self.bound;
        loop {
            match &self.arena[id] {
                Node::Internal(node) => {
                    let quadrant = Quadrant::of(&rect, point);
                    rect = quadrant.rect_in(&rect);
                    if let Some(child) = node.children[quadrant.index()] {
                        id = child;
                        continue;
                    }
                    let leaf = self.arena.alloc(Node::Leaf(entry));
                    self.arena[id].set_child(quadrant, leaf);
                    return Ok(());
                }
                Node::Leaf(existing) => {
                    // A rectangle too small to halve in f64 can't separate the pair either.
                    let coincident = existing.point.distance_squared(point) <= threshold_sq
                        || Quadrant::of(&rect, point).rect_in(&rect) == rect;
                    if let Some(old) = self.arena[id].split() {
                        if coincident {
                            self.arena[id].set_resident(old);
                        } else {
                            let quadrant = Quadrant::of(&rect, old.point);
                            let leaf = self.arena.alloc(Node::Leaf(old));
                            self.arena[id].set_child(quadrant, leaf);
                        }
                    }
                    // `id` is internal now; the next pass routes the new entry below it.
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn parts(&self) -> (&Arena<Node<I>>, Option<NodeId>, Rect) {
        (&self.arena, self.root, self.bound)
    }

    /// The stored item closest to `point`, or `None` if the tree is empty.
    ///
    /// Ties keep whichever item the traversal reached first.
    pub fn find(&self, point: Point) -> Option<&I> {
        self.find_matching(point, |_| true)
    }

    /// The stored item closest to `point` among those accepted by `filter`.
    pub fn find_matching<F>(&self, point: Point, filter: F) -> Option<&I>
    where
        F: FnMut(&I) -> bool,
    {
        let root = self.root?;
        let mut visitor = Nearest::new(point, filter, self.bound);
        walk(&self.arena, root, self.bound, &mut visitor);
        visitor.into_best()
    }

    /// Up to `k` stored items nearest to `point`, closest first.
    pub fn find_k_nearest(&self, point: Point, k: usize) -> Vec<&I> {
        self.find_k_nearest_matching(point, k, |_| true, None)
    }

    /// Up to `k` items accepted by `filter` and no farther than
    /// `max_distance` (when given) from `point`, closest first.
    ///
    /// A negative or NaN `max_distance` matches nothing.
    pub fn find_k_nearest_matching<F>(
        &self,
        point: Point,
        k: usize,
        filter: F,
        max_distance: Option<f64>,
    ) -> Vec<&I>
    where
        F: FnMut(&I) -> bool,
    {
        self.find_k_nearest_with_distances(point, k, filter, max_distance)
            .into_iter()
            .map(|(item, _)| item)
            .collect()
    }

    /// Like [`find_k_nearest_matching`](Self::find_k_nearest_matching), but
    /// also returns each item's distance from `point`.
    pub fn find_k_nearest_with_distances<F>(
        &self,
        point: Point,
        k: usize,
        filter: F,
        max_distance: Option<f64>,
    ) -> Vec<(&I, f64)>
    where
        F: FnMut(&I) -> bool,
    {
        let Some(root) = self.root else {
            return Vec::new();
        };
        if k == 0 {
            return Vec::new();
        }
        let Some(mut visitor) = KNearest::new(point, k, filter, max_distance, self.bound) else {
            return Vec::new();
        };
        walk(&self.arena, root, self.bound, &mut visitor);
        visitor.into_sorted()
    }

    /// All stored items whose point lies in `rect`, edges included.
    ///
    /// The order of the result is unspecified.
    pub fn in_bound(&self, rect: Rect) -> Vec<&I> {
        self.in_bound_matching(rect, |_| true)
    }

    /// All stored items in `rect` accepted by `filter`, in no particular order.
    pub fn in_bound_matching<F>(&self, rect: Rect, filter: F) -> Vec<&I>
    where
        F: FnMut(&I) -> bool,
    {
        let mut out = Vec::new();
        self.in_bound_into(rect, filter, &mut out);
        out
    }

    /// Like [`in_bound_matching`](Self::in_bound_matching), but writes into
    /// `buf` so its allocation can be reused across queries.
    ///
    /// `buf` is cleared first.
    pub fn in_bound_into<'a, F>(&'a self, rect: Rect, filter: F, buf: &mut Vec<&'a I>)
    where
        F: FnMut(&I) -> bool,
    {
        buf.clear();
        let Some(root) = self.root else {
            return;
        };
        let mut visitor = InBound::new(rect, filter, buf);
        walk(&self.arena, root, self.bound, &mut visitor);
    }
}
