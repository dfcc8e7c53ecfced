// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest and k-nearest visitors.

use alloc::collections::BinaryHeap;
use alloc::vec::Vec;
use core::cmp::Ordering;
use kurbo::{Point, Rect};

use crate::types::{Entry, square_around};
use crate::visit::Visitor;

/// Single best match. The region is the square around the target whose
/// half-size is the best distance so far.
pub(crate) struct Nearest<'a, I, F> {
    target: Point,
    filter: F,
    region: Rect,
    best: Option<&'a Entry<I>>,
    best_dist_sq: f64,
}

impl<'a, I, F> Nearest<'a, I, F>
where
    F: FnMut(&I) -> bool,
{
    pub(crate) fn new(target: Point, filter: F, bound: Rect) -> Self {
        Self {
            target,
            filter,
            region: bound,
            best: None,
            best_dist_sq: f64::INFINITY,
        }
    }

    pub(crate) fn into_best(self) -> Option<&'a I> {
        self.best.map(|e| &e.item)
    }
}

impl<'a, I, F> Visitor<'a, I> for Nearest<'a, I, F>
where
    F: FnMut(&I) -> bool,
{
    fn region(&self) -> Rect {
        self.region
    }

    fn target(&self) -> Option<Point> {
        Some(self.target)
    }

    fn visit(&mut self, entry: &'a Entry<I>) {
        let d = entry.point.distance_squared(self.target);
        if d >= self.best_dist_sq || !(self.filter)(&entry.item) {
            return;
        }
        self.best_dist_sq = d;
        self.best = Some(entry);
        self.region = square_around(self.target, entry.point.distance(self.target));
    }
}

/// A candidate ranked by squared distance; the heap keeps the farthest on top.
struct Ranked<T> {
    dist_sq: f64,
    value: T,
}

impl<T> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Ranked<T> {}

impl<T> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist_sq.total_cmp(&other.dist_sq)
    }
}

/// Heap slots reserved up front; a huge `k` grows on demand instead.
const PREALLOC_LIMIT: usize = 256;

/// Keeps the `k` closest candidates offered so far.
///
/// Until `k` candidates have been seen every offer is kept; after that an
/// offer replaces the current worst only if it is strictly closer.
pub(crate) struct TopK<T> {
    k: usize,
    heap: BinaryHeap<Ranked<T>>,
}

impl<T> TopK<T> {
    pub(crate) fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k.min(PREALLOC_LIMIT)),
        }
    }

    pub(crate) fn is_full(&self) -> bool {
        self.heap.len() >= self.k
    }

    /// Squared distance and value of the worst kept candidate.
    pub(crate) fn worst(&self) -> Option<(f64, &T)> {
        self.heap.peek().map(|r| (r.dist_sq, &r.value))
    }

    /// Returns true if the candidate was kept.
    pub(crate) fn offer(&mut self, dist_sq: f64, value: T) -> bool {
        if !self.is_full() {
            self.heap.push(Ranked { dist_sq, value });
            return true;
        }
        if let Some(mut top) = self.heap.peek_mut()
            && dist_sq < top.dist_sq
        {
            *top = Ranked { dist_sq, value };
            return true;
        }
        false
    }

    /// Kept candidates, closest first.
    pub(crate) fn into_sorted_vec(self) -> Vec<(f64, T)> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|r| (r.dist_sq, r.value))
            .collect()
    }
}

/// Bounded k-nearest search. The region starts as the whole tree (or the
/// square of the distance limit) and only starts shrinking once `k`
/// candidates are held, tracking the worst of them.
pub(crate) struct KNearest<'a, I, F> {
    target: Point,
    filter: F,
    limit_sq: f64,
    region: Rect,
    top: TopK<&'a Entry<I>>,
}

impl<'a, I, F> KNearest<'a, I, F>
where
    F: FnMut(&I) -> bool,
{
    /// Returns `None` when `max_distance` is negative or NaN, since nothing
    /// can match.
    pub(crate) fn new(
        target: Point,
        k: usize,
        filter: F,
        max_distance: Option<f64>,
        bound: Rect,
    ) -> Option<Self> {
        let (limit_sq, region) = match max_distance {
            None => (f64::INFINITY, bound),
            Some(d) if d >= 0.0 => (d * d, square_around(target, d)),
            Some(_) => return None,
        };
        Some(Self {
            target,
            filter,
            limit_sq,
            region,
            top: TopK::new(k),
        })
    }

    /// Items with their distance from the target, closest first.
    pub(crate) fn into_sorted(self) -> Vec<(&'a I, f64)> {
        let target = self.target;
        self.top
            .into_sorted_vec()
            .into_iter()
            .map(|(_, e)| (&e.item, e.point.distance(target)))
            .collect()
    }
}

impl<'a, I, F> Visitor<'a, I> for KNearest<'a, I, F>
where
    F: FnMut(&I) -> bool,
{
    fn region(&self) -> Rect {
        self.region
    }

    fn target(&self) -> Option<Point> {
        Some(self.target)
    }

    fn visit(&mut self, entry: &'a Entry<I>) {
        let d = entry.point.distance_squared(self.target);
        if d > self.limit_sq {
            return;
        }
        if let Some((worst, _)) = self.top.worst()
            && self.top.is_full()
            && d >= worst
        {
            return;
        }
        if !(self.filter)(&entry.item) || !self.top.offer(d, entry) {
            return;
        }
        if self.top.is_full()
            && let Some((_, worst)) = self.top.worst()
        {
            self.region = square_around(self.target, worst.point.distance(self.target));
        }
    }
}
