// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index-based node arena.
//!
//! Nodes are stored in a single `Vec` and refer to each other by [`NodeId`],
//! so growing the backing storage never invalidates a link. The first block is
//! whatever the tree was created with (bulk builds size it to the input).
//! After that each growth asks for at least half the previous block, never
//! less than [`MIN_BLOCK`], on top of `Vec`'s own amortized growth, so the
//! number of reallocations stays logarithmic in the node count.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

/// Smallest block reserved when the arena runs out of room.
pub(crate) const MIN_BLOCK: usize = 25;

/// Handle of a node in an [`Arena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    const fn get(self) -> usize {
        self.0
    }
}

pub(crate) struct Arena<T> {
    nodes: Vec<T>,
    block: usize,
}

impl<T> Arena<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            block: capacity,
        }
    }

    /// Store `node` and return its handle, reserving a new block first if the
    /// current one is exhausted.
    pub(crate) fn alloc(&mut self, node: T) -> NodeId {
        if self.nodes.len() == self.nodes.capacity() {
            self.block = (self.block / 2).max(MIN_BLOCK);
            tracing::trace!(
                block = self.block,
                nodes = self.nodes.len(),
                "arena exhausted, reserving next block"
            );
            self.nodes.reserve(self.block);
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        &self.nodes[id.get()]
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.nodes[id.get()]
    }
}

impl<T> core::fmt::Debug for Arena<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Arena")
            .field("nodes", &self.len())
            .field("capacity", &self.capacity())
            .field("block", &self.block)
            .finish_non_exhaustive()
    }
}
