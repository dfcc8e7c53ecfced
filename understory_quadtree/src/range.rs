// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle query visitor.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::types::{Entry, contains_point};
use crate::visit::Visitor;

/// Collects every accepted item whose point lies in a fixed rectangle.
pub(crate) struct InBound<'a, 'b, I, F> {
    rect: Rect,
    filter: F,
    out: &'b mut Vec<&'a I>,
}

impl<'a, 'b, I, F> InBound<'a, 'b, I, F>
where
    F: FnMut(&I) -> bool,
{
    pub(crate) fn new(rect: Rect, filter: F, out: &'b mut Vec<&'a I>) -> Self {
        Self { rect, filter, out }
    }
}

impl<'a, I, F> Visitor<'a, I> for InBound<'a, '_, I, F>
where
    F: FnMut(&I) -> bool,
{
    fn region(&self) -> Rect {
        self.rect
    }

    fn visit(&mut self, entry: &'a Entry<I>) {
        if contains_point(&self.rect, entry.point) && (self.filter)(&entry.item) {
            self.out.push(&entry.item);
        }
    }
}
