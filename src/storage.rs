// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::LinkedList;

/// A collection which can back a [`Stack`][Stack].
///
/// Implementors only need to agree on which end is the top: whatever
/// `storage_push` puts there is what `storage_pop` and `storage_top` see next.
///
/// [Stack]: struct.Stack.html
pub trait Storage<A> {
    /// Construct an empty collection, preallocating room for `capacity`
    /// elements if the collection knows how to.
    fn storage_new(capacity: usize) -> Self;

    /// Put a value on top.
    fn storage_push(&mut self, value: A);

    /// Take the value on top, if any.
    fn storage_pop(&mut self) -> Option<A>;

    /// The number of values held.
    fn storage_len(&self) -> usize;

    /// Borrow the value on top, if any.
    fn storage_top(&self) -> Option<&A>;

    /// Drop every value held.
    fn storage_clear(&mut self);
}

impl<A> Storage<A> for Vec<A> {
    fn storage_new(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    #[inline(always)]
    fn storage_push(&mut self, value: A) {
        self.push(value);
    }

    #[inline(always)]
    fn storage_pop(&mut self) -> Option<A> {
        self.pop()
    }

    #[inline(always)]
    fn storage_len(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn storage_top(&self) -> Option<&A> {
        self.last()
    }

    fn storage_clear(&mut self) {
        self.clear();
    }
}

// The head of the list is the top, so nothing ever walks the links.
impl<A> Storage<A> for LinkedList<A> {
    fn storage_new(_capacity: usize) -> Self {
        Self::new()
    }

    #[inline(always)]
    fn storage_push(&mut self, value: A) {
        self.push_front(value);
    }

    #[inline(always)]
    fn storage_pop(&mut self) -> Option<A> {
        self.pop_front()
    }

    #[inline(always)]
    fn storage_len(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn storage_top(&self) -> Option<&A> {
        self.front()
    }

    fn storage_clear(&mut self) {
        self.clear();
    }
}
