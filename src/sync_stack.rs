// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Error, Formatter};
use std::iter::FromIterator;

use parking_lot::Mutex;
use static_assertions::assert_impl_all;
use tracing::trace;

use crate::error::EmptyStackError;
use crate::stack::Stack;

/// A [`Stack`][Stack] which can be shared between threads.
///
/// Every operation takes the lock for as long as it runs. In particular,
/// [`length()`][length] and [`is_empty()`][is_empty] drain and restore the
/// stack while holding it, so no other thread can catch the stack half
/// drained.
///
/// This is only available if you've enabled the `sync` feature flag.
///
/// # Example
///
/// ```rust
/// # use lifostack::SyncStack;
/// # use std::sync::Arc;
/// let stack = Arc::new(SyncStack::new());
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let stack = stack.clone();
///         std::thread::spawn(move || stack.push(i))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(4, stack.length());
/// ```
///
/// [Stack]: struct.Stack.html
/// [length]: #method.length
/// [is_empty]: #method.is_empty
pub struct SyncStack<A> {
    inner: Mutex<Stack<A>>,
}

assert_impl_all!(SyncStack<u8>: Send, Sync);

impl<A> SyncStack<A> {
    /// Construct an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::from(Stack::new())
    }

    /// Put an item on top of the stack.
    pub fn push(&self, item: A) {
        self.inner.lock().push(item);
    }

    /// Remove the item on top of the stack and return it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStackError`][EmptyStackError] if there's nothing to pop.
    ///
    /// [EmptyStackError]: struct.EmptyStackError.html
    pub fn pop(&self) -> Result<A, EmptyStackError> {
        self.inner.lock().pop()
    }

    /// Test whether the stack is empty by trying to pop from it, under the
    /// lock.
    pub fn is_empty(&self) -> bool {
        let mut stack = self.inner.lock();
        let is_empty = stack.is_empty();
        trace!(is_empty, "probed shared stack");
        is_empty
    }

    /// Count the items on the stack by draining and restoring it, under the
    /// lock.
    pub fn length(&self) -> usize {
        self.inner.lock().length()
    }

    /// Get the number of items on the stack, straight from the backing
    /// collection.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Discard every item on the stack.
    pub fn empty(&self) {
        self.inner.lock().empty();
    }

    /// Pop items off the stack one at a time until it's empty.
    ///
    /// The lock is taken separately for each item, so pushes from other
    /// threads can land in between and will be yielded in turn. Don't rely on
    /// any particular interleaving.
    pub fn drain(&self) -> SyncDrain<'_, A> {
        SyncDrain { stack: self }
    }

    /// Take the stack out of its lock.
    pub fn into_inner(self) -> Stack<A> {
        self.inner.into_inner()
    }
}

impl<A> Default for SyncStack<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> From<Stack<A>> for SyncStack<A> {
    fn from(stack: Stack<A>) -> Self {
        Self {
            inner: Mutex::new(stack),
        }
    }
}

impl<A> FromIterator<A> for SyncStack<A> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self::from(iter.into_iter().collect::<Stack<A>>())
    }
}

impl<A> Debug for SyncStack<A>
where
    A: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self.inner.try_lock() {
            Some(stack) => Debug::fmt(&*stack, f),
            None => write!(f, "<Stack (locked)>"),
        }
    }
}

/// A destructive iterator over a [`SyncStack`][SyncStack].
///
/// [SyncStack]: struct.SyncStack.html
pub struct SyncDrain<'a, A> {
    stack: &'a SyncStack<A>,
}

impl<'a, A> Iterator for SyncDrain<'a, A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().ok()
    }
}

impl<'a, A> Debug for SyncDrain<'a, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "SyncDrain")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn push_and_pop_a_bit_on_one_thread() {
        let stack: SyncStack<usize> = SyncStack::new();
        for i in 0..1024 {
            stack.push(i);
        }
        assert_eq!(1024, stack.length());
        assert_eq!(1024, stack.len());
        assert!(!stack.is_empty());
        for i in 0..1024 {
            assert_eq!(Ok(1023 - i), stack.pop());
        }
        assert_eq!(Err(EmptyStackError), stack.pop());
        assert!(stack.is_empty());
        assert_eq!(0, stack.len());
    }

    #[test]
    fn round_trips_through_the_lock() {
        let stack: SyncStack<_> = (0..8).collect();
        assert_eq!(8, stack.len());
        let mut inner = stack.into_inner();
        assert_eq!(8, inner.length());
        assert_eq!(Ok(7), inner.pop());
        let stack = SyncStack::from(inner);
        assert_eq!(7, stack.len());
        assert_eq!(Ok(6), stack.pop());
    }

    #[test]
    fn drain_and_empty() {
        let stack: SyncStack<_> = vec!["dog", "cat", "fish"].into_iter().collect();
        assert_eq!(
            vec!["fish", "cat", "dog"],
            stack.drain().collect::<Vec<_>>()
        );
        stack.push("a");
        stack.push("b");
        stack.empty();
        assert_eq!(0, stack.length());
        assert_eq!(Err(EmptyStackError), stack.pop());
    }

    #[test]
    fn debug_reports_the_top() {
        let stack = SyncStack::new();
        stack.push(5);
        assert_eq!("<Stack tail=5 length=1>", format!("{:?}", stack));
    }

    #[test]
    fn counting_never_sees_a_half_drained_stack() {
        const PER_THREAD: usize = 512;
        let stack = Arc::new(SyncStack::new());
        let writers: Vec<_> = (0..4usize)
            .map(|t| {
                let stack = stack.clone();
                std::thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        stack.push((t, i));
                    }
                })
            })
            .collect();
        let reader = std::thread::spawn({
            let stack = stack.clone();
            move || {
                let mut last = 0;
                for _ in 0..256 {
                    let length = stack.length();
                    assert!(length >= last);
                    last = length;
                    assert!(length == 0 || !stack.is_empty());
                }
            }
        });
        for writer in writers {
            writer.join().unwrap();
        }
        reader.join().unwrap();

        let mut stack = Arc::try_unwrap(stack).ok().unwrap().into_inner();
        assert_eq!(4 * PER_THREAD, stack.length());
        // Each writer's own items still come out in reverse push order.
        let mut next = [PER_THREAD; 4];
        for (t, i) in stack.drain() {
            assert_eq!(next[t] - 1, i);
            next[t] = i;
        }
        assert_eq!([0; 4], next);
    }
}
