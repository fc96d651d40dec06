// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Display, Error, Formatter};
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;

use tracing::trace;

use crate::error::EmptyStackError;
use crate::storage::Storage;

/// A last in, first out stack.
///
/// Everything goes on and comes off the top. The derived queries
/// [`is_empty()`][is_empty] and [`length()`][length] are written purely in
/// terms of [`push()`][push] and [`pop()`][pop], and they put everything
/// back exactly where they found it before they return.
///
/// The backing collection defaults to a `Vec`, but anything implementing
/// [`Storage`][Storage] will do.
///
/// # Example
///
/// ```rust
/// # use lifostack::Stack;
/// let mut stack = Stack::new();
/// stack.push("dog");
/// stack.push("cat");
/// stack.push("fish");
/// assert_eq!(3, stack.length());
/// assert_eq!(Ok("fish"), stack.pop());
/// assert_eq!(Ok("cat"), stack.pop());
/// assert_eq!(Ok("dog"), stack.pop());
/// assert!(stack.is_empty());
/// assert!(stack.pop().is_err());
/// ```
///
/// [push]: #method.push
/// [pop]: #method.pop
/// [is_empty]: #method.is_empty
/// [length]: #method.length
/// [Storage]: trait.Storage.html
pub struct Stack<A, S = Vec<A>> {
    storage: S,
    kind: PhantomData<A>,
}

impl<A> Stack<A> {
    /// Construct an empty `Vec` backed stack.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backing_capacity(0)
    }

    /// Construct an empty `Vec` backed stack with room for `capacity`
    /// elements before it needs to reallocate.
    ///
    /// This is only a hint. The stack will grow past it as needed.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_backing_capacity(capacity)
    }
}

#[allow(clippy::len_without_is_empty)]
impl<A, S> Stack<A, S>
where
    S: Storage<A>,
{
    /// Construct an empty stack on any backing collection, passing
    /// `capacity` on to [`Storage::storage_new()`][storage_new].
    ///
    /// ```rust
    /// # use lifostack::Stack;
    /// # use std::collections::LinkedList;
    /// let mut stack: Stack<_, LinkedList<_>> = Stack::with_backing_capacity(0);
    /// stack.push(1);
    /// assert_eq!(Ok(1), stack.pop());
    /// ```
    ///
    /// [storage_new]: trait.Storage.html#tymethod.storage_new
    #[must_use]
    pub fn with_backing_capacity(capacity: usize) -> Self {
        Self {
            storage: S::storage_new(capacity),
            kind: PhantomData,
        }
    }

    /// Put an item on top of the stack.
    pub fn push(&mut self, item: A) {
        self.storage.storage_push(item);
    }

    /// Remove the item on top of the stack and return it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStackError`][EmptyStackError] if there's nothing to
    /// pop. The stack is left as it was and remains perfectly usable.
    ///
    /// [EmptyStackError]: struct.EmptyStackError.html
    pub fn pop(&mut self) -> Result<A, EmptyStackError> {
        self.storage.storage_pop().ok_or(EmptyStackError)
    }

    /// Borrow the item on top of the stack without removing it.
    pub fn peek(&self) -> Option<&A> {
        self.storage.storage_top()
    }

    /// Test whether the stack is empty by trying to pop from it.
    ///
    /// If the pop succeeds, the item goes straight back on top before this
    /// returns, so the stack is unchanged either way.
    ///
    /// ```rust
    /// # use lifostack::Stack;
    /// let mut stack = Stack::new();
    /// assert!(stack.is_empty());
    /// stack.push("dog");
    /// assert!(!stack.is_empty());
    /// assert_eq!(Some(&"dog"), stack.peek());
    /// ```
    pub fn is_empty(&mut self) -> bool {
        match self.pop() {
            Ok(item) => {
                self.push(item);
                false
            }
            Err(EmptyStackError) => true,
        }
    }

    /// Count the items on the stack by draining it.
    ///
    /// Every item is popped onto a temporary stack while counting, which
    /// reverses them, and then popped back, which reverses them again. The
    /// stack ends up in exactly the order it started in.
    ///
    /// This is an O(n) operation. [`len()`][len] gives the same answer in
    /// constant time.
    ///
    /// ```rust
    /// # use lifostack::Stack;
    /// let mut stack: Stack<_> = vec!["dog", "cat", "fish"].into_iter().collect();
    /// assert_eq!(3, stack.length());
    /// assert_eq!(Ok("fish"), stack.pop());
    /// ```
    ///
    /// [len]: #method.len
    pub fn length(&mut self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut backup: Stack<A, S> = Stack::default();
        let mut length = 0;
        for item in self.drain() {
            backup.push(item);
            length += 1;
        }
        for item in backup.drain() {
            self.push(item);
        }
        debug_assert_eq!(length, self.len());
        trace!(length, "counted stack by draining and restoring it");
        length
    }

    /// Get the number of items on the stack, straight from the backing
    /// collection.
    pub fn len(&self) -> usize {
        self.storage.storage_len()
    }

    /// Discard every item on the stack.
    ///
    /// The stack itself stays around and can be pushed to again.
    pub fn empty(&mut self) {
        let discarded = self.storage.storage_len();
        self.storage.storage_clear();
        trace!(discarded, "emptied stack");
    }

    /// Pop items off the stack one at a time, top first, until it's empty.
    ///
    /// Each item has already left the stack by the time the iterator hands it
    /// to you. If you drop the iterator early, whatever you didn't pull out of
    /// it stays on the stack.
    ///
    /// ```rust
    /// # use lifostack::Stack;
    /// let mut stack: Stack<_> = (1..=5).collect();
    /// let top_two: Vec<_> = stack.drain().take(2).collect();
    /// assert_eq!(vec![5, 4], top_two);
    /// assert_eq!(3, stack.len());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, A, S> {
        Drain { stack: self }
    }
}

impl<A, S> Default for Stack<A, S>
where
    S: Storage<A>,
{
    fn default() -> Self {
        Self::with_backing_capacity(0)
    }
}

impl<A, S> Clone for Stack<A, S>
where
    S: Storage<A> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            kind: PhantomData,
        }
    }
}

impl<A, S> PartialEq for Stack<A, S>
where
    S: Storage<A> + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<A, S> Eq for Stack<A, S> where S: Storage<A> + Eq {}

impl<A, S> Extend<A> for Stack<A, S>
where
    S: Storage<A>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = A>,
    {
        for item in iter {
            self.push(item);
        }
    }
}

impl<A, S> FromIterator<A> for Stack<A, S>
where
    S: Storage<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        let mut stack = Self::default();
        stack.extend(iter);
        stack
    }
}

impl<A, S> IntoIterator for Stack<A, S>
where
    S: Storage<A>,
{
    type Item = A;
    type IntoIter = IntoIter<A, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

impl<A, S> Debug for Stack<A, S>
where
    A: Debug,
    S: Storage<A>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self.peek() {
            None => write!(f, "<Stack (empty)>"),
            Some(top) => write!(f, "<Stack tail={:?} length={}>", top, self.len()),
        }
    }
}

impl<A, S> Display for Stack<A, S>
where
    A: Display,
    S: Storage<A>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self.peek() {
            None => write!(f, "<Stack (empty)>"),
            Some(top) => write!(f, "<Stack tail={} length={}>", top, self.len()),
        }
    }
}

/// A destructive iterator over a [`Stack`][Stack].
///
/// Returned by [`Stack::drain()`][Stack::drain].
///
/// [Stack]: struct.Stack.html
/// [Stack::drain]: struct.Stack.html#method.drain
pub struct Drain<'a, A, S = Vec<A>> {
    stack: &'a mut Stack<A, S>,
}

impl<'a, A, S> Iterator for Drain<'a, A, S>
where
    S: Storage<A>,
{
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.stack.len();
        (len, Some(len))
    }
}

impl<'a, A, S> ExactSizeIterator for Drain<'a, A, S> where S: Storage<A> {}

impl<'a, A, S> FusedIterator for Drain<'a, A, S> where S: Storage<A> {}

impl<'a, A, S> Debug for Drain<'a, A, S>
where
    S: Storage<A>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "Drain(remaining={})", self.stack.len())
    }
}

/// A consuming iterator over a [`Stack`][Stack], top first.
///
/// [Stack]: struct.Stack.html
pub struct IntoIter<A, S = Vec<A>> {
    stack: Stack<A, S>,
}

impl<A, S> Iterator for IntoIter<A, S>
where
    S: Storage<A>,
{
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.stack.len();
        (len, Some(len))
    }
}

impl<A, S> ExactSizeIterator for IntoIter<A, S> where S: Storage<A> {}

impl<A, S> FusedIterator for IntoIter<A, S> where S: Storage<A> {}

impl<A, S> Debug for IntoIter<A, S>
where
    S: Storage<A>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "IntoIter(remaining={})", self.stack.len())
    }
}
