// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A last in, first out [`Stack`][Stack] whose derived queries are built
//! out of its own [`push()`][Stack::push] and [`pop()`][Stack::pop].
//!
//! # The Stack
//!
//! [`Stack`][Stack] is an ordinary LIFO container: you
//! [`push()`][Stack::push] things onto the top, and [`pop()`][Stack::pop]
//! takes the most recently pushed thing back off. Popping an empty stack
//! gives you an [`EmptyStackError`][EmptyStackError] rather than a panic, and
//! leaves the stack as usable as it was before.
//!
//! The interesting part is how the queries work.
//! [`is_empty()`][Stack::is_empty] tries to pop, and if that succeeds, pushes
//! the item straight back. [`length()`][Stack::length] pops everything onto
//! a temporary stack while counting, then pops it all back again. Either way,
//! the stack you get back is exactly the stack you started with: popping
//! twice reverses the order twice, and the two reversals cancel out.
//!
//! If all you want is the count, [`len()`][Stack::len] asks the backing
//! collection directly and gives the same answer in constant time.
//!
//! # Destructive Iteration
//!
//! [`drain()`][Stack::drain] pops items off one at a time, top first. The
//! iterator simply ends when the stack runs out. Items are already off the
//! stack by the time you see them, so there's no going back for a second
//! pass.
//!
//! # Backing Storage
//!
//! By default a stack keeps its items in a `Vec`. Any type implementing
//! [`Storage`][Storage] can be used instead; a `LinkedList`, which pushes and
//! pops at its head, is provided.
//!
//! # Thread Safety
//!
//! [`Stack`][Stack] takes `&mut self` for anything which pops, including
//! [`is_empty()`][Stack::is_empty] and [`length()`][Stack::length], so nobody
//! else can look at it while it's half drained. If you need to share a stack
//! between threads, enable the `sync` feature and use
//! [`SyncStack`][SyncStack], which holds a lock for the whole of each
//! operation.
//!
//! # Example
//!
//! ```rust
//! # use lifostack::{EmptyStackError, Stack};
//! let mut stack = Stack::new();
//! stack.push("dog");
//! stack.push("cat");
//! stack.push("fish");
//!
//! // Counting puts everything back where it was.
//! assert_eq!(3, stack.length());
//! assert!(!stack.is_empty());
//!
//! assert_eq!(Ok("fish"), stack.pop());
//! assert_eq!(Ok("cat"), stack.pop());
//! assert_eq!(Ok("dog"), stack.pop());
//!
//! assert_eq!(0, stack.length());
//! assert!(stack.is_empty());
//! assert_eq!(Err(EmptyStackError), stack.pop());
//! ```
//!
//! # Feature Flags
//!
//! There's one feature flag available, `sync`, which provides
//! [`SyncStack`][SyncStack], a stack you can share between threads.
//!
//! # Logging
//!
//! The crate reports what it's doing through [`tracing`][tracing] at trace
//! and debug level. It never installs a subscriber of its own.
//!
//! [Stack]: struct.Stack.html
//! [Stack::push]: struct.Stack.html#method.push
//! [Stack::pop]: struct.Stack.html#method.pop
//! [Stack::is_empty]: struct.Stack.html#method.is_empty
//! [Stack::length]: struct.Stack.html#method.length
//! [Stack::len]: struct.Stack.html#method.len
//! [Stack::drain]: struct.Stack.html#method.drain
//! [Storage]: trait.Storage.html
//! [EmptyStackError]: struct.EmptyStackError.html
//! [SyncStack]: struct.SyncStack.html
//! [tracing]: https://docs.rs/tracing

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_docs, missing_debug_implementations)]

mod error;
mod stack;
mod storage;

#[cfg(feature = "sync")]
mod sync_stack;

pub mod runtime;

pub use self::error::EmptyStackError;
pub use self::stack::{Drain, IntoIter, Stack};
pub use self::storage::Storage;

#[cfg(feature = "sync")]
pub use self::sync_stack::{SyncDrain, SyncStack};
