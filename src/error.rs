// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Attempt to pop an empty stack.
///
/// This is the only error a [`Stack`][Stack] can produce, and only
/// [`Stack::pop()`][Stack::pop] produces it. It's an expected outcome rather
/// than a bug, so it comes back as a value instead of a panic.
///
/// [Stack]: struct.Stack.html
/// [Stack::pop]: struct.Stack.html#method.pop
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("attempted to pop an empty stack")]
pub struct EmptyStackError;

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error;

    #[test]
    fn displays_a_useful_message() {
        assert_eq!(
            "attempted to pop an empty stack",
            EmptyStackError.to_string()
        );
    }

    #[test]
    fn boxes_as_std_error() {
        let boxed: Box<dyn Error> = Box::new(EmptyStackError);
        assert!(boxed.source().is_none());
        assert!(boxed.downcast_ref::<EmptyStackError>().is_some());
    }
}
