// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move construction and move assignment.
//!
//! Plain Rust moves of an `Optional` are always bitwise and leave the source
//! unusable, for both layers. On top of that:
//!
//! - [`assign`](Optional::assign) consumes another optional using the
//!   four-case table (assign-through / destroy / construct / nothing);
//! - [`move_from`](Optional::move_from) and
//!   [`move_assign_from`](Optional::move_assign_from) move out of a borrowed
//!   optional the way a C++ move does: the source keeps its discriminant and
//!   is left holding `T::default()` as its moved-from value;
//! - [`take`](Optional::take) and [`replace`](Optional::replace) move the
//!   value out and clear, or refill, the source.

// Crate imports
use crate::{layer::Layer, optional::Optional};

impl<T, L: Layer<T>> Optional<T, L> {
    /// Move-assigns from `source`.
    ///
    /// | `self` | `source` | effect |
    /// |---|---|---|
    /// | value | value | the source value replaces (and drops) the own one |
    /// | value | empty | the own value is dropped |
    /// | empty | value | the source value is moved in |
    /// | empty | empty | nothing |
    #[inline]
    pub fn assign(&mut self, mut source: Self) {
        self.storage_mut().assign_taken(source.storage_mut());
    }

    /// Move-constructs from `source`, leaving `source` non-empty.
    ///
    /// If `source` holds a value it is moved into the result and replaced by
    /// `T::default()`; `source.has_value()` stays `true`. An empty source
    /// yields an empty optional.
    pub fn move_from(source: &mut Self) -> Self
    where
        T: Default,
    {
        match source.as_option_mut() {
            Some(v) => Self::from_value(core::mem::take(v)),
            None => Self::new(),
        }
    }

    /// Move-assigns from `source`, leaving `source`'s discriminant untouched.
    ///
    /// Follows the same four cases as [`assign`](Self::assign); a live source
    /// is left holding `T::default()`.
    #[inline]
    pub fn move_assign_from(&mut self, source: &mut Self)
    where
        T: Default,
    {
        self.storage_mut().assign_moved_from(source.storage_mut());
    }

    /// Moves the value out, leaving the optional empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        self.storage_mut().take()
    }

    /// Stores `value` and returns the previous value, if any.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        let old = self.take();
        self.storage_mut().construct_in_place(value);
        old
    }
}
