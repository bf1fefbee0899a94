// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction and assignment from optionals of another element type.
//!
//! The source may use any element type `U` convertible into `T`, and any
//! layer. Assignment follows the same four cases as
//! [`Storage::assign`](crate::Storage::assign), except that a live
//! destination is overwritten with the converted value, since `clone_from`
//! cannot cross element types.

// Crate imports
use crate::{layer::Layer, optional::Optional};

impl<T, L: Layer<T>> Optional<T, L> {
    /// Converts `source`, moving its value (if any) through `U: Into<T>`.
    #[inline]
    pub fn from_optional<U, M: Layer<U>>(source: Optional<U, M>) -> Self
    where
        U: Into<T>,
    {
        match source.into_option() {
            Some(v) => Self::from_value(v.into()),
            None => Self::new(),
        }
    }

    /// Converts a clone of `source`'s value, if any.
    #[inline]
    pub fn from_optional_ref<U, M: Layer<U>>(source: &Optional<U, M>) -> Self
    where
        U: Clone + Into<T>,
    {
        match source.as_option() {
            Some(v) => Self::in_place(|| v.clone().into()),
            None => Self::new(),
        }
    }

    /// Copy-assigns from an optional of another element type.
    ///
    /// | `self` | `source` | effect |
    /// |---|---|---|
    /// | value | value | own value overwritten with the converted clone |
    /// | value | empty | own value dropped |
    /// | empty | value | converted clone constructed in place |
    /// | empty | empty | nothing |
    pub fn assign_from<U, M: Layer<U>>(&mut self, source: &Optional<U, M>)
    where
        U: Clone + Into<T>,
    {
        match source.as_option() {
            Some(src) => self.store_converted(|| src.clone().into()),
            None => self.reset(),
        }
    }

    /// Move-assigns from an optional of another element type, consuming it.
    ///
    /// Same four cases as [`assign_from`](Self::assign_from), without cloning.
    pub fn assign_converted<U, M: Layer<U>>(&mut self, source: Optional<U, M>)
    where
        U: Into<T>,
    {
        match source.into_option() {
            Some(v) => self.store_converted(|| v.into()),
            None => self.reset(),
        }
    }

    fn store_converted<F: FnOnce() -> T>(&mut self, make: F) {
        match self.as_option_mut() {
            Some(dst) => *dst = make(),
            None => {
                self.storage_mut().construct_in_place_with(make);
            }
        }
    }
}
