// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{layer::Layer, optional::Optional};

impl<T, L: Layer<T>> Optional<T, L> {
    /// Returns a clone of the value, or `default` converted into `T`.
    #[inline]
    pub fn value_or<U: Into<T>>(&self, default: U) -> T
    where
        T: Clone,
    {
        match self.as_option() {
            Some(v) => v.clone(),
            None => default.into(),
        }
    }

    /// Returns a clone of the value, or the result of `make`.
    #[inline]
    pub fn value_or_else<F: FnOnce() -> T>(&self, make: F) -> T
    where
        T: Clone,
    {
        match self.as_option() {
            Some(v) => v.clone(),
            None => make(),
        }
    }

    /// Consumes the optional, returning the value or `default` converted into `T`.
    #[inline]
    pub fn into_value_or<U: Into<T>>(self, default: U) -> T {
        match self.into_option() {
            Some(v) => v,
            None => default.into(),
        }
    }
}
