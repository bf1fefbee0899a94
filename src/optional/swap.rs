// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{layer::Layer, optional::Optional};

impl<T, L: Layer<T>> Optional<T, L> {
    /// Exchanges the contents of `self` and `other`.
    ///
    /// - both empty: nothing happens;
    /// - both hold values: the values are swapped with [`core::mem::swap`];
    /// - one holds a value: it is moved into the empty one, which becomes the
    ///   only holder, and the source is cleared.
    ///
    /// Moves cannot fail, so every case completes without an observable
    /// intermediate state.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.storage_mut().swap(other.storage_mut());
    }
}
