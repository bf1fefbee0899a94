// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Optional`](crate::Optional).
//!
//! Every iterator yields the held value once, or nothing, and supports
//! `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.

// Crate imports
use crate::{layer::Layer, optional::Optional};

// Core imports
use core::iter::FusedIterator;

/// Borrowing iterator returned by [`Optional::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    pub(crate) inner: Option<&'a T>,
}

/// Mutably borrowing iterator returned by [`Optional::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    pub(crate) inner: Option<&'a mut T>,
}

/// Owned iterator returned by `Optional::into_iter()`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    pub(crate) inner: Option<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.take()
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.take()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}
impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.take()
    }
}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T, L: Layer<T>> Optional<T, L> {
    /// Iterates over the held value, if any.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_option(),
        }
    }

    /// Iterates mutably over the held value, if any.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_option_mut(),
        }
    }
}

impl<'a, T, L: Layer<T>> IntoIterator for &'a Optional<T, L> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T, L: Layer<T>> IntoIterator for &'a mut Optional<T, L> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T, L: Layer<T>> IntoIterator for Optional<T, L> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_option(),
        }
    }
}
