// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Relational operators.
//!
//! For optionals `l` and `r` (possibly of different element types and
//! layers):
//!
//! - `l == r` iff both are empty, or both hold values and the values are
//!   equal;
//! - `l < r` iff `r` holds a value and (`l` is empty or `*l < *r`), so an
//!   empty optional orders before every non-empty one.
//!
//! An optional compares equal to [`Nullopt`] iff it is empty, and never
//! orders below it. Comparisons against a bare value use
//! [`eq_value`](Optional::eq_value) and
//! [`partial_cmp_value`](Optional::partial_cmp_value), where an empty
//! optional is unequal to and less than every value, and with the bare value
//! on the left through [`value_eq`](Optional::value_eq) and
//! [`value_partial_cmp`](Optional::value_partial_cmp).

// Crate imports
use crate::{layer::Layer, optional::Optional, tag::Nullopt};

// Core imports
use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

impl<T, U, L, M> PartialEq<Optional<U, M>> for Optional<T, L>
where
    T: PartialEq<U>,
    L: Layer<T>,
    M: Layer<U>,
{
    fn eq(&self, other: &Optional<U, M>) -> bool {
        match (self.as_option(), other.as_option()) {
            (Some(l), Some(r)) => l == r,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq, L: Layer<T>> Eq for Optional<T, L> {}

impl<T, U, L, M> PartialOrd<Optional<U, M>> for Optional<T, L>
where
    T: PartialOrd<U>,
    L: Layer<T>,
    M: Layer<U>,
{
    fn partial_cmp(&self, other: &Optional<U, M>) -> Option<Ordering> {
        match (self.as_option(), other.as_option()) {
            (Some(l), Some(r)) => l.partial_cmp(r),
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
        }
    }
}

impl<T: Ord, L: Layer<T>> Ord for Optional<T, L> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_option().cmp(&other.as_option())
    }
}

impl<T: Hash, L: Layer<T>> Hash for Optional<T, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state)
    }
}

impl<T, L: Layer<T>> PartialEq<Nullopt> for Optional<T, L> {
    fn eq(&self, _: &Nullopt) -> bool {
        !self.has_value()
    }
}

impl<T, L: Layer<T>> PartialEq<Optional<T, L>> for Nullopt {
    fn eq(&self, other: &Optional<T, L>) -> bool {
        !other.has_value()
    }
}

impl<T, L: Layer<T>> PartialOrd<Nullopt> for Optional<T, L> {
    fn partial_cmp(&self, _: &Nullopt) -> Option<Ordering> {
        Some(if self.has_value() {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    }
}

impl<T, L: Layer<T>> PartialOrd<Optional<T, L>> for Nullopt {
    fn partial_cmp(&self, other: &Optional<T, L>) -> Option<Ordering> {
        Some(if other.has_value() {
            Ordering::Less
        } else {
            Ordering::Equal
        })
    }
}

impl<T, L: Layer<T>> Optional<T, L> {
    /// Returns `true` if a value is held and it equals `value`.
    #[inline]
    pub fn eq_value<U: ?Sized>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.as_option().is_some_and(|v| v == value)
    }

    /// Compares against a bare value; an empty optional is `Less`.
    #[inline]
    pub fn partial_cmp_value<U: ?Sized>(&self, value: &U) -> Option<Ordering>
    where
        T: PartialOrd<U>,
    {
        match self.as_option() {
            Some(v) => v.partial_cmp(value),
            None => Some(Ordering::Less),
        }
    }

    /// Returns `true` if `value` equals the held value, with the bare value
    /// on the left-hand side.
    #[inline]
    pub fn value_eq<U: ?Sized>(&self, value: &U) -> bool
    where
        U: PartialEq<T>,
    {
        self.as_option().is_some_and(|v| value == v)
    }

    /// Compares a bare value against the optional; `value` is `Greater`
    /// than an empty optional.
    #[inline]
    pub fn value_partial_cmp<U: ?Sized>(&self, value: &U) -> Option<Ordering>
    where
        U: PartialOrd<T>,
    {
        match self.as_option() {
            Some(v) => value.partial_cmp(v),
            None => Some(Ordering::Greater),
        }
    }
}
