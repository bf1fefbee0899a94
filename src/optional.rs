// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Optional` type and its inherent API.
//!
//! `Optional<T, L>` holds zero or one `T` inline, with no heap allocation.
//! Its lifecycle shape is chosen by the layer `L` (see [`Layer`]); the API
//! below is shared by both shapes.

mod clone;
mod cmp;
mod convert;
mod emplace;
mod moves;
mod swap;
mod value_or;

// Crate imports
use crate::{
    error::Error,
    layer::{Layer, Managed, StorageCell, Trivial},
    storage::Storage,
    tag::{InPlace, Nullopt},
    traits::Capabilities,
};

// Core imports
use core::{
    fmt,
    ops::{Deref, DerefMut},
};

/// Zero or one value of type `T`, stored inline.
///
/// # Layers
///
/// - `Optional<T>` (= `Optional<T, Managed>`) works for every `T`. It drops
///   its value, is `Clone` when `T: Clone`, and is never `Copy`.
/// - `Optional<T, Trivial>` (alias [`CopyOptional<T>`]) requires `T: Copy`.
///   It is `Copy`, has no drop glue, and all its copies are bitwise.
///
/// # Layout
///
/// An `Optional<T, L>` is exactly a `MaybeUninit<T>` plus a `bool`; its size
/// is fixed at compile time and no operation allocates.
///
/// # Accessing the value
///
/// - [`value`](Self::value), [`value_mut`](Self::value_mut),
///   [`into_value`](Self::into_value), `*opt` and `opt.field` (through
///   [`Deref`]) panic on an empty optional;
/// - [`try_value`](Self::try_value) and friends return [`Error::Empty`];
/// - [`value_unchecked`](Self::value_unchecked) is `unsafe` and checks only
///   in debug builds;
/// - [`as_option`](Self::as_option) borrows as a core `Option`.
///
/// # Moves
///
/// A Rust move (`let b = a;`) is bitwise and makes `a` unusable. The
/// C++-style move that leaves the source holding a moved-from value is
/// available as [`move_from`](Self::move_from) and
/// [`move_assign_from`](Self::move_assign_from); [`take`](Self::take) moves
/// the value out and clears the source.
///
/// # Example
///
/// ```rust
/// use inplace_optional::Optional;
///
/// let mut a: Optional<i32> = Optional::new();
/// assert!(!a.has_value());
/// a.emplace(42);
/// assert_eq!(*a.value(), 42);
/// assert_eq!(a.value_or(0), 42);
/// ```
pub struct Optional<T, L: Layer<T> = Managed> {
    cell: L::Cell,
}

/// An optional of a `Copy` type that is itself `Copy`.
pub type CopyOptional<T> = Optional<T, Trivial>;

#[cold]
#[inline(never)]
#[track_caller]
fn empty_access(op: &str) -> ! {
    panic!("called `Optional::{op}()` on an empty optional")
}

impl<T, L: Layer<T>> Optional<T, L> {
    /// Capability report of this optional's lifecycle operations.
    pub const CAPABILITIES: Capabilities = L::CAPABILITIES;

    #[inline]
    fn from_storage(storage: Storage<T>) -> Self {
        Self {
            cell: <L::Cell as StorageCell<T>>::from_storage(storage),
        }
    }

    #[inline]
    pub(crate) fn storage(&self) -> &Storage<T> {
        self.cell.storage()
    }

    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut Storage<T> {
        self.cell.storage_mut()
    }

    /// Constructs an empty optional.
    #[inline]
    pub fn new() -> Self {
        Self::from_storage(Storage::new())
    }

    /// Constructs an optional holding `value`.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self::from_storage(Storage::with_value(value))
    }

    /// Constructs an optional holding `value` converted into `T`.
    #[inline]
    pub fn converted<U: Into<T>>(value: U) -> Self {
        Self::from_value(value.into())
    }

    /// Constructs an optional holding the result of `make`, built in place.
    #[inline]
    pub fn in_place<F: FnOnce() -> T>(make: F) -> Self {
        let mut out = Self::new();
        out.storage_mut().construct_in_place_with(make);
        out
    }

    /// Returns `true` if a value is held.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.storage().has_value()
    }

    /// Returns a reference to the value.
    ///
    /// # Panics
    ///
    /// Panics if the optional is empty.
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self.storage().get() {
            Some(v) => v,
            None => empty_access("value"),
        }
    }

    /// Returns a mutable reference to the value.
    ///
    /// # Panics
    ///
    /// Panics if the optional is empty.
    #[inline]
    #[track_caller]
    pub fn value_mut(&mut self) -> &mut T {
        match self.storage_mut().get_mut() {
            Some(v) => v,
            None => empty_access("value_mut"),
        }
    }

    /// Consumes the optional and returns the value.
    ///
    /// # Panics
    ///
    /// Panics if the optional is empty.
    #[inline]
    #[track_caller]
    pub fn into_value(mut self) -> T {
        match self.storage_mut().take() {
            Some(v) => v,
            None => empty_access("into_value"),
        }
    }

    /// Returns a reference to the value, or [`Error::Empty`].
    #[inline]
    pub fn try_value(&self) -> Result<&T, Error> {
        self.storage().get().ok_or(Error::Empty)
    }

    /// Returns a mutable reference to the value, or [`Error::Empty`].
    #[inline]
    pub fn try_value_mut(&mut self) -> Result<&mut T, Error> {
        self.storage_mut().get_mut().ok_or(Error::Empty)
    }

    /// Consumes the optional and returns the value, or [`Error::Empty`].
    #[inline]
    pub fn try_into_value(mut self) -> Result<T, Error> {
        self.storage_mut().take().ok_or(Error::Empty)
    }

    /// Returns a reference to the value without checking in release builds.
    ///
    /// # Safety
    ///
    /// The optional must hold a value.
    #[inline]
    pub unsafe fn value_unchecked(&self) -> &T {
        // SAFETY: forwarded to the caller.
        unsafe { self.storage().value_unchecked() }
    }

    /// Returns a mutable reference to the value without checking in release
    /// builds.
    ///
    /// # Safety
    ///
    /// The optional must hold a value.
    #[inline]
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        // SAFETY: forwarded to the caller.
        unsafe { self.storage_mut().value_unchecked_mut() }
    }

    /// Borrows the value as a core `Option`.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.storage().get()
    }

    /// Mutably borrows the value as a core `Option`.
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        self.storage_mut().get_mut()
    }

    /// Converts into a core `Option`.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.storage_mut().take()
    }
}

impl<T, L: Layer<T>> Default for Optional<T, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, L: Layer<T>> From<Nullopt> for Optional<T, L> {
    fn from(_: Nullopt) -> Self {
        Self::new()
    }
}

impl<T, L: Layer<T>, F: FnOnce() -> T> From<InPlace<F>> for Optional<T, L> {
    fn from(tag: InPlace<F>) -> Self {
        Self::in_place(tag.0)
    }
}

impl<T, L: Layer<T>> From<Option<T>> for Optional<T, L> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::from_value(v),
            None => Self::new(),
        }
    }
}

impl<T, L: Layer<T>> From<Optional<T, L>> for Option<T> {
    fn from(value: Optional<T, L>) -> Self {
        value.into_option()
    }
}

impl<T, L: Layer<T>> Deref for Optional<T, L> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        match self.storage().get() {
            Some(v) => v,
            None => empty_access("deref"),
        }
    }
}

impl<T, L: Layer<T>> DerefMut for Optional<T, L> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.storage_mut().get_mut() {
            Some(v) => v,
            None => empty_access("deref_mut"),
        }
    }
}

impl<T: fmt::Debug, L: Layer<T>> fmt::Debug for Optional<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(v) => f.debug_tuple("Optional").field(v).finish(),
            None => f.write_str("Nullopt"),
        }
    }
}
