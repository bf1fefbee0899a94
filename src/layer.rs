// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability dispatch for `Optional`.
//!
//! An `Optional<T, L>` stores its [`Storage<T>`] through the cell type chosen
//! by its layer `L`. The layer decides, at compile time, which shape each
//! lifecycle operation takes:
//!
//! | operation | [`Trivial`] (`T: Copy`) | [`Managed`] (any `T`) |
//! |---|---|---|
//! | destruction | none (no drop glue) | explicit, resets the cell; folds to nothing if `T` has no drop glue |
//! | copy construction | bitwise (`Copy`) | explicit `Clone::clone`, only if `T: Clone` |
//! | copy assignment | bitwise | four-case [`Storage::assign`], only if `T: Clone` |
//! | move construction | bitwise | bitwise |
//! | move assignment | bitwise | drop then bitwise, or four-case [`Storage::assign_taken`] |
//!
//! When `T` lacks a capability, the matching operation simply does not exist
//! on the optional, so misuse is a compile error rather than a runtime one.

// Crate imports
use crate::{storage::Storage, traits::Capabilities};

mod sealed {
    pub trait Sealed {}
}

/// A cell that owns a [`Storage<T>`].
///
/// Implemented by [`Storage`] itself (no destructor) and by [`ManagedCell`].
pub trait StorageCell<T>: sealed::Sealed {
    /// Wraps `storage`, taking over responsibility for its value.
    fn from_storage(storage: Storage<T>) -> Self;
    /// Shared access to the underlying storage.
    fn storage(&self) -> &Storage<T>;
    /// Exclusive access to the underlying storage.
    fn storage_mut(&mut self) -> &mut Storage<T>;
}

/// Compile-time selection of an `Optional`'s lifecycle shape.
///
/// This trait is sealed; the two shapes are [`Trivial`] and [`Managed`].
pub trait Layer<T>: sealed::Sealed {
    /// The cell type holding the storage.
    type Cell: StorageCell<T>;
    /// What the resulting optional's lifecycle operations cost.
    const CAPABILITIES: Capabilities;
}

/// Layer for `Copy` element types: the optional is `Copy` and has no drop glue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Trivial;

/// Layer for any element type: the optional drops its value and clones it
/// explicitly when `T: Clone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Managed;

impl sealed::Sealed for Trivial {}
impl sealed::Sealed for Managed {}

impl<T: Copy> Layer<T> for Trivial {
    type Cell = Storage<T>;
    const CAPABILITIES: Capabilities = Capabilities::TRIVIAL;
}

impl<T> Layer<T> for Managed {
    type Cell = ManagedCell<T>;
    const CAPABILITIES: Capabilities = Capabilities::managed::<T>();
}

impl<T> sealed::Sealed for Storage<T> {}

impl<T> StorageCell<T> for Storage<T> {
    #[inline]
    fn from_storage(storage: Storage<T>) -> Self {
        storage
    }
    #[inline]
    fn storage(&self) -> &Storage<T> {
        self
    }
    #[inline]
    fn storage_mut(&mut self) -> &mut Storage<T> {
        self
    }
}

/// Storage cell with an explicit destructor.
///
/// Dropping it destroys the held value, if any.
pub struct ManagedCell<T> {
    storage: Storage<T>,
}

impl<T> sealed::Sealed for ManagedCell<T> {}

impl<T> StorageCell<T> for ManagedCell<T> {
    #[inline]
    fn from_storage(storage: Storage<T>) -> Self {
        Self { storage }
    }
    #[inline]
    fn storage(&self) -> &Storage<T> {
        &self.storage
    }
    #[inline]
    fn storage_mut(&mut self) -> &mut Storage<T> {
        &mut self.storage
    }
}

impl<T> Drop for ManagedCell<T> {
    #[inline]
    fn drop(&mut self) {
        if !Self::TRIVIAL_DROP {
            self.storage.reset();
        }
    }
}

impl<T> ManagedCell<T> {
    const TRIVIAL_DROP: bool = crate::traits::is_trivially_destructible::<T>();
}
