// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw lifetime primitives for values placed in caller-owned memory.
//!
//! These are the only functions that start or end the lifetime of a `T`
//! inside a [`Storage`](crate::Storage) cell. Neither allocates or frees.

// Crate imports
use crate::traits::is_trivially_destructible;

/// Moves `value` into the memory at `at` without reading or dropping
/// whatever was there before.
///
/// # Safety
///
/// - `at` must be valid for writes and properly aligned for `T`.
/// - If `at` held a live `T`, that value is overwritten without being
///   dropped (its resources leak).
#[inline]
pub unsafe fn construct_object_at<T>(at: *mut T, value: T) {
    // SAFETY: the caller guarantees `at` is valid for writes and aligned.
    unsafe { at.write(value) }
}

/// Ends the lifetime of the `T` at `at` by running its destructor in place.
///
/// The memory itself is left untouched. For trivially destructible `T` this
/// compiles to nothing.
///
/// # Safety
///
/// - `at` must point to a live, properly aligned `T` that nothing else will
///   use or drop afterwards.
#[inline]
pub unsafe fn destroy_object<T>(at: *mut T) {
    if !is_trivially_destructible::<T>() {
        // SAFETY: the caller guarantees `at` points to a live `T` that is not
        // used again.
        unsafe { core::ptr::drop_in_place(at) }
    }
}
