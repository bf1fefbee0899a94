// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The tagged storage unit underneath every `Optional`.
//!
//! `Storage<T>` is a `MaybeUninit<T>` plus a `bool` discriminant. It is the
//! only type that touches the uninitialized cell directly; every other layer
//! goes through the operations below.

// Invariants:
// - `has_value == false` → `value` holds no live `T` and is never read.
// - `has_value == true` → `value` holds exactly one live `T`.
// - The flag is set only after a `T` has been written, and cleared before
//   the `T` is dropped or moved out, so a panicking constructor or
//   destructor never leaves a "believed live" slot behind.
// - `Storage` never drops its contents on its own; owners call `reset`.

// Crate imports
use crate::memory::{construct_object_at, destroy_object};

// Core imports
use core::mem::MaybeUninit;

/// Inline cell holding either nothing or one `T`, plus its discriminant.
///
/// `Storage<T>` has no destructor: dropping a non-empty storage leaks the
/// value. It is `Copy` whenever `T` is, in which case copying it is a plain
/// bitwise copy of the cell and the flag.
pub struct Storage<T> {
    value: MaybeUninit<T>,
    has_value: bool,
}

impl<T> Storage<T> {
    /// Constructs an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            has_value: false,
        }
    }

    /// Constructs a cell holding `value`.
    #[inline]
    pub const fn with_value(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            has_value: true,
        }
    }

    /// Returns the discriminant.
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.has_value
    }

    /// Moves `value` into the empty cell and sets the discriminant.
    ///
    /// The caller must know the cell is empty. Calling this on a live cell is
    /// a logic error caught by a debug assertion; in release builds the old
    /// value is leaked, never dropped twice.
    #[inline]
    pub fn construct_in_place(&mut self, value: T) -> &mut T {
        debug_assert!(!self.has_value, "construct_in_place on a live cell");
        // SAFETY: `self.value` is valid, aligned storage for one `T`.
        unsafe { construct_object_at(self.value.as_mut_ptr(), value) };
        self.has_value = true;
        // SAFETY: a `T` was written just above.
        unsafe { self.value.assume_init_mut() }
    }

    /// Builds a value with `make` and moves it into the empty cell.
    ///
    /// If `make` panics the cell stays empty.
    #[inline]
    pub fn construct_in_place_with<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        let value = make();
        self.construct_in_place(value)
    }

    /// Drops the live value, if any, and clears the discriminant.
    ///
    /// A no-op on an empty cell, so calling it twice is the same as once.
    #[inline]
    pub fn reset(&mut self) {
        if self.has_value {
            self.has_value = false;
            // SAFETY: the flag was set, so a live `T` is in the cell; it was
            // cleared first, so nothing can observe or drop it again.
            unsafe { destroy_object(self.value.as_mut_ptr()) };
        }
    }

    /// Returns the live value, if any.
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        if self.has_value {
            // SAFETY: the flag is set, so the cell holds a live `T`.
            Some(unsafe { self.value.assume_init_ref() })
        } else {
            None
        }
    }

    /// Returns the live value mutably, if any.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.has_value {
            // SAFETY: the flag is set, so the cell holds a live `T`.
            Some(unsafe { self.value.assume_init_mut() })
        } else {
            None
        }
    }

    /// Returns the live value without checking the discriminant.
    ///
    /// # Safety
    ///
    /// The cell must hold a value. This is verified by a debug assertion only.
    #[inline]
    pub unsafe fn value_unchecked(&self) -> &T {
        debug_assert!(self.has_value, "value_unchecked on an empty cell");
        // SAFETY: the caller guarantees the cell holds a live `T`.
        unsafe { self.value.assume_init_ref() }
    }

    /// Mutable counterpart of [`value_unchecked`](Self::value_unchecked).
    ///
    /// # Safety
    ///
    /// The cell must hold a value. This is verified by a debug assertion only.
    #[inline]
    pub unsafe fn value_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.has_value, "value_unchecked_mut on an empty cell");
        // SAFETY: the caller guarantees the cell holds a live `T`.
        unsafe { self.value.assume_init_mut() }
    }

    /// Moves the value out, leaving the cell empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        if self.has_value {
            self.has_value = false;
            // SAFETY: the flag was set, so the cell holds a live `T`; the flag
            // is now clear, so this bitwise read is the only owner.
            Some(unsafe { self.value.assume_init_read() })
        } else {
            None
        }
    }

    /// Copy-assigns from `source`.
    ///
    /// | `self` | `source` | effect |
    /// |---|---|---|
    /// | value | value | `self.clone_from(source)` |
    /// | value | empty | drop own value |
    /// | empty | value | construct a clone in place |
    /// | empty | empty | nothing |
    pub fn assign(&mut self, source: &Self)
    where
        T: Clone,
    {
        match (self.has_value, source.get()) {
            (true, Some(src)) => {
                // SAFETY: `self.has_value` is set.
                let dst = unsafe { self.value.assume_init_mut() };
                dst.clone_from(src);
            }
            (true, None) => self.reset(),
            (false, Some(src)) => {
                self.construct_in_place_with(|| src.clone());
            }
            (false, None) => {}
        }
    }

    /// Move-assigns from `source`, leaving `source` empty.
    ///
    /// Same four cases as [`assign`](Self::assign), except that a live
    /// destination is overwritten with the moved value (dropping the old one).
    pub fn assign_taken(&mut self, source: &mut Self) {
        match source.take() {
            Some(value) => match self.get_mut() {
                Some(dst) => *dst = value,
                None => {
                    self.construct_in_place(value);
                }
            },
            None => self.reset(),
        }
    }

    /// Move-assigns from `source`, leaving `source`'s discriminant untouched.
    ///
    /// A live source value is replaced by `T::default()`, which stands for
    /// the moved-from state; an empty source stays empty.
    pub fn assign_moved_from(&mut self, source: &mut Self)
    where
        T: Default,
    {
        match source.get_mut() {
            Some(src) => {
                let value = core::mem::take(src);
                match self.get_mut() {
                    Some(dst) => *dst = value,
                    None => {
                        self.construct_in_place(value);
                    }
                }
            }
            None => self.reset(),
        }
    }

    /// Exchanges the contents of two cells.
    ///
    /// - both empty: nothing happens;
    /// - both live: the two values are swapped;
    /// - one live: its value is moved into the empty cell and the source is
    ///   cleared.
    ///
    /// Moves cannot fail, so no intermediate state is ever observable.
    pub fn swap(&mut self, other: &mut Self) {
        match (self.has_value, other.has_value) {
            (true, true) => {
                // SAFETY: both flags are set.
                unsafe {
                    core::mem::swap(self.value.assume_init_mut(), other.value.assume_init_mut())
                };
            }
            (true, false) => {
                if let Some(value) = self.take() {
                    other.construct_in_place(value);
                }
            }
            (false, true) => {
                if let Some(value) = other.take() {
                    self.construct_in_place(value);
                }
            }
            (false, false) => {}
        }
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Copy for Storage<T> {}
impl<T: Copy> Clone for Storage<T> {
    fn clone(&self) -> Self {
        *self
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Storage;
    use crate::testing::{self, PanicOnClone, Tracked};

    #[test]
    fn test_new_with_value_and_discriminant() {
        let empty: Storage<u32> = Storage::new();
        assert!(!empty.has_value());
        assert_eq!(empty.get(), None);

        let full = Storage::with_value(9u32);
        assert!(full.has_value());
        assert_eq!(full.get(), Some(&9));
        assert_eq!(unsafe { *full.value_unchecked() }, 9);
    }

    #[test]
    fn test_const_construction() {
        const EMPTY: Storage<u8> = Storage::new();
        const FULL: Storage<u8> = Storage::with_value(3);
        const FULL_HAS: bool = FULL.has_value();
        assert!(!EMPTY.has_value());
        assert!(FULL_HAS);
    }

    #[test]
    fn test_construct_reset_and_idempotent_reset() {
        testing::reset_counts();
        let mut s: Storage<Tracked> = Storage::new();
        s.construct_in_place(Tracked::new(1)).id += 10;
        assert_eq!(s.get().map(|t| t.id), Some(11));

        s.reset();
        assert!(!s.has_value());
        s.reset();
        assert!(!s.has_value());

        let c = testing::counts();
        assert_eq!(c.constructed, 1);
        assert_eq!(c.dropped, 1);
    }

    #[test]
    fn test_take_moves_out_without_drop() {
        testing::reset_counts();
        let mut s = Storage::with_value(Tracked::new(5));
        let t = s.take().unwrap();
        assert!(!s.has_value());
        assert_eq!(s.take(), None);
        assert_eq!(testing::counts().dropped, 0);
        drop(t);
        assert_eq!(testing::counts().dropped, 1);
    }

    #[test]
    fn test_assign_copy_truth_table() {
        testing::reset_counts();

        // value <- value: assign-through
        let mut a = Storage::with_value(Tracked::new(1));
        let b = Storage::with_value(Tracked::new(2));
        a.assign(&b);
        assert_eq!(a.get().map(|t| t.id), Some(2));
        let c = testing::counts();
        assert_eq!(c.clone_assigned, 1);
        assert_eq!(c.cloned, 0);
        assert_eq!(c.dropped, 0);

        // value <- empty: destroy
        let empty: Storage<Tracked> = Storage::new();
        a.assign(&empty);
        assert!(!a.has_value());
        assert_eq!(testing::counts().dropped, 1);

        // empty <- value: construct
        a.assign(&b);
        assert_eq!(a.get().map(|t| t.id), Some(2));
        assert_eq!(testing::counts().cloned, 1);

        // empty <- empty: nothing
        let mut e: Storage<Tracked> = Storage::new();
        let before = testing::counts();
        e.assign(&empty);
        assert!(!e.has_value());
        assert_eq!(testing::counts(), before);

        a.reset();
        let mut b = b;
        b.reset();
        assert_eq!(testing::counts().live(), 0);
    }

    #[test]
    fn test_assign_taken_truth_table() {
        testing::reset_counts();

        let mut a = Storage::with_value(Tracked::new(1));
        let mut b = Storage::with_value(Tracked::new(2));
        a.assign_taken(&mut b);
        assert_eq!(a.get().map(|t| t.id), Some(2));
        assert!(!b.has_value());
        // the old destination value was dropped by the assignment
        assert_eq!(testing::counts().dropped, 1);

        let mut empty: Storage<Tracked> = Storage::new();
        a.assign_taken(&mut empty);
        assert!(!a.has_value());
        assert_eq!(testing::counts().dropped, 2);

        let mut c = Storage::with_value(Tracked::new(3));
        a.assign_taken(&mut c);
        assert_eq!(a.get().map(|t| t.id), Some(3));
        assert!(!c.has_value());

        let mut e: Storage<Tracked> = Storage::new();
        e.assign_taken(&mut empty);
        assert!(!e.has_value());

        a.reset();
        assert_eq!(testing::counts().live(), 0);
    }

    #[test]
    fn test_assign_moved_from_keeps_source_flag() {
        testing::reset_counts();
        let mut a: Storage<Tracked> = Storage::new();
        let mut b = Storage::with_value(Tracked::new(4));
        a.assign_moved_from(&mut b);
        assert_eq!(a.get().map(|t| t.id), Some(4));
        assert!(b.has_value());
        assert_eq!(b.get().map(|t| t.id), Some(0));
        let c = testing::counts();
        assert_eq!(c.defaulted, 1);
        assert_eq!(c.cloned, 0);

        let mut empty: Storage<Tracked> = Storage::new();
        a.assign_moved_from(&mut empty);
        assert!(!a.has_value());
        assert!(!empty.has_value());

        b.reset();
        assert_eq!(testing::counts().live(), 0);
    }

    #[test]
    fn test_swap_four_cases() {
        let mut a = Storage::with_value(1u8);
        let mut b = Storage::with_value(2u8);
        a.swap(&mut b);
        assert_eq!((a.get(), b.get()), (Some(&2), Some(&1)));

        let mut e: Storage<u8> = Storage::new();
        a.swap(&mut e);
        assert_eq!((a.get(), e.get()), (None, Some(&2)));
        a.swap(&mut e);
        assert_eq!((a.get(), e.get()), (Some(&2), None));

        let mut f: Storage<u8> = Storage::new();
        e.swap(&mut f);
        assert!(!e.has_value() && !f.has_value());
    }

    #[test]
    fn test_panicking_clone_leaves_cell_empty() {
        let src = Storage::with_value(PanicOnClone);
        let mut dst: Storage<PanicOnClone> = Storage::new();
        let r = std::panic::catch_unwind(core::panic::AssertUnwindSafe(|| dst.assign(&src)));
        assert!(r.is_err());
        assert!(!dst.has_value());
    }

    #[test]
    fn test_copy_storage_is_bitwise() {
        let a = Storage::with_value(7u64);
        let mut b = a;
        *b.get_mut().unwrap() = 8;
        assert_eq!(a.get(), Some(&7));
        assert_eq!(b.get(), Some(&8));
    }
}
