// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{layer::Layer, optional::Optional};

impl<T, L: Layer<T>> Optional<T, L> {
    /// Destroys the current value, if any, then stores `value`.
    ///
    /// Returns a reference to the new value.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.reset();
        self.storage_mut().construct_in_place(value)
    }

    /// Destroys the current value, if any, then stores the result of `make`.
    ///
    /// If `make` panics the optional is left empty.
    #[inline]
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        self.reset();
        self.storage_mut().construct_in_place_with(make)
    }

    /// Returns the value, storing the result of `make` first if empty.
    #[inline]
    pub fn get_or_emplace_with<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        if !self.has_value() {
            self.storage_mut().construct_in_place_with(make);
        }
        self.value_mut()
    }

    /// Destroys the value, if any. Calling it again is a no-op.
    #[inline]
    pub fn reset(&mut self) {
        self.storage_mut().reset();
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        Optional,
        testing::{self, Tracked},
    };

    #[test]
    fn test_emplace_replaces_unconditionally() {
        testing::reset_counts();
        let mut a: Optional<Tracked> = Optional::new();
        a.emplace(Tracked::new(1));
        assert!(a.has_value());
        assert_eq!(a.emplace(Tracked::new(2)).id, 2);
        assert_eq!(testing::counts().dropped, 1);

        a.emplace_with(|| Tracked::new(3)).id += 1;
        assert_eq!(a.value().id, 4);
        assert_eq!(testing::counts().dropped, 2);
    }

    #[test]
    fn test_reset_is_idempotent() {
        testing::reset_counts();
        let mut a: Optional<Tracked> = Optional::from_value(Tracked::new(1));
        a.reset();
        assert!(!a.has_value());
        a.reset();
        assert!(!a.has_value());
        drop(a);
        assert_eq!(testing::counts().dropped, 1);
    }

    #[test]
    fn test_emplace_with_panic_leaves_empty() {
        testing::reset_counts();
        let mut a: Optional<Tracked> = Optional::from_value(Tracked::new(1));
        let r = std::panic::catch_unwind(core::panic::AssertUnwindSafe(|| {
            a.emplace_with(|| panic!("constructor failed"));
        }));
        assert!(r.is_err());
        assert!(!a.has_value());
        assert_eq!(testing::counts().live(), 0);
    }

    #[test]
    fn test_get_or_emplace_with() {
        let mut a: Optional<u32> = Optional::new();
        assert_eq!(*a.get_or_emplace_with(|| 5), 5);
        assert_eq!(*a.get_or_emplace_with(|| 6), 5);
    }

    #[test]
    fn test_has_value_tracks_every_step() {
        let mut a: Optional<i32> = Optional::new();
        assert!(!a.has_value());
        a.emplace(1);
        assert!(a.has_value());
        a.reset();
        assert!(!a.has_value());
        a.emplace_with(|| 2);
        assert!(a.has_value());
        let _ = a.take();
        assert!(!a.has_value());
    }
}
