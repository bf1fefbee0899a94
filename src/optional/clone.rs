// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Copy construction and copy assignment.
//!
//! - `Optional<T, Trivial>` is `Copy`: both operations are bitwise.
//! - `Optional<T, Managed>` is `Clone` exactly when `T: Clone`. `clone`
//!   clones the held value, if any; `clone_from` follows the four-case
//!   table of [`Storage::assign`](crate::Storage::assign), assigning through
//!   a live destination with `T::clone_from`.
//!
//! Without `T: Clone` copying is unavailable:
//!
//! ```compile_fail
//! use inplace_optional::Optional;
//!
//! struct NotClone;
//! let a: Optional<NotClone> = Optional::from_value(NotClone);
//! let b = a.clone();
//! ```
//!
//! and a non-`Copy` type cannot use the trivial layer:
//!
//! ```compile_fail
//! use inplace_optional::CopyOptional;
//!
//! let a: CopyOptional<String> = CopyOptional::new();
//! ```

// Crate imports
use crate::{
    layer::{Managed, Trivial},
    optional::Optional,
};

impl<T: Copy> Copy for Optional<T, Trivial> {}
impl<T: Copy> Clone for Optional<T, Trivial> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone> Clone for Optional<T, Managed> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(v) => Self::in_place(|| v.clone()),
            None => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage_mut().assign(source.storage());
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        CopyOptional, Optional,
        testing::{self, Tracked},
    };
    use alloc::string::String;

    #[test]
    fn test_copy_assign_gives_independent_value() {
        let mut a: Optional<i32> = Optional::from_value(5);
        let mut b: Optional<i32> = Optional::new();
        b.clone_from(&a);
        assert!(b.has_value());
        assert_eq!(*b.value(), 5);
        *a.value_mut() = 9;
        assert_eq!(*b.value(), 5);
    }

    #[test]
    fn test_trivial_copy_is_bitwise_and_independent() {
        let a: CopyOptional<i32> = CopyOptional::from_value(5);
        let mut b = a;
        *b.value_mut() = 6;
        assert_eq!(*a.value(), 5);
        assert_eq!(*b.value(), 6);

        let mut c: CopyOptional<i32> = CopyOptional::new();
        assert!(!c.has_value());
        c = a;
        assert_eq!(c.as_option(), Some(&5));
    }

    #[test]
    fn test_clone_constructs_only_when_source_has_value() {
        testing::reset_counts();
        let a: Optional<Tracked> = Optional::from_value(Tracked::new(1));
        let b = a.clone();
        assert_eq!(b.value().id, 1);
        assert_eq!(testing::counts().cloned, 1);

        let e: Optional<Tracked> = Optional::new();
        let f = e.clone();
        assert!(!f.has_value());
        assert_eq!(testing::counts().cloned, 1);
    }

    #[test]
    fn test_clone_from_truth_table() {
        testing::reset_counts();
        let full: Optional<Tracked> = Optional::from_value(Tracked::new(2));
        let empty: Optional<Tracked> = Optional::new();

        // value <- value
        let mut a: Optional<Tracked> = Optional::from_value(Tracked::new(1));
        a.clone_from(&full);
        assert_eq!(a.value().id, 2);
        let c = testing::counts();
        assert_eq!((c.clone_assigned, c.cloned, c.dropped), (1, 0, 0));

        // value <- empty
        a.clone_from(&empty);
        assert!(!a.has_value());
        let c = testing::counts();
        assert_eq!((c.clone_assigned, c.cloned, c.dropped), (1, 0, 1));

        // empty <- value
        a.clone_from(&full);
        assert_eq!(a.value().id, 2);
        let c = testing::counts();
        assert_eq!((c.clone_assigned, c.cloned, c.dropped), (1, 1, 1));

        // empty <- empty
        let mut b: Optional<Tracked> = Optional::new();
        b.clone_from(&empty);
        assert!(!b.has_value());
        assert_eq!(testing::counts(), c);
    }

    #[test]
    fn test_clone_of_heap_value() {
        let a: Optional<String> = Optional::from_value(String::from("abc"));
        let mut b = a.clone();
        b.value_mut().push('d');
        assert_eq!(a.value(), "abc");
        assert_eq!(b.value(), "abcd");
    }
}
