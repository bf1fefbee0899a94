// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `inplace-optional`
//!
//! A `no_std` optional value stored inline, whose copy, move, assignment and
//! destruction behave exactly like hand-written code for the element type.
//!
//! The core type, [`Optional<T, L>`], holds zero or one `T` in a
//! `MaybeUninit<T>` next to a `bool` discriminant. It never allocates, and its
//! size is fixed at compile time.
//!
//! ## Capability dispatch
//!
//! The second parameter `L` is a [`Layer`] that selects, at compile time,
//! how each lifecycle operation is implemented:
//!
//! - [`Managed`] (the default) works for every `T`. Destruction is explicit
//!   and compiles to nothing when `T` has no drop glue. The optional is
//!   `Clone` exactly when `T: Clone`, with `clone_from` assigning through a
//!   live value instead of reconstructing it.
//! - [`Trivial`] requires `T: Copy`. The optional is `Copy`, has no drop
//!   glue, and every copy is a bitwise copy. [`CopyOptional<T>`] is a
//!   shorthand for it.
//!
//! An operation `T` does not support is absent from the optional, so misuse
//! is a compile error. [`Optional::CAPABILITIES`] reports what was selected.
//!
//! ## Moves
//!
//! Rust moves are bitwise and leave the source unusable. The C++-style move
//! that leaves the source holding a moved-from value (with its discriminant
//! still set) is spelled [`Optional::move_from`] /
//! [`Optional::move_assign_from`] and uses `T::default()` as the moved-from
//! value. [`Optional::take`] moves out and clears the source instead.
//!
//! ## Precondition checks
//!
//! - [`Optional::value`], `*opt` and friends panic on an empty optional;
//! - [`Optional::try_value`] and friends return [`Error::Empty`];
//! - [`Optional::value_unchecked`] is `unsafe` and asserts only in debug
//!   builds.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `Optional<T, L>`, encoded like
//!     a core `Option<T>`.
//!
//! ## Example
//!
//! ```rust
//! use inplace_optional::{CopyOptional, Optional, NULLOPT};
//!
//! let a: CopyOptional<i32> = CopyOptional::from_value(3);
//! let mut b: CopyOptional<i32> = NULLOPT.into();
//! let mut c = a;
//! c.swap(&mut b);
//! assert!(!c.has_value());
//! assert_eq!(b, a);
//! assert!(Optional::<i32>::new() < a);
//!
//! let mut s: Optional<String> = Optional::new();
//! s.emplace("hello".to_string()).push('!');
//! assert_eq!(s.value(), "hello!");
//! s.reset();
//! assert!(!s.has_value());
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod iter;
mod layer;
pub mod memory;
mod optional;
#[cfg(feature = "serde")]
mod serde;
mod storage;
mod tag;
#[cfg(test)]
mod testing;
pub mod traits;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::{IntoIter, Iter, IterMut};
pub use layer::{Layer, Managed, ManagedCell, StorageCell, Trivial};
pub use optional::{CopyOptional, Optional};
pub use storage::Storage;
pub use tag::{InPlace, NULLOPT, Nullopt};
pub use traits::Capabilities;
