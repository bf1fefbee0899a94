// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compile-time capability facts about element types.
//!
//! Rust already answers most of the questions a container needs through its
//! own traits: `Copy` means bitwise copy and assignment, `Clone` means
//! explicit copy construction (`clone`) and copy assignment (`clone_from`),
//! and every move is a bitwise move. The one fact that is not a trait is
//! whether dropping a value does any work, which [`is_trivially_destructible`]
//! reports as a `const` value so that branches on it fold away.

/// Returns `true` when dropping a `T` runs no code.
///
/// This is `!core::mem::needs_drop::<T>()`, usable in `const` contexts.
#[inline]
pub const fn is_trivially_destructible<T>() -> bool {
    !core::mem::needs_drop::<T>()
}

/// Capability report of an `Optional<T, L>` selected by its [`Layer`](crate::Layer).
///
/// Each flag states whether the corresponding operation of the optional is a
/// plain memory copy or no-op (`true`) or runs generated code (`false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// Destroying the optional runs no code.
    pub trivially_destructible: bool,
    /// Copy construction and copy assignment are bitwise (`Copy`).
    pub trivially_copyable: bool,
}

impl Capabilities {
    /// Capabilities of an optional whose copy operations are all bitwise.
    pub const TRIVIAL: Self = Self {
        trivially_destructible: true,
        trivially_copyable: true,
    };

    /// Capabilities of an optional with an explicit destructor for `T`.
    pub const fn managed<T>() -> Self {
        Self {
            trivially_destructible: is_trivially_destructible::<T>(),
            trivially_copyable: false,
        }
    }

    /// Returns `true` when every flag is set.
    #[inline]
    pub const fn is_trivial(&self) -> bool {
        self.trivially_destructible && self.trivially_copyable
    }
}
