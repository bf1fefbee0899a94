// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constructor tags for [`Optional`](crate::Optional).

/// The "no value" marker.
///
/// Converts into an empty optional and compares equal to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nullopt;

/// The "no value" marker constant.
pub const NULLOPT: Nullopt = Nullopt;

/// In-place construction tag wrapping the constructor closure.
///
/// `Optional::from(InPlace(|| make()))` runs `make` and stores its result
/// directly in the new optional.
#[derive(Debug, Clone, Copy)]
pub struct InPlace<F>(pub F);
