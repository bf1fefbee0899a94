// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `Optional`.
//!
//! Only the fallible accessors (`try_value`, `try_value_mut`, `try_into_value`)
//! report errors. They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the fallible accessors of [`Optional`](crate::Optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation required a value, but the optional was empty.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("optional is empty"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, Optional};
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::Empty);
        assert!(s.contains("empty"));
    }

    #[test]
    fn test_try_value_error_is_dyn_core_error() {
        let empty: Optional<u8> = Optional::new();
        let err = empty.try_value().unwrap_err();
        let dyn_err: &dyn CoreError = &err;
        assert_eq!(dyn_err.to_string(), "optional is empty");
        assert!(dyn_err.source().is_none());

        let full: Optional<u8> = Optional::from_value(1);
        assert_eq!(full.try_into_value().map_err(|e| e.to_string()), Ok(1));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::Empty.to_string(), "optional is empty");
    }
}
