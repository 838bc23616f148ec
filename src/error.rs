// This file is part of cow-containers.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by the containers in this crate.
//!
//! These errors represent bounds, capacity, and allocation conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by fallible container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed a fixed capacity.
    ///
    /// Returned by [`FixedVec`](crate::FixedVec) operations; the growable
    /// [`CowVec`](crate::CowVec) never reports it.
    Full,
    /// An index or position was out of the current logical bounds.
    OutOfBounds,
    /// The allocator could not provide the requested storage.
    ///
    /// Currently only returned by [`CowVec::try_reserve`](crate::CowVec::try_reserve).
    Alloc,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::Alloc => f.write_str("allocation failed"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds);
        assert!(s.contains("out of bounds"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::Full.to_string(), "capacity exceeded");
        assert_eq!(Error::Alloc.to_string(), "allocation failed");
    }
}
