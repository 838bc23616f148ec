// This file is part of cow-containers.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `cow-containers`
//!
//! Copy-on-write value and vector containers with shared, reference-counted
//! storage, plus a fixed-capacity inline vector and assorted container
//! helpers. `no_std` + `alloc`.
//!
//! The core types implement shared, lazily-duplicated value semantics:
//!
//! - [`CowCell<T>`] wraps a single value behind an atomically
//!   reference-counted handle. Copying the cell is O(1) and shares storage;
//!   the value is deep-copied at most once, on the first write through a
//!   shared handle.
//! - [`CowVec<T>`] applies the same discipline to a growable sequence,
//!   with the full positional surface (indexing, insertion and erasure at
//!   arbitrary positions, resize, reserve) gated on a uniqueness check so
//!   that mutation through one handle can never be observed through
//!   another.
//!
//! ## When to use these types
//!
//! They may be useful when:
//!
//! - Values are logically copied far more often than they are mutated
//!   (snapshots, configuration, undo states, fan-out to readers).
//! - Copies must be cheap and mutation affordable, rather than the other
//!   way around.
//! - You want aliasing surprises ruled out: divergence is automatic on the
//!   first write, and reads never see another handle's mutations.
//!
//! They are not a synchronization primitive: the reference count is atomic
//! and handles may be cloned/dropped across threads, but mutating one
//! logical value concurrently through not-yet-diverged handles still needs
//! caller-side coordination.
//!
//! ## Sharing semantics
//!
//! Each handle is either **unique** (`use_count() == 1`) or **shared**.
//! Cloning a handle shares storage; the first mutating call on a shared
//! handle detaches (deep-copies the contents into fresh storage),
//! preserving element values and order. Reads never detach, and a handful
//! of mutators skip the detach when they would change nothing
//! ([`CowVec::resize`] to the current length, [`CowVec::reserve`] under
//! the current capacity, an empty [`CowVec::assign`]).
//!
//! ## Also included
//!
//! - [`FixedVec<T, N>`]: a fixed-capacity vector with inline storage and
//!   fallible capacity-sensitive operations.
//! - [`algorithms`]: free-standing container algorithms (searching,
//!   uniqueness, erasure by value).
//! - [`parallel`] (feature `parallel`): thread-chunked `for`/`for_each`
//!   helpers that split work into contiguous chunks, one scoped thread
//!   per chunk.
//!
//! ## Features
//!
//! - `serde`
//!   - `Serialize`/`Deserialize` for [`CowCell`] (transparent) and
//!     [`CowVec`] (as a sequence). Deserialization always yields unique
//!     storage.
//! - `parallel`
//!   - Enables the [`parallel`] module. Requires `std` and pulls in
//!     `num_cpus` for thread-count discovery.
//!
//! ## Example
//!
//! ```rust
//! use cow_containers::CowVec;
//!
//! let a = CowVec::from(vec![10, 20, 30]);
//! let mut b = a.clone();                // O(1), shares storage
//! assert_eq!(a.use_count(), 2);
//!
//! b.insert(1, 99).unwrap();             // detaches before mutating
//! assert_eq!(b.as_slice(), &[10, 99, 20, 30]);
//! assert_eq!(a.as_slice(), &[10, 20, 30]);
//! assert!(a.unique() && b.unique());
//! ```

#![cfg_attr(not(any(test, feature = "parallel")), no_std)]

extern crate alloc;

// Modules
pub mod algorithms;
mod cell;
mod error;
mod fixed;
mod index;
mod iter;
#[cfg(feature = "parallel")]
pub mod parallel;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use cell::CowCell;
pub use error::Error;
pub use fixed::FixedVec;
pub use iter::IntoIter;
pub use vec::{CowVec, WriteSlice};
