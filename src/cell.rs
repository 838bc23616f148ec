// This file is part of cow-containers.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `CowCell` type: a copy-on-write cell for a single value.
//!
//! `CowCell<T>` wraps one instance of `T` behind a shared, atomically
//! reference-counted handle. Copying the cell is O(1) and shares storage;
//! the value itself is deep-copied at most once, on the first write through
//! a shared handle.
//!
//! Reads never copy and never change the reference count. Writes go through
//! [`CowCell::write`], which detaches shared storage before handing out the
//! mutable reference, so a mutation can never be observed through another
//! handle.

// Alloc imports
use alloc::sync::Arc;

// Core imports
use core::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
};

// External imports - static_assertions
use static_assertions::assert_impl_all;

/// A copy-on-write cell holding a single shared value.
///
/// Cloning a `CowCell` shares the underlying storage and increments the
/// reference count; no value copy takes place. The first mutating call on a
/// shared handle ([`write`](CowCell::write), [`set`](CowCell::set),
/// [`ensure_unique`](CowCell::ensure_unique)) deep-copies the value into
/// newly owned storage, after which further mutation through that handle is
/// free until it is shared again.
///
/// The reference count is atomic, so handles referencing the same storage
/// may be cloned and dropped from different threads. Mutating one logical
/// value concurrently through handles that have not yet diverged is still
/// the caller's responsibility to synchronize.
pub struct CowCell<T> {
    inner: Arc<T>,
}

assert_impl_all!(CowCell<i32>: Send, Sync);

impl<T> CowCell<T> {
    /// Wraps `value` in fresh, uniquely owned storage.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Returns a read-only view of the value. Never copies.
    #[inline]
    pub fn read(&self) -> &T {
        &self.inner
    }

    /// Returns the address of the underlying storage.
    ///
    /// Two cells report the same address exactly when they share storage.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        Arc::as_ptr(&self.inner)
    }

    /// Returns the number of handles referencing this cell's storage.
    #[inline]
    pub fn use_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Returns `true` if this handle is the sole owner of its storage.
    #[inline]
    pub fn unique(&self) -> bool {
        Arc::strong_count(&self.inner) == 1
    }
}

impl<T: Clone> CowCell<T> {
    /// Returns a mutable view of the value, detaching first if shared.
    ///
    /// O(1) when unique; one deep copy of `T` on the first write after the
    /// cell was shared.
    #[inline]
    pub fn write(&mut self) -> &mut T {
        Arc::make_mut(&mut self.inner)
    }

    /// Detaches shared storage without returning a reference.
    ///
    /// After this call `self.unique()` holds. No-op when already unique.
    pub fn ensure_unique(&mut self) {
        if !self.unique() {
            self.inner = Arc::new((*self.inner).clone());
        }
    }

    /// Replaces the value.
    ///
    /// Overwrites in place when unique; detaches to fresh storage holding
    /// `value` when shared, leaving the previous value untouched for the
    /// other owners.
    pub fn set(&mut self, value: T) {
        match Arc::get_mut(&mut self.inner) {
            Some(slot) => *slot = value,
            None => self.inner = Arc::new(value),
        }
    }

    /// Consumes the cell and returns the value.
    ///
    /// Unwraps without copying when unique; clones when shared.
    pub fn into_inner(self) -> T {
        Arc::try_unwrap(self.inner).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<T: Default> Default for CowCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for CowCell<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// Cloning the cell shares storage; the value is not copied.
impl<T> Clone for CowCell<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Deref for CowCell<T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.read()
    }
}

impl<T> AsRef<T> for CowCell<T> {
    fn as_ref(&self) -> &T {
        self.read()
    }
}

impl<T> Borrow<T> for CowCell<T> {
    fn borrow(&self) -> &T {
        self.read()
    }
}

impl<T: fmt::Debug> fmt::Debug for CowCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CowCell")
            .field("use_count", &self.use_count())
            .field("value", self.read())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for CowCell<T> {
    /// Storage identity is checked first as a shortcut; the contract is
    /// value equality.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.read() == other.read()
    }
}
impl<T: Eq> Eq for CowCell<T> {}

impl<T: PartialEq> PartialEq<T> for CowCell<T> {
    fn eq(&self, other: &T) -> bool {
        self.read() == other
    }
}

impl<T: Hash> Hash for CowCell<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.read().hash(state)
    }
}
