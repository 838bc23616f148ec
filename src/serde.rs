// This file is part of cow-containers.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`CowCell`](crate::CowCell) and
//! [`CowVec`](crate::CowVec).
//!
//! - `CowCell<T>` serializes transparently as its value; the handle layer
//!   does not appear in the encoded form.
//! - `CowVec<T>` serializes as a sequence of elements.
//! - Deserialization always produces fresh, uniquely owned storage;
//!   sharing is a property of live handles, not of the encoded data.

// Crate imports
use crate::{cell::CowCell, vec::CowVec};

// Alloc imports
use alloc::vec::Vec;

// External imports - serde
use serde::{ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for CowCell<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.read().serialize(s)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CowCell<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        T::deserialize(d).map(CowCell::new)
    }
}

impl<T: Serialize> Serialize for CowVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CowVec<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(d).map(CowVec::from)
    }
}
