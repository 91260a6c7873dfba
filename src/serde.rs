// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`CopyDynVec`](crate::CopyDynVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`); the
//!   capacity is not part of the serialized form.
//! - **Deserialize**: from any sequence, growing as needed.
//!
//! ### Trait bounds
//!
//! `CopyDynVec<T>` is only defined for `T: Copy`. Deserializing additionally
//! requires `T: Deserialize<'de> + Default`, since growth initializes new slots
//! with `T::default()`.
//!
//! The sequence's size hint is used to pre-allocate, capped at
//! [`MAX_PREALLOC`] elements so that an untrusted length prefix cannot force a
//! huge allocation before any element has been read.

// Crate imports
use crate::vec::CopyDynVec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Upper bound on elements pre-allocated from a sequence size hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Copy + Serialize> Serialize for CopyDynVec<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.iter())
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for VecVisitor<T>
where
    T: Deserialize<'de> + Copy + Default,
{
    type Value = CopyDynVec<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("array or sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = CopyDynVec::<T>::new();
        out.try_reserve(hint)
            .map_err(<A::Error as de::Error>::custom)?;
        while let Some(elem) = seq.next_element()? {
            out.try_push(elem)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for CopyDynVec<T>
where
    T: Deserialize<'de> + Copy + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{CopyDynVec, MAX_PREALLOC};
    use alloc::vec::Vec;

    #[test]
    fn test_json_shape_is_a_plain_array() {
        let mut v: CopyDynVec<i32> = CopyDynVec::with_capacity(10);
        v.extend_from_slice(&[1, 2, 3, 4]);
        v.truncate(3);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,2,3]");
        assert_eq!(serde_json::to_string(&CopyDynVec::<i32>::new()).unwrap(), "[]");
    }

    #[test]
    fn test_deserialize_from_json_array() {
        let v: CopyDynVec<u8> = serde_json::from_str("[4,5,6]").unwrap();
        assert_eq!(v.as_slice(), &[4, 5, 6]);
        assert!(v.capacity() >= 3);

        let empty: CopyDynVec<u8> = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn test_deserialize_grows_past_preallocation_cap() {
        let n = MAX_PREALLOC as u32 * 2 + 1;
        let json = serde_json::to_string(&(0..n).collect::<Vec<u32>>()).unwrap();
        let v: CopyDynVec<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(v.len(), n as usize);
        assert!(v.iter().copied().eq(0..n));
    }

    #[test]
    fn test_roundtrip_through_value_matches_vec() {
        let v: CopyDynVec<(u8, bool)> = CopyDynVec::from([(1, true), (2, false)]);
        let value = serde_json::to_value(&v).unwrap();
        assert_eq!(value, serde_json::json!([[1, true], [2, false]]));
        let back: CopyDynVec<(u8, bool)> = serde_json::from_value(value).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_non_sequence_input_is_rejected() {
        let err = serde_json::from_str::<CopyDynVec<i32>>("{\"a\":1}").unwrap_err();
        assert!(err.to_string().contains("array or sequence"), "{err}");

        let err = serde_json::from_str::<CopyDynVec<u8>>("[1,256]").unwrap_err();
        assert!(err.is_data());
    }
}
