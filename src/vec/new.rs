// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Alloc imports
use alloc::boxed::Box;

// Crate imports
use crate::vec::CopyDynVec;

impl<T: Copy> CopyDynVec<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: Box::default(),
            len: 0,
        }
    }
}

impl<T: Copy + Default> CopyDynVec<T> {
    /// Constructs an empty vector with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity > max_size()` or the buffer cannot be allocated.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut v = Self::new();
        v.reserve(capacity);
        v
    }
}

impl<T: Copy> Default for CopyDynVec<T> {
    fn default() -> Self {
        Self::new()
    }
}
