// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CopyDynVec;

impl<T: Copy> CopyDynVec<T> {
    /// Returns the elements `[0..len)` as a slice; spare capacity is excluded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Mutable counterpart of [`as_slice`](Self::as_slice).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }

    /// Returns a raw pointer to the start of the heap buffer.
    ///
    /// Valid for reads of `len()` elements until the vector reallocates or is
    /// dropped; dangling (but aligned) while nothing is allocated.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable counterpart of [`as_ptr`](Self::as_ptr).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }
}
