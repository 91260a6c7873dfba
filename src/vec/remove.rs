// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CopyDynVec};

impl<T: Copy> CopyDynVec<T> {
    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Returns `None` if `index >= len`. `O(len - index)`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let removed = *self.as_slice().get(index)?;
        self.remove_span(index, index + 1);
        Some(removed)
    }

    /// Removes and returns the element at `index`, moving the last element
    /// into its place.
    ///
    /// `O(1)` but does not preserve order. Returns `None` if `index >= len`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let last = self.len - 1;
        self.buf.swap(index, last);
        self.len = last;
        Some(self.buf[last])
    }

    /// Like [`remove`](Self::remove), but reports [`Error::OutOfRange`].
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or_else(|| self.out_of_range(index))
    }

    /// Like [`swap_remove`](Self::swap_remove), but reports [`Error::OutOfRange`].
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        self.swap_remove(index)
            .ok_or_else(|| self.out_of_range(index))
    }
}
