// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CopyDynVec;

impl<T: Copy> CopyDynVec<T> {
    /// Removes and returns the last element, or `None` if the vector is empty.
    ///
    /// The slot stays allocated; the capacity is unchanged.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.len = last;
        Some(self.buf[last])
    }
}
