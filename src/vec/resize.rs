// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CopyDynVec};

impl<T: Copy + Default> CopyDynVec<T> {
    /// Resizes to `new_len`, filling new slots with `T::default()` when growing.
    ///
    /// Shrinking keeps the prefix `[0..new_len)` and the capacity; resizing
    /// to the current length is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot grow; see [`try_resize`](Self::try_resize).
    #[inline]
    pub fn resize(&mut self, new_len: usize) {
        self.resize_with_value(new_len, T::default());
    }

    /// Resizes to `new_len`, filling new slots with `value` when growing.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot grow; see [`try_resize`](Self::try_resize).
    #[inline]
    pub fn resize_with_value(&mut self, new_len: usize, value: T) {
        if let Err(e) = self.try_resize(new_len, value) {
            panic!("{e}");
        }
    }

    /// Fallible variant of [`resize_with_value`](Self::resize_with_value).
    ///
    /// Returns [`Error::CapacityOverflow`] if `new_len > max_size()` or
    /// [`Error::AllocFailed`] if the buffer cannot grow, leaving the vector
    /// unchanged.
    pub fn try_resize(&mut self, new_len: usize, value: T) -> Result<(), Error> {
        let len = self.len;
        if new_len <= len {
            self.len = new_len;
            return Ok(());
        }
        self.grow_for(new_len - len)?;
        // Slots past `len` may hold stale values from earlier truncations.
        self.buf[len..new_len].fill(value);
        self.len = new_len;
        Ok(())
    }
}
