// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CopyDynVec};

impl<T: Copy + Default> CopyDynVec<T> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot right.
    ///
    /// Grows the buffer when it is full. Errors leave the vector unchanged:
    /// - [`Error::OutOfRange`] if `index > len`;
    /// - [`Error::CapacityOverflow`] if the new length would exceed `max_size()`;
    /// - [`Error::AllocFailed`] if a larger buffer cannot be allocated.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.len;
        if index > len {
            return Err(self.out_of_range(index));
        }
        self.grow_for(1)?;
        self.buf.copy_within(index..len, index + 1);
        self.buf[index] = value;
        self.len = len + 1;
        Ok(())
    }
}
