// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CopyDynVec};

impl<T: Copy + Default> CopyDynVec<T> {
    /// Appends `value`, growing the buffer if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot grow: `"capacity overflow"` past
    /// `max_size()`, or the [`Error::AllocFailed`] message.
    #[inline]
    pub fn push(&mut self, value: T) {
        if let Err(e) = self.try_push(value) {
            panic!("{e}");
        }
    }

    /// Appends `value`, returning [`Error::CapacityOverflow`] or
    /// [`Error::AllocFailed`] instead of panicking when the buffer cannot grow.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), Error> {
        self.grow_for(1)?;
        let slot = self.len;
        self.buf[slot] = value;
        self.len = slot + 1;
        Ok(())
    }
}
