// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CopyDynVec};

impl<T: Copy> CopyDynVec<T> {
    /// Bounds-checked access.
    ///
    /// Returns [`Error::OutOfRange`] when `index >= len()`, which includes
    /// every index of an empty vector and every slot of spare capacity.
    /// Never mutates the vector.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Mutable bounds-checked access; see [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let err = self.out_of_range(index);
        self.as_mut_slice().get_mut(index).ok_or(err)
    }

    /// The [`Error::OutOfRange`] reported for `index` at the current length.
    #[inline]
    pub(crate) fn out_of_range(&self, index: usize) -> Error {
        Error::OutOfRange {
            index,
            len: self.len,
        }
    }
}
