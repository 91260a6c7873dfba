// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CopyDynVec};

impl<T: Copy + Default> Extend<T> for CopyDynVec<T> {
    /// Appends every item, growing as needed.
    ///
    /// Pre-grows by the iterator's lower size bound using the amortized policy.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Err(e) = self.grow_for(lower) {
            panic!("{e}");
        }
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for CopyDynVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Copy + Default> CopyDynVec<T> {
    /// Appends all of `src`, growing as needed.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot grow; see
    /// [`try_extend_from_slice`](Self::try_extend_from_slice).
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) {
        if let Err(e) = self.try_extend_from_slice(src) {
            panic!("{e}");
        }
    }

    /// Appends all of `src`, or nothing: returns [`Error::CapacityOverflow`]
    /// past `max_size()` and [`Error::AllocFailed`] when the allocator refuses,
    /// leaving the vector unchanged in both cases.
    #[inline]
    pub fn try_extend_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        self.grow_for(src.len())?;
        let end = self.len + src.len();
        self.buf[self.len..end].copy_from_slice(src);
        self.len = end;
        Ok(())
    }
}
