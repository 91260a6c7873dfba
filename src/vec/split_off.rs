// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CopyDynVec};

impl<T: Copy> CopyDynVec<T> {
    /// Moves the elements `[at..len)` into a new vector and returns it.
    ///
    /// `self` keeps the prefix and its whole allocation; the returned vector
    /// is sized exactly to the tail. Returns [`Error::OutOfRange`] if
    /// `at > len`, leaving `self` unchanged.
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        if at > self.len {
            return Err(self.out_of_range(at));
        }
        let tail = Self::from(&self[at..]);
        self.truncate(at);
        Ok(tail)
    }
}
