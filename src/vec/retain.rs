// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CopyDynVec;

impl<T: Copy> CopyDynVec<T> {
    /// Keeps only the elements for which `keep` returns `true`.
    ///
    /// Survivors keep their relative order and `keep` sees every element
    /// exactly once, front to back. Works in place; the capacity is unchanged.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let len = self.len;
        let mut kept = 0;
        for i in 0..len {
            let item = self.buf[i];
            if keep(&item) {
                self.buf[kept] = item;
                kept += 1;
            }
        }
        self.len = kept;
    }
}
