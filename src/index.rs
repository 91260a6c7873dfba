// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`CopyDynVec`](crate::CopyDynVec).
//!
//! `Index` and `IndexMut` forward to the live slice, so they mirror slice
//! behavior exactly:
//! - panics on out-of-bounds;
//! - supports all standard range forms, including inclusive ranges;
//! - views are restricted to the live prefix `[0..len)`, never the spare
//!   capacity.
//!
//! Use [`CopyDynVec::at`](crate::CopyDynVec::at) for a non-panicking lookup.

// Crate imports
use crate::vec::CopyDynVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T: Copy, I: SliceIndex<[T]>> Index<I> for CopyDynVec<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T: Copy, I: SliceIndex<[T]>> IndexMut<I> for CopyDynVec<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
