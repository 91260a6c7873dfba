// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`CopyDynVec`](crate::CopyDynVec).
//!
//! - [`IntoIter`] takes over the heap buffer and yields the live elements by
//!   value; it is double-ended, exact-size and fused.
//! - `&CopyDynVec` and `&mut CopyDynVec` iterate as slices.
//! - `FromIterator<T>` collects every item; the vector grows as needed.

// Alloc imports
use alloc::vec;

// Crate imports
use crate::vec::CopyDynVec;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `CopyDynVec::into_iter()`.
///
/// Takes over the vector's allocation; slots past `len` are never yielded.
#[derive(Debug, Clone)]
pub struct IntoIter<T: Copy> {
    inner: vec::IntoIter<T>,
}

impl<T: Copy> IntoIter<T> {
    /// Returns the elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T: Copy> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }

    #[inline]
    fn count(self) -> usize {
        self.inner.len()
    }
}

impl<T: Copy> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}

impl<T: Copy> ExactSizeIterator for IntoIter<T> {}
impl<T: Copy> FusedIterator for IntoIter<T> {}

impl<T: Copy> IntoIterator for CopyDynVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T: Copy> IntoIterator for &'a CopyDynVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Copy> IntoIterator for &'a mut CopyDynVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Copy + Default> FromIterator<T> for CopyDynVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
