// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Crate imports
use crate::vec::CopyDynVec;

impl<T: Copy> From<&[T]> for CopyDynVec<T> {
    /// Copies `src` into a new buffer with `capacity == src.len()`.
    fn from(src: &[T]) -> Self {
        Self {
            buf: Box::from(src),
            len: src.len(),
        }
    }
}

impl<T: Copy, const M: usize> From<[T; M]> for CopyDynVec<T> {
    fn from(src: [T; M]) -> Self {
        Self::from(&src[..])
    }
}

impl<T: Copy, const M: usize> From<&[T; M]> for CopyDynVec<T> {
    fn from(src: &[T; M]) -> Self {
        Self::from(&src[..])
    }
}

impl<T: Copy> From<Vec<T>> for CopyDynVec<T> {
    /// Takes over the vector's allocation after shrinking it to its length.
    fn from(v: Vec<T>) -> Self {
        let len = v.len();
        Self {
            buf: v.into_boxed_slice(),
            len,
        }
    }
}

impl<T: Copy> From<CopyDynVec<T>> for Vec<T> {
    fn from(v: CopyDynVec<T>) -> Self {
        v.into_vec()
    }
}

impl<T: Copy> CopyDynVec<T> {
    /// Converts into a `Vec<T>` holding the live prefix, reusing the allocation.
    ///
    /// The resulting `Vec` keeps the full capacity.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        let mut v = self.buf.into_vec();
        v.truncate(self.len);
        v
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::CopyDynVec;
    use alloc::{vec, vec::Vec};

    #[test]
    fn test_from_copies_are_exactly_sized() {
        let arr = [4u8, 5, 6];
        let a = CopyDynVec::from(arr);
        let b = CopyDynVec::from(&arr);
        let c = CopyDynVec::from(&arr[1..]);
        assert_eq!((a.capacity(), b.capacity(), c.capacity()), (3, 3, 2));
        assert_eq!(a, b);
        assert_eq!(c.as_slice(), &[5, 6]);
    }

    #[test]
    fn test_from_vec_drops_spare_capacity() {
        let mut src = Vec::with_capacity(32);
        src.extend_from_slice(&[1, 2, 3]);
        let v = CopyDynVec::from(src);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_into_vec_keeps_capacity_but_not_stale_slots() {
        let mut v: CopyDynVec<i32> = CopyDynVec::from([1, 2, 3, 4, 5, 6]);
        v.truncate(2);
        let out = v.into_vec();
        assert_eq!(out, vec![1, 2]);
        assert_eq!(out.capacity(), 6);

        let back: Vec<i32> = CopyDynVec::from(vec![7, 8]).into();
        assert_eq!(back, [7, 8]);
    }
}
