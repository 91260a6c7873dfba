// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Alloc imports
use alloc::vec;

// Crate imports
use crate::vec::{CopyDynVec, erase::span_bounds};

// Core imports
use core::{iter::FusedIterator, ops::RangeBounds};

/// Iterator returned by [`CopyDynVec::drain`].
///
/// The drained elements are copied out and removed from the parent before the
/// first call to `next`; the iterator keeps the parent mutably borrowed for
/// its lifetime so the two cannot be observed out of step.
pub struct Drain<'a, T: Copy> {
    _parent: &'a mut CopyDynVec<T>,
    taken: vec::IntoIter<T>,
}

impl<T: Copy> Drain<'_, T> {
    /// Returns the drained elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.taken.as_slice()
    }
}

impl<T: Copy> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.taken.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.taken.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.taken.nth(n)
    }
}

impl<T: Copy> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.taken.next_back()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.taken.nth_back(n)
    }
}

impl<T: Copy> ExactSizeIterator for Drain<'_, T> {}
impl<T: Copy> FusedIterator for Drain<'_, T> {}

impl<T: Copy> CopyDynVec<T> {
    /// Removes `range` from the vector and returns the removed elements as an
    /// iterator.
    ///
    /// The tail is shifted left immediately and the capacity is unchanged, so
    /// dropping the iterator early still leaves the elements removed.
    ///
    /// Follows [`Vec::drain`](alloc::vec::Vec::drain); use
    /// [`erase_range`](Self::erase_range) to get an error instead of a panic.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > self.len()`. An empty range is fine
    /// and yields nothing.
    ///
    /// # Examples
    /// ```
    /// # use copy_dyn_vec::CopyDynVec;
    /// let mut v = CopyDynVec::from([1, 2, 3, 4]);
    /// let drained: CopyDynVec<_> = v.drain(1..3).collect();
    /// assert_eq!(drained.as_slice(), &[2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 4]);
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        let (start, end) = span_bounds(&range, len);
        assert!(start <= end, "drain range start > end: {start} > {end}");
        assert!(end <= len, "drain range end {end} exceeds length {len}");

        let taken = self.as_slice()[start..end].to_vec();
        self.remove_span(start, end);

        Drain {
            _parent: self,
            taken: taken.into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::CopyDynVec;
    use alloc::vec::Vec;
    use core::ops::Bound;

    #[test]
    fn test_drain_keeps_capacity_and_refills_without_realloc() {
        let mut v: CopyDynVec<u32> = (0..10).collect();
        v.reserve(32);
        let ptr = v.as_ptr();

        let taken: Vec<u32> = v.drain(2..8).collect();
        assert_eq!(taken, [2, 3, 4, 5, 6, 7]);
        assert_eq!(v.as_slice(), &[0, 1, 8, 9]);
        assert_eq!(v.capacity(), 32);

        v.extend(100..120);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(&v[..4], &[0, 1, 8, 9]);
        assert_eq!(v.len(), 24);
    }

    #[test]
    fn test_drain_after_reallocation_sees_moved_elements() {
        let mut v: CopyDynVec<i32> = CopyDynVec::with_capacity(2);
        v.extend_from_slice(&[1, 2]);
        for x in 3..=9 {
            v.push(x);
        }
        let tail: Vec<i32> = v.drain(6..).collect();
        assert_eq!(tail, [7, 8, 9]);
        let head: Vec<i32> = v.drain(..=1).collect();
        assert_eq!(head, [1, 2]);
        assert_eq!(v.as_slice(), &[3, 4, 5, 6]);
    }

    #[test]
    fn test_dropping_drain_early_still_removes() {
        let mut v: CopyDynVec<u8> = CopyDynVec::from([5, 6, 7, 8, 9]);
        {
            let mut it = v.drain(1..4);
            assert_eq!(it.next(), Some(6));
            assert_eq!(it.as_slice(), &[7, 8]);
        }
        assert_eq!(v.as_slice(), &[5, 9]);
    }

    #[test]
    fn test_drain_from_both_ends() {
        let mut v: CopyDynVec<i32> = (1..=7).collect();
        let mut it = v.drain(1..6);
        assert_eq!(it.len(), 5);
        assert_eq!(it.nth_back(1), Some(5));
        assert_eq!(it.nth(1), Some(3));
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.next(), None);
        drop(it);
        assert_eq!(v.as_slice(), &[1, 7]);
    }

    #[test]
    fn test_drain_exotic_bounds() {
        let mut v: CopyDynVec<i32> = CopyDynVec::from([10, 20, 30, 40, 50]);
        let mid: Vec<i32> = v
            .drain((Bound::Excluded(0), Bound::Included(2)))
            .collect();
        assert_eq!(mid, [20, 30]);
        let none: Vec<i32> = v.drain(3..3).collect();
        assert!(none.is_empty());
        assert_eq!(v.as_slice(), &[10, 40, 50]);
    }

    #[test]
    #[should_panic(expected = "exceeds length")]
    fn test_drain_past_len_panics_even_within_capacity() {
        let mut v: CopyDynVec<i32> = CopyDynVec::with_capacity(16);
        v.extend_from_slice(&[1, 2, 3]);
        let _ = v.drain(1..5);
    }

    #[test]
    #[should_panic(expected = "start > end")]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_drain_inverted_range_panics() {
        let mut v: CopyDynVec<i32> = CopyDynVec::from([1, 2, 3]);
        let _ = v.drain(2..1);
    }
}
