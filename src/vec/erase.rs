// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CopyDynVec};

// Core imports
use core::ops::{Bound, Range, RangeBounds};

/// Converts `range` to `(start, end)` against `len` without validating it.
///
/// Bounds that overflow `usize` saturate, which always lands past `len`.
pub(crate) fn span_bounds<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i.saturating_add(1),
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    (start, end)
}

/// Resolves `range` against `len` into a half-open `start..end`, or
/// [`Error::InvalidRange`] when `start > end` or `end > len`.
fn resolve_range<R: RangeBounds<usize>>(
    range: &R,
    len: usize,
) -> Result<Range<usize>, Error> {
    match span_bounds(range, len) {
        (start, end) if start <= end && end <= len => Ok(start..end),
        (start, end) => Err(Error::InvalidRange { start, end, len }),
    }
}

impl<T: Copy> CopyDynVec<T> {
    /// Removes the elements in `range`, shifting the tail left to close the gap.
    ///
    /// The length decreases by the size of the range and the capacity is left
    /// unchanged. An empty range (`i..i` with `i <= len`) is a no-op.
    ///
    /// Returns [`Error::InvalidRange`] if `start > end` or `end > len`; the
    /// vector is left unchanged. This is the non-panicking counterpart of
    /// [`drain`](Self::drain) for callers that do not need the removed values.
    ///
    /// # Examples
    /// ```
    /// # use copy_dyn_vec::CopyDynVec;
    /// let mut v = CopyDynVec::from([1, 2, 3, 4, 5]);
    /// v.erase_range(1..3).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 4, 5]);
    /// assert!(v.erase_range(2..9).is_err());
    /// ```
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<(), Error> {
        let Range { start, end } = resolve_range(&range, self.len)?;
        self.remove_span(start, end);
        Ok(())
    }

    /// Removes the already-validated span `[start, end)`.
    pub(crate) fn remove_span(&mut self, start: usize, end: usize) {
        let len = self.len;
        if end < len {
            self.buf.copy_within(end..len, start);
        }
        self.len = len - (end - start);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{CopyDynVec, Error};
    use core::ops::Bound;

    #[test]
    fn test_erase_shifts_tail_and_keeps_capacity() {
        let mut v: CopyDynVec<i32> = (1..=8).collect();
        v.reserve(20);
        v.erase_range(2..5).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 6, 7, 8]);
        assert_eq!(v.capacity(), 20);

        v.erase_range(..=0).unwrap();
        v.erase_range(3..).unwrap();
        assert_eq!(v.as_slice(), &[2, 6, 7]);
    }

    #[test]
    fn test_erased_slots_do_not_reappear() {
        let mut v: CopyDynVec<u8> = CopyDynVec::from([1, 2, 3, 4]);
        v.erase_range(1..).unwrap();
        v.resize(4);
        assert_eq!(v.as_slice(), &[1, 0, 0, 0]);
    }

    #[test]
    fn test_empty_spans_are_accepted_anywhere_up_to_len() {
        let mut v: CopyDynVec<i32> = CopyDynVec::from([4, 5]);
        for i in 0..=2 {
            assert_eq!(v.erase_range(i..i), Ok(()));
        }
        assert_eq!(v.as_slice(), &[4, 5]);

        let mut empty: CopyDynVec<i32> = CopyDynVec::new();
        assert_eq!(empty.erase_range(..), Ok(()));
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_invalid_spans_report_resolved_bounds() {
        let mut v: CopyDynVec<i32> = CopyDynVec::with_capacity(10);
        v.extend_from_slice(&[1, 2, 3]);
        let cases = [
            (v.erase_range(2..1), (2, 1)),
            (v.erase_range(1..=3), (1, 4)),
            (v.erase_range(4..), (4, 3)),
            (v.erase_range(0..9), (0, 9)),
        ];
        for (res, (start, end)) in cases {
            assert_eq!(res, Err(Error::InvalidRange { start, end, len: 3 }));
        }
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_saturating_bounds_are_rejected() {
        let mut v: CopyDynVec<i32> = CopyDynVec::from([1, 2]);
        assert!(v.erase_range(..=usize::MAX).is_err());
        assert!(
            v.erase_range((Bound::Excluded(usize::MAX), Bound::Unbounded))
                .is_err()
        );
        assert_eq!(v.len(), 2);
    }
}
