// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity management: the size ceiling, explicit reservation, shrinking and
//! the amortized growth policy used by every appending operation.
//!
//! Every new buffer is obtained through `Vec::try_reserve_exact`, so an
//! allocator failure surfaces as [`Error::AllocFailed`] instead of aborting.

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Crate imports
use crate::{error::Error, vec::CopyDynVec};

// Core imports
use core::mem::size_of;

/// Smallest capacity allocated when an empty buffer first has to grow.
const MIN_NON_ZERO_CAP: usize = 4;

impl<T: Copy> CopyDynVec<T> {
    /// Upper bound on `len` and `capacity`: no allocation may exceed
    /// `isize::MAX` bytes. Zero-sized types are bounded as if they were one byte.
    pub const MAX_SIZE: usize = isize::MAX as usize
        / if size_of::<T>() == 0 {
            1
        } else {
            size_of::<T>()
        };

    /// Returns [`Self::MAX_SIZE`], the theoretical maximum number of elements.
    ///
    /// Always `>= len()`. Reaching it is bounded by available memory long
    /// before the arithmetic limit.
    #[inline]
    pub const fn max_size(&self) -> usize {
        Self::MAX_SIZE
    }
}

impl<T: Copy + Default> CopyDynVec<T> {
    /// Ensures `capacity() >= min_capacity`.
    ///
    /// Unlike `Vec::reserve`, the argument is the **total** capacity wanted,
    /// not a count of additional elements. Reserves exactly `min_capacity`
    /// when growing; a no-op when the capacity is already sufficient. Length
    /// and contents are never changed.
    ///
    /// # Panics
    ///
    /// Panics with `"capacity overflow"` if `min_capacity > max_size()`, or
    /// with the [`Error::AllocFailed`] message if the allocator refuses.
    #[inline]
    pub fn reserve(&mut self, min_capacity: usize) {
        if let Err(e) = self.try_reserve(min_capacity) {
            panic!("{e}");
        }
    }

    /// Fallible variant of [`reserve`](Self::reserve).
    ///
    /// Returns [`Error::CapacityOverflow`] if `min_capacity > max_size()` and
    /// [`Error::AllocFailed`] if the allocator cannot provide the buffer. The
    /// vector is unchanged in both cases.
    pub fn try_reserve(&mut self, min_capacity: usize) -> Result<(), Error> {
        if min_capacity <= self.capacity() {
            return Ok(());
        }
        if min_capacity > Self::MAX_SIZE {
            return Err(Error::CapacityOverflow);
        }
        self.reallocate(min_capacity)
    }

    /// Shrinks the capacity to `len()`.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.shrink_to(0);
    }

    /// Shrinks the capacity to `max(min_capacity, len())`.
    ///
    /// A no-op if the capacity is already at or below that value. If the
    /// smaller buffer cannot be allocated the current one is kept.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        let target = min_capacity.max(self.len);
        if target < self.capacity() {
            // Keeping the larger buffer is a valid outcome of a failed shrink.
            let _ = self.reallocate(target);
        }
    }

    /// Makes room for `additional` more elements using the amortized policy:
    /// the new capacity is the largest of the required length, twice the old
    /// capacity and [`MIN_NON_ZERO_CAP`], clamped to [`Self::MAX_SIZE`].
    pub(crate) fn grow_for(&mut self, additional: usize) -> Result<(), Error> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        let cap = self.capacity();
        if required <= cap {
            return Ok(());
        }
        if required > Self::MAX_SIZE {
            return Err(Error::CapacityOverflow);
        }
        let new_cap = cap
            .saturating_mul(2)
            .max(required)
            .max(MIN_NON_ZERO_CAP)
            .min(Self::MAX_SIZE);
        self.reallocate(new_cap)
    }

    /// Moves the live prefix into a fresh buffer of exactly `new_cap` slots.
    ///
    /// On error the current buffer is untouched.
    fn reallocate(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap >= self.len);
        let mut buf = Self::allocate(new_cap)?;
        buf[..self.len].copy_from_slice(self.as_slice());
        self.buf = buf;
        Ok(())
    }

    /// Allocates `capacity` slots filled with `T::default()`.
    fn allocate(capacity: usize) -> Result<Box<[T]>, Error> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| Error::AllocFailed { capacity })?;
        slots.resize(capacity, T::default());
        Ok(slots.into_boxed_slice())
    }
}
