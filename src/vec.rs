// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `CopyDynVec` type and its inherent API.
//!
//! `CopyDynVec<T>` is a growable vector specialized for `Copy` types.
//! It stores elements in a fully-initialized boxed slice and tracks a logical
//! length. Methods generally mirror slice/vector semantics, with explicit
//! capacity accounting and fallible variants where appropriate.

mod at;
mod drain;
mod erase;
mod extend;
mod from;
mod growth;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod resize;
mod retain;
mod slice;
mod split_off;

pub use self::drain::Drain;

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, heap-allocated vector for `Copy` types.
///
/// `CopyDynVec<T>` stores its elements in a single boxed slice of length
/// `capacity()` and tracks a logical length `len <= capacity()`.
///
/// - capacity grows automatically (amortized doubling) as elements are added;
/// - `T: Copy` is required; growth additionally requires `T: Default`, used to
///   initialize freshly allocated slots;
/// - many methods mirror `Vec`/slice semantics where they make sense;
/// - no `unsafe` code is involved anywhere.
///
/// # Layout and invariants
///
/// Internally, `CopyDynVec<T>` maintains:
///
/// - a backing buffer `Box<[T]>` whose length is the capacity, every slot of
///   which holds a valid `T`; and
/// - a logical length `len` with `0 <= len <= capacity() <= max_size()`.
///
/// Only the prefix `buf[..len]` is visible through the public API. Methods
/// such as [`as_slice`](CopyDynVec::as_slice), indexing, comparison, hashing
/// and iteration are all restricted to this prefix.
///
/// # Complexity characteristics
///
/// - [`new`](CopyDynVec::new) does not allocate.
/// - [`push`](CopyDynVec::push) is amortized `O(1)`: when the buffer is full the
///   capacity at least doubles (minimum non-zero capacity 4).
/// - Reallocation is `O(new_capacity)` because new slots are filled with
///   `T::default()`.
/// - [`insert`](CopyDynVec::insert), [`remove`](CopyDynVec::remove),
///   [`erase_range`](CopyDynVec::erase_range) and [`retain`](CopyDynVec::retain)
///   are `O(len)`.
///
/// # Infallible vs fallible growth
///
/// Growth fails when the required capacity exceeds
/// [`max_size`](CopyDynVec::max_size) or when the allocator cannot provide the
/// buffer.
///
/// - **Infallible** (panic with the error's message):
///   [`push`](CopyDynVec::push), [`reserve`](CopyDynVec::reserve),
///   [`resize`](CopyDynVec::resize),
///   [`resize_with_value`](CopyDynVec::resize_with_value),
///   [`extend_from_slice`](CopyDynVec::extend_from_slice) and
///   [`Extend<T>`](core::iter::Extend).
/// - **Fallible** (return [`Error::CapacityOverflow`](crate::Error::CapacityOverflow)
///   or [`Error::AllocFailed`](crate::Error::AllocFailed) and leave the vector
///   unchanged): [`try_push`](CopyDynVec::try_push),
///   [`try_reserve`](CopyDynVec::try_reserve),
///   [`try_resize`](CopyDynVec::try_resize),
///   [`try_extend_from_slice`](CopyDynVec::try_extend_from_slice) and
///   [`insert`](CopyDynVec::insert).
///
/// Cloning allocates a fresh buffer sized to `len`; clones never share storage.
///
/// # Examples
///
/// ```rust
/// use copy_dyn_vec::CopyDynVec;
///
/// let mut v: CopyDynVec<i32> = CopyDynVec::new();
/// v.reserve(50);
/// assert_eq!(v.len(), 0);
/// assert!(v.capacity() >= 50);
///
/// v.extend_from_slice(&[1, 2, 3]);
/// let copy = v.clone();
/// v.push(4);
/// assert_eq!(copy.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
/// ```
pub struct CopyDynVec<T: Copy> {
    pub(crate) buf: Box<[T]>,
    pub(crate) len: usize,
}

impl<T: Copy> CopyDynVec<T> {
    /// Returns the number of elements the vector can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of elements that can be pushed
    /// without reallocating.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        self.capacity() - self.len
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for CopyDynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyDynVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

// Equality, ordering and hashing see only `[0..len)`; capacity and stale
// slots never participate.
impl<T: Copy + PartialEq> PartialEq for CopyDynVec<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}
impl<T: Copy + PartialEq> PartialEq<[T]> for CopyDynVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        **self == *other
    }
}
impl<T: Copy + PartialEq, const M: usize> PartialEq<[T; M]> for CopyDynVec<T> {
    fn eq(&self, other: &[T; M]) -> bool {
        **self == other[..]
    }
}
impl<T: Copy + Eq> Eq for CopyDynVec<T> {}
impl<T: Copy + Ord> Ord for CopyDynVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}
impl<T: Copy + PartialOrd> PartialOrd for CopyDynVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}
impl<T: Copy + Hash> Hash for CopyDynVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state)
    }
}

impl<T: Copy> Clone for CopyDynVec<T> {
    /// Copies the live prefix into a new buffer with `capacity == len`.
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }

    /// Reuses `self`'s allocation when it is large enough for `source`.
    fn clone_from(&mut self, source: &Self) {
        if self.capacity() < source.len {
            *self = source.clone();
            return;
        }
        let len = source.len;
        self.buf[..len].copy_from_slice(source.as_slice());
        self.len = len;
    }
}

impl<T: Copy> CopyDynVec<T> {
    /// Empties the vector. The allocation is kept for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Overwrites `[0..len)` with `value`, then empties the vector.
    ///
    /// Useful to scrub the old contents out of a buffer that is being kept.
    #[inline]
    pub fn clear_to(&mut self, value: T) {
        self.as_mut_slice().fill(value);
        self.len = 0;
    }

    /// Drops every element from `new_len` on; a no-op if `new_len >= len`.
    /// The allocation is kept.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }
}

// Slice methods (`get`, `first`, `iter`, `contains`, `sort`, ...) come through
// here and only ever see `[0..len)`.
impl<T: Copy> Deref for CopyDynVec<T> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Copy> DerefMut for CopyDynVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: Copy> AsRef<[T]> for CopyDynVec<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}
impl<T: Copy> AsMut<[T]> for CopyDynVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

// Lets `CopyDynVec<T>` key maps that are looked up by `&[T]`.
impl<T: Copy> Borrow<[T]> for CopyDynVec<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}
impl<T: Copy> BorrowMut<[T]> for CopyDynVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}
