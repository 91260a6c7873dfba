// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `copy-dyn-vec`
//!
//! A `no_std` + `alloc`, growable, heap-backed vector type for `Copy` elements,
//! **with no `unsafe`**.
//!
//! The core type, [`CopyDynVec<T>`], stores its elements in a single boxed
//! slice and tracks a logical length `len <= capacity`. Growth is amortized
//! (capacity at least doubles on reallocation), so appending is `O(1)`
//! amortized.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - Elements are small and `Copy` (integers, ids, small POD structs).
//! - You want a `Vec`-like container whose size/capacity accounting is explicit
//!   and whose growth failures, including a refused allocation, can be
//!   observed as values (`try_*` methods) rather than aborts.
//! - You want bounds-checked access that returns an error instead of panicking
//!   ([`CopyDynVec::at`]).
//!
//! It may not be the best fit if:
//!
//! - Elements are not `Copy` or need drop semantics.
//! - Elements have an expensive `Default`: every allocated slot is initialized
//!   with `T::default()`, which is `O(capacity)` per reallocation.
//!
//! ## Storage and safety
//!
//! - Storage is `Box<[T]>`, fully initialized with `T::default()` whenever it
//!   is (re)allocated. Only the prefix `[0..len)` is visible.
//! - The crate is `no_std` (it needs `alloc`) and `#![forbid(unsafe_code)]`.
//! - [`CopyDynVec::new`] does not allocate.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `CopyDynVec<T>`.
//!   - Requires `T: Deserialize<'de> + Copy + Default`.
//!
//! ## High-level semantics
//!
//! - `capacity() >= len()` and `max_size() >= len()` always hold.
//! - [`CopyDynVec::reserve`] takes a **total** capacity, not an additional
//!   element count.
//! - [`CopyDynVec::resize`] fills new slots with `T::default()`.
//! - [`CopyDynVec::clear`] keeps the allocation.
//! - Cloning produces an independent copy; no storage is ever shared.
//! - Growth fails when the required capacity exceeds [`CopyDynVec::max_size`]
//!   ([`Error::CapacityOverflow`]) or the allocator refuses the new buffer
//!   ([`Error::AllocFailed`]). Every buffer is requested through
//!   `Vec::try_reserve_exact`, so neither case aborts the process.
//!   - **Infallible** ([`CopyDynVec::push`], [`CopyDynVec::reserve`],
//!     [`CopyDynVec::resize`], [`CopyDynVec::extend_from_slice`], …) panic
//!     with the error's message.
//!   - **Fallible** ([`CopyDynVec::try_push`], [`CopyDynVec::try_reserve`],
//!     [`CopyDynVec::try_resize`], [`CopyDynVec::try_extend_from_slice`],
//!     [`CopyDynVec::insert`]) return the error and leave the vector unchanged.
//!
//! ## Range and indexing behavior
//!
//! - `v[i]` and `v[a..b]` go through the slice of live elements, so they
//!   **panic** on anything past `len` (spare capacity included) or on an
//!   inverted range.
//! - Slice methods (`get`, `first`, `iter`, `contains`, `sort`, …) are
//!   reached through `Deref<Target = [T]>` and see the same live elements.
//! - [`CopyDynVec::at`] / [`CopyDynVec::at_mut`] are the checked accessors and
//!   return [`Error::OutOfRange`].
//! - [`CopyDynVec::drain`] behaves like `Vec::drain` and panics on invalid
//!   ranges; [`CopyDynVec::erase_range`] removes the same ranges but returns
//!   [`Error::InvalidRange`] instead of panicking.
//!
//! ## Example
//!
//! ```rust
//! use copy_dyn_vec::{CopyDynVec, Error};
//!
//! let mut v: CopyDynVec<i32> = CopyDynVec::new();
//! v.push(10);
//! v.push(20);
//! v.resize(1);
//! assert_eq!(v.at(0), Ok(&10));
//! assert_eq!(v.at(1), Err(Error::OutOfRange { index: 1, len: 1 }));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::{CopyDynVec, Drain};
