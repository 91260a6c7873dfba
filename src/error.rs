// This file is part of copy-dyn-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `CopyDynVec`.
//!
//! Bounds, range and growth failures all come back as [`Error`], a small
//! `Copy` value implementing `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`CopyDynVec`](crate::CopyDynVec).
///
/// A method that returns one of these leaves the vector unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index or position was outside the current logical bounds.
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the vector at the time of the request.
        len: usize,
    },
    /// A range was inverted (`start > end`) or extended past the length.
    ///
    /// Bounds are resolved to a half-open `start..end` before being reported.
    InvalidRange {
        /// Resolved inclusive start of the range.
        start: usize,
        /// Resolved exclusive end of the range.
        end: usize,
        /// The length of the vector at the time of the request.
        len: usize,
    },
    /// The required capacity exceeds [`CopyDynVec::max_size`](crate::CopyDynVec::max_size).
    CapacityOverflow,
    /// The allocator could not provide a buffer of `capacity` elements.
    AllocFailed {
        /// Number of elements the failed buffer was sized for.
        capacity: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::InvalidRange { start, end, len } => {
                write!(f, "invalid range {start}..{end} for length {len}")
            }
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed { capacity } => {
                write!(f, "allocation of {capacity} elements failed")
            }
        }
    }
}

impl CoreError for Error {}
