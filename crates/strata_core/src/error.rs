//! # Arena Error Types
//!
//! All errors that can occur while allocating from or reading an arena.

use thiserror::Error;

/// Errors that can occur in the arena.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// The request does not fit in the space left before `capacity`.
    #[error("arena full: requested {requested} bytes, {remaining} of {capacity} remaining")]
    OutOfCapacity {
        /// Bytes asked for.
        requested: usize,
        /// Bytes still free at the time of the request.
        remaining: usize,
        /// Total arena capacity.
        capacity: usize,
    },

    /// The handle was issued before the last reset, or points outside the live region.
    #[error("stale handle: [{offset}, +{len}) from generation {generation}, arena is at generation {current}")]
    StaleHandle {
        /// Start of the chunk.
        offset: usize,
        /// Length of the chunk.
        len: usize,
        /// Generation the handle was issued in.
        generation: u32,
        /// Current arena generation.
        current: u32,
    },

    /// Typed read of a chunk whose length does not match the type.
    #[error("size mismatch: expected {expected} bytes, chunk holds {actual}")]
    SizeMismatch {
        /// Size of the requested type.
        expected: usize,
        /// Length of the chunk.
        actual: usize,
    },

    /// Payload too long for a `u32` length prefix.
    #[error("payload of {len} bytes does not fit a u32 length prefix")]
    TooLarge {
        /// Length of the payload.
        len: usize,
    },

    /// A NUL-terminated payload contains a zero byte.
    #[error("payload contains a NUL byte at position {position}")]
    InteriorNul {
        /// Index of the first zero byte.
        position: usize,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ArenaError {
    /// Returns true for the one allocation failure, which callers recover from
    /// by resetting the arena or reporting "arena full".
    #[inline]
    #[must_use]
    pub const fn is_out_of_capacity(&self) -> bool {
        matches!(self, Self::OutOfCapacity { .. })
    }
}

/// Result type for arena operations.
pub type ArenaResult<T> = Result<T, ArenaError>;
