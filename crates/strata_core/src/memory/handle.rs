//! # Chunk Handles
//!
//! A handle names one allocated region by position, not by address:
//! - Offset and length within the arena buffer
//! - The reset generation it was issued in, for detecting stale use

use std::ops::Range;

/// Handle to a chunk returned by a successful allocation.
///
/// Handles are plain values. They stay valid until the arena that issued
/// them is reset; after that every access through the arena reports
/// [`ArenaError::StaleHandle`](crate::ArenaError::StaleHandle).
///
/// A handle carries no reference to its arena. Presenting it to a
/// different arena is a caller error the arena cannot always detect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkHandle {
    /// Start of the chunk in the arena buffer.
    offset: usize,
    /// Length of the chunk in bytes.
    len: usize,
    /// Arena generation at allocation time.
    generation: u32,
}

impl ChunkHandle {
    #[inline]
    pub(crate) const fn new(offset: usize, len: usize, generation: u32) -> Self {
        Self {
            offset,
            len,
            generation,
        }
    }

    /// Returns the start of the chunk.
    #[inline]
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Returns the chunk length in bytes.
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Returns true for a zero-length chunk.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Returns one past the last byte of the chunk.
    #[inline]
    #[must_use]
    pub const fn end(self) -> usize {
        self.offset + self.len
    }

    /// Returns the generation the chunk was allocated in.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }

    /// Returns the byte range `[offset, offset + len)`.
    #[inline]
    #[must_use]
    pub const fn range(self) -> Range<usize> {
        self.offset..self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_bounds() {
        let handle = ChunkHandle::new(4, 8, 2);
        assert_eq!(handle.offset(), 4);
        assert_eq!(handle.len(), 8);
        assert_eq!(handle.end(), 12);
        assert_eq!(handle.range(), 4..12);
        assert_eq!(handle.generation(), 2);
        assert!(!handle.is_empty());
    }

    #[test]
    fn test_generation_distinguishes_handles() {
        let a = ChunkHandle::new(0, 4, 0);
        let b = ChunkHandle::new(0, 4, 1);
        assert_ne!(a, b);
    }
}
