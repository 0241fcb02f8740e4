//! # Live Region View
//!
//! Read-only, restartable view over the bytes in `[0, offset)`.

use std::iter::Copied;
use std::slice::{Chunks, Iter};

/// Read-only view of an arena's live bytes.
///
/// The view is `Copy`, so it can be iterated any number of times. It never
/// exposes bytes past the arena's offset. Formatting (hex, column width) is
/// left to the consumer; [`Dump::rows`] only splits the bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dump<'a> {
    bytes: &'a [u8],
}

impl<'a> Dump<'a> {
    #[inline]
    pub(crate) const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Returns the number of live bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if nothing has been allocated.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the live bytes as a slice.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Iterates over the live bytes from the start.
    #[inline]
    pub fn iter(&self) -> Copied<Iter<'a, u8>> {
        self.bytes.iter().copied()
    }

    /// Splits the live bytes into rows of at most `width` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    #[inline]
    pub fn rows(&self, width: usize) -> Chunks<'a, u8> {
        self.bytes.chunks(width)
    }
}

impl<'a> IntoIterator for Dump<'a> {
    type Item = u8;
    type IntoIter = Copied<Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter().copied()
    }
}

impl<'a> IntoIterator for &Dump<'a> {
    type Item = u8;
    type IntoIter = Copied<Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
