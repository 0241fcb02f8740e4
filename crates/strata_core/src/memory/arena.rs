//! # Arena Allocator
//!
//! A bump allocator over one fixed buffer. Chunks are carved off in
//! increasing address order and freed all at once when the arena is reset.

use std::fmt;
use std::mem::size_of;

use bytemuck::Pod;

use super::dump::Dump;
use super::handle::ChunkHandle;
use crate::config::ArenaConfig;
use crate::error::{ArenaError, ArenaResult};

/// Logical state of an arena, derived from its offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArenaState {
    /// Nothing committed (`offset == 0`).
    Empty,
    /// Some bytes committed (`offset > 0`).
    Populated,
}

/// Snapshot of arena accounting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UsageReport {
    /// Bytes committed (`offset`).
    pub used: usize,
    /// Bytes still available (`capacity - offset`).
    pub free: usize,
    /// Successful allocations since the last reset.
    pub chunk_count: usize,
}

impl UsageReport {
    /// Returns the total capacity the report was taken from.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.used + self.free
    }

    /// Returns the committed fraction of the arena in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn utilization(&self) -> f64 {
        match self.capacity() {
            0 => 0.0,
            capacity => self.used as f64 / capacity as f64,
        }
    }
}

/// A fixed-capacity bump-pointer arena.
///
/// Allocation is one bounds check and a cursor bump. Memory is released all
/// at once by [`Arena::reset`], which also zeroes the whole buffer so no data
/// survives into later allocations.
///
/// # Thread Safety
///
/// Allocation and reset take `&mut self`. Use one arena per thread, or
/// [`SharedArena`](crate::SharedArena) to share one behind a lock.
///
/// # Example
///
/// ```rust
/// use strata_core::Arena;
///
/// let mut arena = Arena::new(1024);
///
/// let answer = arena.alloc_value(&42i64)?;
/// assert_eq!(arena.read_value::<i64>(answer)?, 42);
///
/// // Reset to free all allocations; old handles go stale.
/// arena.reset();
/// assert!(arena.get(answer).is_err());
/// # Ok::<(), strata_core::ArenaError>(())
/// ```
pub struct Arena {
    /// The backing storage, never resized.
    storage: Box<[u8]>,
    /// Current allocation offset.
    offset: usize,
    /// Total capacity.
    capacity: usize,
    /// Successful allocations since the last reset.
    chunk_count: usize,
    /// Reset epoch, stamped into every handle.
    generation: u32,
}

impl Arena {
    /// Creates a new arena owning a zeroed buffer of `capacity` bytes.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Total size in bytes
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::from_buffer(vec![0u8; capacity].into_boxed_slice())
    }

    /// Creates an arena over a caller-supplied buffer.
    ///
    /// The buffer is moved in, so the caller keeps no alias to it. Its
    /// contents are left as they are until the first reset.
    #[must_use]
    pub fn from_buffer(storage: Box<[u8]>) -> Self {
        let capacity = storage.len();
        Self {
            storage,
            offset: 0,
            capacity,
            chunk_count: 0,
            generation: 0,
        }
    }

    /// Creates an arena from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidConfig`] if the config fails validation.
    pub fn with_config(config: &ArenaConfig) -> ArenaResult<Self> {
        config.validate()?;
        Ok(Self::new(config.capacity))
    }

    /// Returns the total capacity in bytes.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current used space in bytes.
    #[inline]
    #[must_use]
    pub const fn used(&self) -> usize {
        self.offset
    }

    /// Returns the remaining free space in bytes.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.capacity - self.offset
    }

    /// Returns the number of successful allocations since the last reset.
    #[inline]
    #[must_use]
    pub const fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Returns the current reset generation.
    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u32 {
        self.generation
    }

    /// Returns true if no bytes are committed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offset == 0
    }

    /// Returns the logical state of the arena.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> ArenaState {
        if self.offset == 0 {
            ArenaState::Empty
        } else {
            ArenaState::Populated
        }
    }

    /// Returns used bytes, free bytes and chunk count. No side effects.
    #[inline]
    #[must_use]
    pub const fn usage(&self) -> UsageReport {
        UsageReport {
            used: self.offset,
            free: self.capacity - self.offset,
            chunk_count: self.chunk_count,
        }
    }

    /// Reserves `size` bytes at the current offset.
    ///
    /// This is an **O(1)** operation. The chunk is not zeroed: it holds
    /// whatever the buffer held, which is zero only if nothing has been
    /// written there since the last reset.
    ///
    /// A zero-size request succeeds, leaves the offset in place and still
    /// counts as one allocation.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::OutOfCapacity`] if `offset + size` would exceed
    /// the capacity. The arena is left unchanged.
    pub fn allocate(&mut self, size: usize) -> ArenaResult<ChunkHandle> {
        let end = match self.offset.checked_add(size) {
            Some(end) if end <= self.capacity => end,
            _ => {
                tracing::debug!(
                    requested = size,
                    remaining = self.remaining(),
                    capacity = self.capacity,
                    "arena allocation rejected"
                );
                return Err(ArenaError::OutOfCapacity {
                    requested: size,
                    remaining: self.remaining(),
                    capacity: self.capacity,
                });
            }
        };

        let handle = ChunkHandle::new(self.offset, size, self.generation);
        self.offset = end;
        self.chunk_count += 1;

        tracing::trace!(offset = handle.offset(), len = size, "arena chunk allocated");
        Ok(handle)
    }

    /// Allocates a chunk holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::OutOfCapacity`] if the bytes do not fit.
    pub fn alloc_bytes(&mut self, bytes: &[u8]) -> ArenaResult<ChunkHandle> {
        let handle = self.allocate(bytes.len())?;
        self.storage[handle.range()].copy_from_slice(bytes);
        Ok(handle)
    }

    /// Allocates a chunk holding the native-endian bytes of `value`.
    ///
    /// No padding is inserted, so the chunk may be unaligned for `T`; read
    /// it back with [`Arena::read_value`].
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::OutOfCapacity`] if the value does not fit.
    pub fn alloc_value<T: Pod>(&mut self, value: &T) -> ArenaResult<ChunkHandle> {
        self.alloc_bytes(bytemuck::bytes_of(value))
    }

    /// Allocates a NUL-terminated copy of `text`.
    ///
    /// # Errors
    ///
    /// As [`Arena::alloc_bytes_nul`].
    pub fn alloc_str_nul(&mut self, text: &str) -> ArenaResult<ChunkHandle> {
        self.alloc_bytes_nul(text.as_bytes())
    }

    /// Allocates `bytes` followed by a single zero byte.
    ///
    /// Bytes containing a zero are refused, since the terminator would no
    /// longer mark the end of the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InteriorNul`] if `bytes` contains a zero byte,
    /// or [`ArenaError::OutOfCapacity`] if `bytes.len() + 1` bytes do not fit.
    pub fn alloc_bytes_nul(&mut self, bytes: &[u8]) -> ArenaResult<ChunkHandle> {
        if let Some(position) = bytes.iter().position(|&b| b == 0) {
            return Err(ArenaError::InteriorNul { position });
        }
        let handle = self.allocate(bytes.len() + 1)?;
        let chunk = &mut self.storage[handle.range()];
        let (body, terminator) = chunk.split_at_mut(bytes.len());
        body.copy_from_slice(bytes);
        terminator[0] = 0;
        Ok(handle)
    }

    /// Allocates `text` behind a little-endian `u32` length prefix.
    ///
    /// # Errors
    ///
    /// As [`Arena::alloc_bytes_prefixed`].
    pub fn alloc_str_prefixed(&mut self, text: &str) -> ArenaResult<ChunkHandle> {
        self.alloc_bytes_prefixed(text.as_bytes())
    }

    /// Allocates `bytes` behind a little-endian `u32` length prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::TooLarge`] if the payload is longer than
    /// `u32::MAX` bytes, or [`ArenaError::OutOfCapacity`] if it does not fit.
    pub fn alloc_bytes_prefixed(&mut self, bytes: &[u8]) -> ArenaResult<ChunkHandle> {
        let len = u32::try_from(bytes.len()).map_err(|_| ArenaError::TooLarge { len: bytes.len() })?;
        let handle = self.allocate(size_of::<u32>() + bytes.len())?;
        let chunk = &mut self.storage[handle.range()];
        let (prefix, body) = chunk.split_at_mut(size_of::<u32>());
        prefix.copy_from_slice(&len.to_le_bytes());
        body.copy_from_slice(bytes);
        Ok(handle)
    }

    /// Returns the bytes of a live chunk.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::StaleHandle`] if the handle predates the last
    /// reset or lies outside the live region.
    pub fn get(&self, handle: ChunkHandle) -> ArenaResult<&[u8]> {
        self.check(handle)?;
        Ok(&self.storage[handle.range()])
    }

    /// Returns the bytes of a live chunk for writing.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::StaleHandle`] if the handle predates the last
    /// reset or lies outside the live region.
    pub fn get_mut(&mut self, handle: ChunkHandle) -> ArenaResult<&mut [u8]> {
        self.check(handle)?;
        Ok(&mut self.storage[handle.range()])
    }

    /// Reads a chunk back as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::StaleHandle`] for a stale handle, or
    /// [`ArenaError::SizeMismatch`] if the chunk is not exactly
    /// `size_of::<T>()` bytes.
    pub fn read_value<T: Pod>(&self, handle: ChunkHandle) -> ArenaResult<T> {
        let bytes = self.get(handle)?;
        if bytes.len() != size_of::<T>() {
            return Err(ArenaError::SizeMismatch {
                expected: size_of::<T>(),
                actual: bytes.len(),
            });
        }
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// Returns a read-only view of the live region `[0, offset)`.
    #[inline]
    #[must_use]
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(&self.storage[..self.offset])
    }

    /// Resets the arena, zeroing the buffer and invalidating every handle.
    ///
    /// This is an **O(capacity)** operation. No memory is freed or
    /// reallocated. Handles issued before the reset report
    /// [`ArenaError::StaleHandle`] afterwards; the generation counter wraps
    /// after `u32::MAX` resets.
    pub fn reset(&mut self) {
        self.storage.fill(0);
        self.offset = 0;
        self.chunk_count = 0;
        self.generation = self.generation.wrapping_add(1);

        tracing::debug!(
            capacity = self.capacity,
            generation = self.generation,
            "arena reset"
        );
    }

    fn check(&self, handle: ChunkHandle) -> ArenaResult<()> {
        if handle.generation() == self.generation && handle.end() <= self.offset {
            Ok(())
        } else {
            Err(ArenaError::StaleHandle {
                offset: handle.offset(),
                len: handle.len(),
                generation: handle.generation(),
                current: self.generation,
            })
        }
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("offset", &self.offset)
            .field("capacity", &self.capacity)
            .field("chunk_count", &self.chunk_count)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ArenaConfig::DEFAULT_CAPACITY)
    }
}
