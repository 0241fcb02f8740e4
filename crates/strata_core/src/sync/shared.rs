//! # Mutex-Guarded Arena
//!
//! Wraps an [`Arena`] in a `parking_lot::Mutex` so it can be shared
//! across threads.

use parking_lot::Mutex;

use crate::error::ArenaResult;
use crate::memory::{Arena, ChunkHandle, Dump, UsageReport};

/// An arena shared between threads behind a single lock.
///
/// Every operation takes the lock for its full duration. Reads hand the
/// chunk bytes to a closure so no reference escapes the critical section.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use strata_core::SharedArena;
///
/// let arena = Arc::new(SharedArena::new(1024));
/// let handle = arena.alloc_bytes(b"abc")?;
/// let len = arena.read(handle, <[u8]>::len)?;
/// assert_eq!(len, 3);
/// # Ok::<(), strata_core::ArenaError>(())
/// ```
#[derive(Debug)]
pub struct SharedArena {
    inner: Mutex<Arena>,
}

impl SharedArena {
    /// Creates a shared arena with a zeroed buffer of `capacity` bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::from_arena(Arena::new(capacity))
    }

    /// Wraps an existing arena.
    #[must_use]
    pub fn from_arena(arena: Arena) -> Self {
        Self {
            inner: Mutex::new(arena),
        }
    }

    /// Reserves `size` bytes. See [`Arena::allocate`].
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::OutOfCapacity`](crate::ArenaError::OutOfCapacity)
    /// if the request does not fit.
    pub fn allocate(&self, size: usize) -> ArenaResult<ChunkHandle> {
        self.inner.lock().allocate(size)
    }

    /// Allocates a copy of `bytes`. See [`Arena::alloc_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::OutOfCapacity`](crate::ArenaError::OutOfCapacity)
    /// if the bytes do not fit.
    pub fn alloc_bytes(&self, bytes: &[u8]) -> ArenaResult<ChunkHandle> {
        self.inner.lock().alloc_bytes(bytes)
    }

    /// Resets the arena. See [`Arena::reset`].
    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    /// Returns a consistent accounting snapshot.
    #[must_use]
    pub fn usage(&self) -> UsageReport {
        self.inner.lock().usage()
    }

    /// Runs `f` over the bytes of a live chunk while holding the lock.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::StaleHandle`](crate::ArenaError::StaleHandle)
    /// if the handle predates the last reset.
    pub fn read<R>(&self, handle: ChunkHandle, f: impl FnOnce(&[u8]) -> R) -> ArenaResult<R> {
        let arena = self.inner.lock();
        arena.get(handle).map(f)
    }

    /// Runs `f` over the live region while holding the lock.
    pub fn with_dump<R>(&self, f: impl FnOnce(Dump<'_>) -> R) -> R {
        f(self.inner.lock().dump())
    }

    /// Consumes the wrapper and returns the arena.
    #[must_use]
    pub fn into_inner(self) -> Arena {
        self.inner.into_inner()
    }
}
