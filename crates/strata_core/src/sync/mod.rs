//! # Shared Arena Access
//!
//! The bump cursor is one counter, so sharing an arena needs one lock:
//!
//! ```text
//! Thread 1:  allocate ──┐
//! Thread 2:  allocate ──┼──► Mutex<Arena> ──► offset += size
//! Thread 3:  reset    ──┘
//! ```
//!
//! The lock covers the whole arena for the whole operation. Finer-grained
//! locking of `offset` and `chunk_count` separately would let accounting drift.

mod shared;

pub use shared::SharedArena;
