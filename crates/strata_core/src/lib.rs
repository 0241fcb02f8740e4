//! # STRATA Core Allocator
//!
//! Fixed-capacity bump arena designed for:
//! - O(1) allocation (one bounds check, one cursor bump)
//! - Bulk deallocation only (reset-all, zeroing the buffer)
//! - Handles that detect use after reset
//!
//! ## Architecture Rules
//!
//! 1. **One buffer** - Allocated once at construction, never resized
//! 2. **Checked results** - Every allocation returns a `Result` the caller must branch on
//! 3. **No raw addresses** - Chunks are `(offset, len, generation)` handles
//!
//! ## Example
//!
//! ```rust
//! use strata_core::Arena;
//!
//! let mut arena = Arena::new(10);
//! let a = arena.allocate(4)?;
//! let b = arena.allocate(4)?;
//! assert_eq!(a.range(), 0..4);
//! assert_eq!(b.range(), 4..8);
//! assert!(arena.allocate(4).is_err());
//!
//! arena.reset();
//! assert_eq!(arena.usage().free, 10);
//! # Ok::<(), strata_core::ArenaError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod memory;
pub mod sync;

pub use config::ArenaConfig;
pub use error::{ArenaError, ArenaResult};
pub use memory::{Arena, ArenaState, ChunkHandle, Dump, UsageReport};
pub use sync::SharedArena;
