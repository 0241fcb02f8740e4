//! # Memory Management
//!
//! A single pre-allocated buffer carved into chunks by a bump cursor.
//!
//! ## Design Philosophy
//!
//! All memory is allocated once at construction. Afterwards:
//! - No heap allocations
//! - No per-chunk free, only reset-all
//! - Predictable O(1) allocation

mod arena;
mod dump;
mod handle;

pub use arena::{Arena, ArenaState, UsageReport};
pub use dump::Dump;
pub use handle::ChunkHandle;
