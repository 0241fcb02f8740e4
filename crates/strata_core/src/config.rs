//! # Arena Configuration
//!
//! Sizing parameters, loadable from TOML at startup.

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, ArenaResult};

/// Construction parameters for an [`Arena`](crate::Arena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Size of the backing buffer in bytes.
    pub capacity: usize,
}

impl ArenaConfig {
    /// Default backing buffer size in bytes.
    pub const DEFAULT_CAPACITY: usize = 5000;

    /// Largest capacity accepted from configuration (1 GiB).
    pub const MAX_CAPACITY: usize = 1 << 30;

    /// Creates a config with the given capacity.
    #[inline]
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Checks the values before any memory is reserved.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::InvalidConfig`] if `capacity` exceeds
    /// [`Self::MAX_CAPACITY`].
    pub fn validate(&self) -> ArenaResult<()> {
        if self.capacity > Self::MAX_CAPACITY {
            return Err(ArenaError::InvalidConfig(format!(
                "capacity {} exceeds maximum {}",
                self.capacity,
                Self::MAX_CAPACITY
            )));
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
        }
    }
}
