//! # Shell Configuration
//!
//! Loaded once at startup from an optional TOML file:
//!
//! ```toml
//! bytes_per_row = 16
//! string_encoding = "nul_terminated"
//! pause_after_command = true
//!
//! [arena]
//! capacity = 5000
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strata_core::ArenaConfig;

use crate::error::{ShellError, ShellResult};

/// How text input is laid out in the arena.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringEncoding {
    /// UTF-8 bytes followed by a single zero byte.
    #[default]
    NulTerminated,
    /// Little-endian `u32` byte count followed by the UTF-8 bytes.
    LengthPrefixed,
}

/// Shell settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Arena sizing.
    pub arena: ArenaConfig,
    /// Bytes per line in the hex dump.
    pub bytes_per_row: usize,
    /// Layout for stored strings.
    pub string_encoding: StringEncoding,
    /// Wait for Enter after each command before redrawing the menu.
    pub pause_after_command: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            bytes_per_row: 16,
            string_encoding: StringEncoding::default(),
            pause_after_command: true,
        }
    }
}

impl ShellConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Config`] for malformed TOML, unknown keys, or
    /// values rejected by [`ShellConfig::validate`].
    pub fn from_toml_str(source: &str) -> ShellResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ShellError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`] if the file cannot be read, otherwise as
    /// [`ShellConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ShellResult<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Config`] if `bytes_per_row` is zero or the
    /// arena capacity is out of range.
    pub fn validate(&self) -> ShellResult<()> {
        if self.bytes_per_row == 0 {
            return Err(ShellError::Config("bytes_per_row must be greater than zero".into()));
        }
        self.arena
            .validate()
            .map_err(|e| ShellError::Config(e.to_string()))
    }
}
