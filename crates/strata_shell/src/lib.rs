//! # STRATA Shell
//!
//! Line-oriented console over a single [`Arena`](strata_core::Arena):
//! store integers and strings, flush, dump the live region as hex, and
//! report usage.
//!
//! The shell owns no allocator state. The arena is created by the caller
//! and passed explicitly into [`Shell::run`] and from there into each
//! command handler.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use strata_core::Arena;
//! use strata_shell::{ExitReason, Shell, ShellConfig};
//!
//! let config = ShellConfig { pause_after_command: false, ..ShellConfig::default() };
//! let mut arena = Arena::new(config.arena.capacity);
//! let mut output = Vec::new();
//!
//! let mut shell = Shell::new(Cursor::new("1\n42\nq\n"), &mut output, config)?;
//! assert_eq!(shell.run(&mut arena)?, ExitReason::Quit);
//! assert_eq!(arena.used(), 8);
//! # Ok::<(), strata_shell::ShellError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cli;
pub mod config;
pub mod error;
pub mod hexdump;
pub mod input;
pub mod logging;
pub mod menu;
pub mod shell;

pub use cli::CliArgs;
pub use config::{ShellConfig, StringEncoding};
pub use error::{ShellError, ShellResult};
pub use hexdump::format_hex;
pub use input::{Classifier, Input, Rejection, StrtolClassifier};
pub use menu::MenuChoice;
pub use shell::{ExitReason, Shell};
