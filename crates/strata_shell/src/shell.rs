//! # Menu Loop
//!
//! Reads one selection per line, runs the matching command against the
//! arena it was handed, and redraws the menu.
//!
//! ```text
//! menu ──► read choice ──► ─────── ──► handler(&mut Arena) ──► ─────── ──► [pause] ──┐
//!   ▲                                                                              │
//!   └──────────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use strata_core::{Arena, ChunkHandle};

use crate::config::{ShellConfig, StringEncoding};
use crate::error::ShellResult;
use crate::hexdump::format_hex;
use crate::input::{Classifier, Input, StrtolClassifier};
use crate::menu::{MenuChoice, MENU, SEPARATOR};

/// Why the menu loop ended. Both are successful exits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The user chose `q`.
    Quit,
    /// Input was exhausted.
    EndOfInput,
}

/// Interactive console over an input stream and an output stream.
///
/// # Type Parameters
///
/// * `R` - Line source (stdin, or a `Cursor` in tests)
/// * `W` - Menu and report sink
/// * `C` - Input classification policy
pub struct Shell<R, W, C = StrtolClassifier> {
    input: R,
    output: W,
    classifier: C,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with the default `strtol`-style classifier.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Config`](crate::ShellError::Config) if the
    /// config fails [`ShellConfig::validate`].
    pub fn new(input: R, output: W, config: ShellConfig) -> ShellResult<Self> {
        Self::with_classifier(input, output, config, StrtolClassifier)
    }
}

impl<R: BufRead, W: Write, C: Classifier> Shell<R, W, C> {
    /// Creates a shell with a custom classifier.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Config`](crate::ShellError::Config) if the
    /// config fails [`ShellConfig::validate`].
    pub fn with_classifier(
        input: R,
        output: W,
        config: ShellConfig,
        classifier: C,
    ) -> ShellResult<Self> {
        config.validate()?;
        Ok(Self {
            input,
            output,
            classifier,
            config,
        })
    }

    /// Runs the menu loop until the user quits or input ends.
    ///
    /// Unrecognized selections print an error and redraw the menu. A full
    /// arena is reported, not returned.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`](crate::ShellError::Io) if reading or
    /// writing fails.
    pub fn run(&mut self, arena: &mut Arena) -> ShellResult<ExitReason> {
        loop {
            write!(self.output, "{MENU}Enter your choice: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(ExitReason::EndOfInput);
            };

            let choice = MenuChoice::parse(&String::from_utf8_lossy(&line));
            tracing::debug!(?choice, "menu selection");
            if choice == MenuChoice::Quit {
                return Ok(ExitReason::Quit);
            }

            writeln!(self.output, "\n{SEPARATOR}")?;
            match choice {
                MenuChoice::Allocate => self.allocate(arena)?,
                MenuChoice::Flush => self.flush(arena)?,
                MenuChoice::ShowContents => self.show_contents(arena)?,
                MenuChoice::ShowUsage => self.show_usage(arena)?,
                MenuChoice::Invalid | MenuChoice::Quit => writeln!(self.output, "Invalid option")?,
            }
            writeln!(self.output, "{SEPARATOR}")?;

            if self.config.pause_after_command {
                write!(self.output, "Press Enter to return to the menu...")?;
                self.output.flush()?;
                if self.read_line()?.is_none() {
                    writeln!(self.output)?;
                    return Ok(ExitReason::EndOfInput);
                }
            }
        }
    }

    /// Reads one raw line, terminator included; `None` at end of input.
    ///
    /// Bytes are taken as typed, so input that is not UTF-8 never ends
    /// the session.
    fn read_line(&mut self) -> ShellResult<Option<Vec<u8>>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// (1) Classifies one line of data and stores it.
    fn allocate(&mut self, arena: &mut Arena) -> ShellResult<()> {
        writeln!(self.output, "Enter the data you would like to store to the Arena Memory:")?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            writeln!(self.output, "No input")?;
            return Ok(());
        };

        let stored = match self.classifier.classify(&line) {
            Input::Integer(value) => {
                writeln!(self.output, "Valid integer")?;
                arena.alloc_value(&value)
            }
            Input::Text(text) => {
                writeln!(self.output, "Input is a string")?;
                match self.config.string_encoding {
                    StringEncoding::NulTerminated => arena.alloc_bytes_nul(&text),
                    StringEncoding::LengthPrefixed => arena.alloc_bytes_prefixed(&text),
                }
            }
            Input::Rejected(reason) => {
                writeln!(self.output, "Rejected input: {reason}")?;
                return Ok(());
            }
        };

        match stored {
            Ok(handle) => self.report_stored(handle)?,
            Err(err) => {
                tracing::warn!(%err, "allocation failed");
                writeln!(self.output, "Allocation failed: {err}")?;
            }
        }
        Ok(())
    }

    fn report_stored(&mut self, handle: ChunkHandle) -> ShellResult<()> {
        writeln!(
            self.output,
            "Stored {} bytes at offset {}",
            handle.len(),
            handle.offset()
        )?;
        Ok(())
    }

    /// (2) Resets the arena.
    fn flush(&mut self, arena: &mut Arena) -> ShellResult<()> {
        arena.reset();
        writeln!(self.output, "Memory has been flushed")?;
        Ok(())
    }

    /// (3) Prints the live region as hex.
    fn show_contents(&mut self, arena: &Arena) -> ShellResult<()> {
        let dump = arena.dump();
        writeln!(self.output, "Arena contents ({} bytes):", dump.len())?;
        if !dump.is_empty() {
            writeln!(self.output, "{}", format_hex(dump, self.config.bytes_per_row))?;
        }
        Ok(())
    }

    /// (4) Prints the usage report.
    fn show_usage(&mut self, arena: &Arena) -> ShellResult<()> {
        let usage = arena.usage();
        writeln!(self.output, "Used : {} Bytes", usage.used)?;
        writeln!(self.output, "Remaining : {}", usage.free)?;
        writeln!(self.output, "Chunks : {}", usage.chunk_count)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, arena: &mut Arena, config: ShellConfig) -> (ExitReason, String) {
        let mut output = Vec::new();
        let reason = Shell::new(Cursor::new(script.to_owned()), &mut output, config)
            .unwrap()
            .run(arena)
            .unwrap();
        (reason, String::from_utf8(output).unwrap())
    }

    fn no_pause() -> ShellConfig {
        ShellConfig {
            pause_after_command: false,
            ..ShellConfig::default()
        }
    }

    #[test]
    fn test_quit_immediately() {
        let mut arena = Arena::new(16);
        let (reason, out) = run_script("q\n", &mut arena, no_pause());
        assert_eq!(reason, ExitReason::Quit);
        assert!(out.starts_with("Arena Memory Allocator Menu"));
        assert!(!out.contains(SEPARATOR));
    }

    #[test]
    fn test_end_of_input_is_clean_exit() {
        let mut arena = Arena::new(16);
        let (reason, _) = run_script("", &mut arena, no_pause());
        assert_eq!(reason, ExitReason::EndOfInput);
    }

    #[test]
    fn test_invalid_option_redisplays_menu() {
        let mut arena = Arena::new(16);
        let (reason, out) = run_script("9\nq\n", &mut arena, no_pause());
        assert_eq!(reason, ExitReason::Quit);
        assert!(out.contains("Invalid option"));
        assert_eq!(out.matches("Enter your choice:").count(), 2);
    }

    #[test]
    fn test_store_integer_and_string() {
        let mut arena = Arena::new(64);
        let (_, out) = run_script("1\n-2\n1\nhi\nq\n", &mut arena, no_pause());

        assert!(out.contains("Valid integer"));
        assert!(out.contains("Input is a string"));
        assert!(out.contains("Stored 8 bytes at offset 0"));
        assert!(out.contains("Stored 3 bytes at offset 8"));

        let live = arena.dump().as_bytes();
        assert_eq!(&live[..8], &(-2i64).to_ne_bytes());
        assert_eq!(&live[8..], b"hi\0");
        assert_eq!(arena.chunk_count(), 2);
    }

    #[test]
    fn test_length_prefixed_strings() {
        let mut arena = Arena::new(64);
        let config = ShellConfig {
            string_encoding: StringEncoding::LengthPrefixed,
            ..no_pause()
        };
        run_script("1\nabc\nq\n", &mut arena, config);
        assert_eq!(arena.dump().as_bytes(), &[3, 0, 0, 0, b'a', b'b', b'c']);
    }

    #[test]
    fn test_rejected_input_stores_nothing() {
        let mut arena = Arena::new(64);
        let (_, out) = run_script("1\n12abc\nq\n", &mut arena, no_pause());
        assert!(out.contains("Rejected input: extra characters"));
        assert!(arena.is_empty());
        assert_eq!(arena.chunk_count(), 0);
    }

    #[test]
    fn test_full_arena_is_reported() {
        let mut arena = Arena::new(10);
        let (reason, out) = run_script("1\n1\n1\n2\nq\n", &mut arena, no_pause());
        assert_eq!(reason, ExitReason::Quit);
        assert!(out.contains("Allocation failed: arena full"));
        assert_eq!(arena.used(), 8);
    }

    #[test]
    fn test_flush_contents_and_usage() {
        let mut arena = Arena::new(32);
        let (_, out) = run_script("1\nA\n3\n4\n2\n4\nq\n", &mut arena, no_pause());

        assert!(out.contains("Arena contents (2 bytes):\n41 00\n"));
        assert!(out.contains("Used : 2 Bytes\nRemaining : 30\nChunks : 1\n"));
        assert!(out.contains("Memory has been flushed"));
        assert!(out.contains("Used : 0 Bytes\nRemaining : 32\nChunks : 0\n"));
        assert!(arena.is_empty());
    }

    #[test]
    fn test_pause_consumes_a_line() {
        let mut arena = Arena::new(16);
        let (reason, out) = run_script("4\n\nq\n", &mut arena, ShellConfig::default());
        assert_eq!(reason, ExitReason::Quit);
        assert!(out.contains("Press Enter to return to the menu..."));
    }

    #[test]
    fn test_custom_classifier() {
        struct AlwaysText;
        impl Classifier for AlwaysText {
            fn classify(&self, line: &[u8]) -> Input {
                Input::Text(line.strip_suffix(b"\n").unwrap_or(line).to_vec())
            }
        }

        let mut arena = Arena::new(16);
        let mut output = Vec::new();
        Shell::with_classifier(Cursor::new("1\n42\nq\n"), &mut output, no_pause(), AlwaysText)
            .unwrap()
            .run(&mut arena)
            .unwrap();
        assert_eq!(arena.dump().as_bytes(), b"42\0");
    }

    #[test]
    fn test_non_utf8_selection_is_invalid_option() {
        let mut arena = Arena::new(16);
        let mut output = Vec::new();
        let reason = Shell::new(Cursor::new(b"\xff\nq\n".to_vec()), &mut output, no_pause())
            .unwrap()
            .run(&mut arena)
            .unwrap();

        assert_eq!(reason, ExitReason::Quit);
        let out = String::from_utf8(output).unwrap();
        assert_eq!(out.matches("Invalid option").count(), 1);
    }

    #[test]
    fn test_non_utf8_data_is_stored_as_bytes() {
        let mut arena = Arena::new(16);
        let mut output = Vec::new();
        let reason = Shell::new(Cursor::new(b"1\ncaf\xe9\nq\n".to_vec()), &mut output, no_pause())
            .unwrap()
            .run(&mut arena)
            .unwrap();

        assert_eq!(reason, ExitReason::Quit);
        assert_eq!(arena.dump().as_bytes(), b"caf\xe9\0");
    }

    #[test]
    fn test_interior_nul_is_reported() {
        let mut arena = Arena::new(16);
        let (reason, out) = run_script("1\na\0b\nq\n", &mut arena, no_pause());
        assert_eq!(reason, ExitReason::Quit);
        assert!(out.contains("Allocation failed: payload contains a NUL byte at position 1"));
        assert!(arena.is_empty());
    }

    #[test]
    fn test_zero_row_width_is_rejected_up_front() {
        let config = ShellConfig {
            bytes_per_row: 0,
            ..no_pause()
        };
        let mut output = Vec::new();
        let result = Shell::new(Cursor::new("1\nA\n3\nq\n"), &mut output, config);
        assert!(matches!(result, Err(crate::ShellError::Config(_))));
    }
}
