//! # Command-Line Arguments
//!
//! ```text
//! strata [--config <file.toml>] [--capacity <bytes>] [--no-pause]
//! ```

use std::path::PathBuf;

use crate::config::ShellConfig;
use crate::error::{ShellError, ShellResult};

/// Usage text printed for `--help` and on argument errors.
pub const USAGE: &str = "Usage: strata [options]\n\n\
Options:\n  \
--config <path>     Load settings from a TOML file\n  \
--capacity <bytes>  Override the arena capacity\n  \
--no-pause          Do not wait for Enter after each command\n  \
--help              Show this message";

/// Parsed command-line arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// TOML config file.
    pub config: Option<PathBuf>,
    /// Capacity override in bytes.
    pub capacity: Option<usize>,
    /// Disable the pause after each command.
    pub no_pause: bool,
    /// Print usage and exit.
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Usage`] for unknown flags, missing values or a
    /// capacity that is not a number.
    pub fn parse<I, S>(args: I) -> ShellResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ShellError::Usage("--config needs a path".into()))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--capacity" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ShellError::Usage("--capacity needs a value".into()))?;
                    let capacity = value
                        .parse::<usize>()
                        .map_err(|_| ShellError::Usage(format!("invalid capacity: {value}")))?;
                    parsed.capacity = Some(capacity);
                }
                "--no-pause" => parsed.no_pause = true,
                "--help" | "-h" => parsed.help = true,
                other => return Err(ShellError::Usage(format!("unknown argument: {other}"))),
            }
        }

        Ok(parsed)
    }

    /// Builds the effective configuration: file (or defaults), then flags.
    ///
    /// # Errors
    ///
    /// Returns any error from [`ShellConfig::load`] or
    /// [`ShellConfig::validate`].
    pub fn resolve_config(&self) -> ShellResult<ShellConfig> {
        let mut config = match &self.config {
            Some(path) => ShellConfig::load(path)?,
            None => ShellConfig::default(),
        };
        if let Some(capacity) = self.capacity {
            config.arena.capacity = capacity;
        }
        if self.no_pause {
            config.pause_after_command = false;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse(["--capacity", "128", "--no-pause"]).unwrap();
        assert_eq!(args.capacity, Some(128));
        assert!(args.no_pause);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            CliArgs::parse(["--capacity"]),
            Err(ShellError::Usage(_))
        ));
        assert!(matches!(
            CliArgs::parse(["--capacity", "lots"]),
            Err(ShellError::Usage(_))
        ));
        assert!(matches!(CliArgs::parse(["--verbose"]), Err(ShellError::Usage(_))));
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let args = CliArgs::parse(["--capacity", "10", "--no-pause"]).unwrap();
        let config = args.resolve_config().unwrap();
        assert_eq!(config.arena.capacity, 10);
        assert!(!config.pause_after_command);
    }

    #[test]
    fn test_resolve_rejects_huge_capacity() {
        let args = CliArgs {
            capacity: Some(usize::MAX),
            ..CliArgs::default()
        };
        assert!(matches!(args.resolve_config(), Err(ShellError::Config(_))));
    }
}
