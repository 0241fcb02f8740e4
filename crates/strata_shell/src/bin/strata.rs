//! # STRATA Console
//!
//! Interactive menu over a single fixed-capacity arena.
//!
//! Logs go to stderr; set `STRATA_LOG=debug` to see allocator activity.

use std::io;
use std::process::ExitCode;

use strata_core::Arena;
use strata_shell::{cli::USAGE, logging, CliArgs, Shell, ShellResult};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ShellResult<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    logging::init_logging()?;

    let config = args.resolve_config()?;
    let mut arena = Arena::with_config(&config.arena)?;
    tracing::info!(capacity = arena.capacity(), "arena ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let reason = Shell::new(stdin.lock(), stdout.lock(), config)?.run(&mut arena)?;

    tracing::info!(?reason, used = arena.used(), "shell exited");
    Ok(())
}
