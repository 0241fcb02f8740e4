//! Integration test for a full console session.

use std::io::Cursor;

use strata_core::Arena;
use strata_shell::{CliArgs, ExitReason, Shell, ShellConfig};

fn session(script: &str, config: ShellConfig) -> (Arena, ExitReason, String) {
    let mut arena = Arena::with_config(&config.arena).unwrap();
    let mut output = Vec::new();
    let reason = Shell::new(Cursor::new(script.to_owned()), &mut output, config)
        .unwrap()
        .run(&mut arena)
        .unwrap();
    (arena, reason, String::from_utf8(output).unwrap())
}

#[test]
fn test_ten_byte_arena_session() {
    let config = CliArgs::parse(["--capacity", "10", "--no-pause"])
        .unwrap()
        .resolve_config()
        .unwrap();

    // Two integers fill 8 bytes, the third does not fit.
    let script = "1\n100\n1\n200\n1\n300\n4\n3\n2\n4\nq\n";
    let (arena, reason, out) = session(script, config);

    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(out.matches("Valid integer").count(), 3);
    assert_eq!(out.matches("Allocation failed").count(), 1);
    assert!(out.contains("Used : 8 Bytes\nRemaining : 2\nChunks : 2\n"));
    assert!(out.contains("Arena contents (8 bytes):"));
    assert!(out.contains("Used : 0 Bytes\nRemaining : 10\nChunks : 0\n"));
    assert!(arena.is_empty());
}

#[test]
fn test_session_from_toml_config() {
    let config = ShellConfig::from_toml_str(
        r#"
        bytes_per_row = 4
        pause_after_command = false

        [arena]
        capacity = 32
        "#,
    )
    .unwrap();

    let (arena, _, out) = session("1\nabcdefg\n3\n", config);

    // 8 bytes with the terminator, printed 4 per row.
    assert!(out.contains("61 62 63 64\n65 66 67 00\n"));
    assert_eq!(arena.used(), 8);
}

#[test]
fn test_unknown_selections_never_exit() {
    let config = ShellConfig {
        pause_after_command: false,
        ..ShellConfig::default()
    };
    let (_, reason, out) = session("x\n0\n\n5\n", config);

    assert_eq!(reason, ExitReason::EndOfInput);
    assert_eq!(out.matches("Invalid option").count(), 4);
}

#[test]
fn test_non_utf8_bytes_never_end_the_session() {
    let config = ShellConfig {
        pause_after_command: false,
        ..ShellConfig::default()
    };
    let mut arena = Arena::new(32);
    let mut output = Vec::new();
    let script = b"\xfe\n1\n\xff\xfe\n3\nq\n".to_vec();
    let reason = Shell::new(Cursor::new(script), &mut output, config)
        .unwrap()
        .run(&mut arena)
        .unwrap();

    let out = String::from_utf8(output).unwrap();
    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(out.matches("Invalid option").count(), 1);
    assert!(out.contains("Input is a string"));
    assert!(out.contains("FF FE 00"));
    assert_eq!(arena.used(), 3);
}
