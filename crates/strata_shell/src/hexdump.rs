//! # Hex Presentation
//!
//! Formats an arena's live region as uppercase hex, a fixed number of
//! bytes per line.

use strata_core::Dump;

/// Formats `dump` as space-separated `XX` pairs, `width` bytes per line.
///
/// Lines are joined with `\n`; an empty dump yields an empty string.
///
/// # Panics
///
/// Panics if `width` is zero.
#[must_use]
pub fn format_hex(dump: Dump<'_>, width: usize) -> String {
    let mut out = String::with_capacity(dump.len() * 3);
    for (i, row) in dump.rows(width).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for (j, byte) in row.iter().enumerate() {
            if j > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{byte:02X}"));
        }
    }
    out
}
