//! # Input Classification
//!
//! Decides whether a line of user input is stored as a fixed-size integer
//! or as a string. The policy sits behind the [`Classifier`] trait so it can
//! be swapped without touching the menu loop.

use std::fmt;

/// What a line of input should be stored as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// A signed integer, stored as 8 native-endian bytes.
    Integer(i64),
    /// Arbitrary bytes, stored per the configured string encoding.
    ///
    /// Not necessarily UTF-8: the console stores whatever was typed.
    Text(Vec<u8>),
    /// Nothing is stored.
    Rejected(Rejection),
}

/// Why a line was not stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The line was blank.
    Empty,
    /// A number was followed by other characters.
    TrailingCharacters(String),
    /// The digits do not fit in an `i64`.
    OutOfRange,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty input"),
            Self::TrailingCharacters(rest) => write!(f, "extra characters after number: {rest:?}"),
            Self::OutOfRange => f.write_str("integer out of range"),
        }
    }
}

/// Policy mapping a raw input line to an [`Input`].
pub trait Classifier {
    /// Classifies one line. The line may still carry its terminator and
    /// need not be valid UTF-8.
    fn classify(&self, line: &[u8]) -> Input;
}

/// Classifies like C's `strtol` with base 10.
///
/// - Leading whitespace and one optional `+` or `-` precede the digits
/// - No digits at all: the line is text
/// - Digits followed only by whitespace: the line is an integer
/// - Digits followed by anything else: rejected
#[derive(Clone, Copy, Debug, Default)]
pub struct StrtolClassifier;

impl Classifier for StrtolClassifier {
    fn classify(&self, line: &[u8]) -> Input {
        let line = strip_terminator(line);
        if trim(line).is_empty() {
            return Input::Rejected(Rejection::Empty);
        }

        let body = trim_start(line);
        let sign_len = usize::from(matches!(body.first(), Some(b'+' | b'-')));
        let digit_len = body[sign_len..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digit_len == 0 {
            return Input::Text(line.to_vec());
        }

        let (number, rest) = body.split_at(sign_len + digit_len);
        let rest = trim(rest);
        if !rest.is_empty() {
            let rest = String::from_utf8_lossy(rest).into_owned();
            return Input::Rejected(Rejection::TrailingCharacters(rest));
        }

        // Sign and ASCII digits only, so this is valid UTF-8.
        match std::str::from_utf8(number).map(str::parse::<i64>) {
            Ok(Ok(value)) => Input::Integer(value),
            _ => Input::Rejected(Rejection::OutOfRange),
        }
    }
}

/// Drops trailing `\n` and `\r` bytes.
fn strip_terminator(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\n' | b'\r'] = line {
        line = rest;
    }
    line
}

fn trim_start(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    &line[start..]
}

fn trim(line: &[u8]) -> &[u8] {
    let line = trim_start(line);
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    &line[..end]
}
