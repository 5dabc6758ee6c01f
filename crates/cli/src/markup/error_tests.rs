// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    plain = { "hello", "hello" },
    escape = { "\x1b[1m", "\\x1b[1m" },
    newline = { "a\nb", "a\\nb" },
    tab = { "a\tb", "a\\tb" },
    carriage_return = { "a\rb", "a\\rb" },
    backslash = { "a\\b", "a\\\\b" },
    bell = { "\x07", "\\x07" },
    delete = { "\x7f", "\\x7f" },
    unicode_passthrough = { "▐▛", "▐▛" },
)]
fn escape_ansi_cases(input: &str, expected: &str) {
    assert_eq!(escape_ansi(input), expected);
}

#[test]
fn unrecognized_tag_message_names_the_tag() {
    let error = MarkupError::UnrecognizedTag("notacolor".to_string());
    assert_eq!(
        error.to_string(),
        "Markup tag \"notacolor\" is not recognized"
    );
}

#[test]
fn invalid_ansi_code_message_carries_span() {
    let error = MarkupError::InvalidAnsiCode {
        code: "38;5".to_string(),
        start: 2,
        end: 9,
    };
    assert_eq!(
        error.to_string(),
        "Invalid ANSI code \"38;5\" in token at bytes 2..9"
    );
}
