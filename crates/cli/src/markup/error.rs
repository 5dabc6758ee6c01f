// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Conversion errors and display-safe escaping.

use thiserror::Error;

/// Errors raised while resolving markup tags or ANSI codes.
///
/// A conversion either fully succeeds or fails with one of these; there is
/// no partial-result mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// A markup tag matched none of the style, unset, named-color, or
    /// numeric-color forms.
    #[error("Markup tag \"{0}\" is not recognized")]
    UnrecognizedTag(String),

    /// A composite ANSI color code carried fewer than three fields.
    #[error("Invalid ANSI code \"{code}\" in token at bytes {start}..{end}")]
    InvalidAnsiCode {
        code: String,
        start: usize,
        end: usize,
    },

    /// A bare numeric SGR code with no markup name.
    #[error("ANSI code \"{0}\" has no markup name")]
    UnnamedCode(String),
}

/// Produce a printable, display-safe representation of text that may
/// contain raw escape bytes. Used for error messages.
pub fn escape_ansi(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\x1b' => escaped.push_str("\\x1b"),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            control if (control as u32) < 0x20 || control == '\x7f' => {
                escaped.push_str(&format!("\\x{:02x}", control as u32));
            }
            printable => escaped.push(printable),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
