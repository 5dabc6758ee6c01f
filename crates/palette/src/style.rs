// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI styling helpers for decorating text.

/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

/// The canonical full-reset sequence.
pub fn reset() -> &'static str {
    RESET
}

/// Wrap text in bold styling.
///
/// With `reset_style` false the trailing reset is suppressed, which lets
/// callers splice the bold attribute into a longer sequence.
pub fn bold(text: &str, reset_style: bool) -> String {
    let trailer = if reset_style { RESET } else { "" };
    format!("\x1b[1m{text}{trailer}")
}

/// Wrap text in an 8-bit foreground color.
pub fn foreground(text: &str, index: u8) -> String {
    format!("\x1b[38;5;{index}m{text}{RESET}")
}

/// Wrap text in an 8-bit background color.
pub fn background(text: &str, index: u8) -> String {
    format!("\x1b[48;5;{index}m{text}{RESET}")
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
