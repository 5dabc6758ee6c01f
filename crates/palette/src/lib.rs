// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal palette tables and styling helpers.
//!
//! This crate owns the terminal-capability layer used by the tintmark
//! converters: the named-color table, hex color translation, and the small
//! decoration helpers that wrap text in a specific attribute.

mod names;
mod style;

pub use names::{lookup, name_for, translate_hex, HexColorError, NAMED_COLORS};
pub use style::{background, bold, foreground, reset, RESET};
