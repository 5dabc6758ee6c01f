// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tintmark
//!
//! Converts between two textual representations of terminal text styling:
//! a human-writable markup language (`[bold @red]text[/]`) and the raw
//! escape-sequence encoding a terminal consumes
//! (`\x1b[1m\x1b[48;5;1mtext\x1b[0m`). The reverse transform and a
//! prettify mode for displaying markup source are included.
//!
//! ```
//! use tintmark::markup::{ansi_to_markup, markup_to_ansi};
//!
//! let ansi = markup_to_ansi("[bold]hi").unwrap();
//! assert_eq!(ansi, "\x1b[1mhi\x1b[0m");
//! assert_eq!(ansi_to_markup(&ansi).unwrap(), "[bold]hi[/]");
//! ```

pub mod cli;
pub mod markup;

pub use markup::{
    ansi_to_markup, escape_ansi, markup_to_ansi, prettify_markup, tokenize_ansi, tokenize_markup,
    MarkupError, Token, TokenAttribute, TokenKind,
};
