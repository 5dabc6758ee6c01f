// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tokenizers and converters for terminal markup and ANSI strings.
//!
//! Recognized tags:
//!
//! - `/` (reset all), `bold`, `dim`, `italic`, `underline`, `blink`,
//!   `blink2`, `inverse`, `invisible`, `strikethrough` — SGR codes 0-9
//! - unset forms of the above (`/bold`, `/italic`, ...) plus `/fg` and
//!   `/bg` for returning to the default colors
//! - named colors (`red`, `brightblue`, ...), 8-bit palette indices
//!   (`141`), RGB triplets (`60;100;200`), and hex colors (`#ff0000`)
//! - `@`-prefixed versions of any color for the background (`@red`)
//!
//! The ANSI tokenizer only yields a sequence token when it differs from
//! the immediately preceding one, and implicitly terminates its input
//! with a full reset when it does not already end in one.

mod color;
mod convert;
mod error;
mod token;
mod tokenize;

pub use convert::{ansi_to_markup, markup_to_ansi, prettify_markup};
pub use error::{escape_ansi, MarkupError};
pub use token::{Token, TokenAttribute, TokenKind, NAMES, UNSET_MAP};
pub use tokenize::{tokenize_ansi, tokenize_markup, AnsiTokens, MarkupTokens};
