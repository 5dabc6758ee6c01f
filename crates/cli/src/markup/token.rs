// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tokens produced by the markup and ANSI tokenizers.

use serde::Serialize;

use super::error::{escape_ansi, MarkupError};

/// Style tag names, indexed by their SGR code.
pub const NAMES: [&str; 10] = [
    "/",
    "bold",
    "dim",
    "italic",
    "underline",
    "blink",
    "blink2",
    "inverse",
    "invisible",
    "strikethrough",
];

/// Unset tag spellings and their SGR clear codes.
///
/// Several spellings share a code (`/bold` and `/dim` both clear through
/// 22), so reverse lookup takes the first match in table order.
pub const UNSET_MAP: [(&str, &str); 11] = [
    ("/bold", "22"),
    ("/dim", "22"),
    ("/italic", "23"),
    ("/underline", "24"),
    ("/blink", "25"),
    ("/blink2", "26"),
    ("/inverse", "27"),
    ("/invisible", "28"),
    ("/strikethrough", "29"),
    ("/fg", "39"),
    ("/bg", "49"),
];

/// Semantic classification of a code token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenAttribute {
    /// A reset of one or all attributes.
    Clear,
    /// Foreground color.
    Color,
    /// Background color.
    BackgroundColor,
    /// Non-color, non-clear styling such as bold or italic.
    Style,
}

impl TokenAttribute {
    /// Classify a raw SGR parameter string.
    ///
    /// Returns `None` for payloads with no graphic-rendition meaning, such
    /// as OSC parameter strings.
    pub(crate) fn classify(value: &str) -> Option<Self> {
        if value.is_empty() || value == "0" {
            return Some(Self::Clear);
        }

        if value.bytes().all(|b| b.is_ascii_digit()) {
            if UNSET_MAP.iter().any(|(_, code)| *code == value) {
                return Some(Self::Clear);
            }
            return match value.parse::<u8>().ok()? {
                1..=9 => Some(Self::Style),
                30..=38 | 90..=97 => Some(Self::Color),
                40..=48 | 100..=107 => Some(Self::BackgroundColor),
                _ => None,
            };
        }

        if value.starts_with("38;") {
            return Some(Self::Color);
        }
        if value.starts_with("48;") {
            return Some(Self::BackgroundColor);
        }
        None
    }
}

/// The payload carried by a [`Token`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Literal text.
    Plain(String),
    /// A semantic escape payload: either a bare SGR number (`"1"` for
    /// bold) or a composite color payload (`"38;5;141"`).
    Code {
        value: String,
        attribute: Option<TokenAttribute>,
    },
}

/// One unit of either source format.
///
/// Constructed once by a tokenizer, immutable thereafter, consumed by a
/// converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Byte offset where the token's span begins.
    pub start: usize,
    /// Byte offset one past the end of the token's span.
    pub end: usize,
    /// Literal text or semantic code.
    pub kind: TokenKind,
}

impl Token {
    /// Create a plain-text token.
    pub fn plain(start: usize, end: usize, text: impl Into<String>) -> Self {
        Token {
            start,
            end,
            kind: TokenKind::Plain(text.into()),
        }
    }

    /// Create a code token.
    pub fn code(
        start: usize,
        end: usize,
        value: impl Into<String>,
        attribute: Option<TokenAttribute>,
    ) -> Self {
        Token {
            start,
            end,
            kind: TokenKind::Code {
                value: value.into(),
                attribute,
            },
        }
    }

    /// Project the token to its symbolic markup name.
    ///
    /// Plain text passes through. Bare numeric codes resolve through the
    /// unset table first, then the style-name table. Composite color codes
    /// map back to a palette name for 8-bit payloads and echo their
    /// numeric fields otherwise, with an `@` prefix for backgrounds.
    pub fn to_name(&self) -> Result<String, MarkupError> {
        let value = match &self.kind {
            TokenKind::Plain(text) => return Ok(text.clone()),
            TokenKind::Code { value, .. } => value,
        };

        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            if let Some((name, _)) = UNSET_MAP.iter().find(|(_, code)| *code == value.as_str()) {
                return Ok((*name).to_string());
            }
            return value
                .parse::<usize>()
                .ok()
                .and_then(|index| NAMES.get(index))
                .map(|name| (*name).to_string())
                .ok_or_else(|| MarkupError::UnnamedCode(value.clone()));
        }

        let fields: Vec<&str> = value.split(';').collect();
        let prefix = if fields.first() == Some(&"48") { "@" } else { "" };

        if fields.len() < 3 {
            return Err(MarkupError::InvalidAnsiCode {
                code: escape_ansi(value),
                start: self.start,
                end: self.end,
            });
        }

        // 8-bit payloads map back to a canonical color name where one exists.
        if fields.get(1) == Some(&"5") {
            if let Some(name) = fields
                .get(2)
                .and_then(|field| field.parse::<u8>().ok())
                .and_then(tintmark_palette::name_for)
            {
                return Ok(format!("{prefix}{name}"));
            }
        }

        Ok(format!("{prefix}{}", fields[2..].join(";")))
    }

    /// Project the token to its raw ANSI sequence.
    pub fn to_sequence(&self) -> String {
        match &self.kind {
            TokenKind::Plain(text) => text.clone(),
            TokenKind::Code { value, .. } => format!("\x1b[{value}m"),
        }
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
