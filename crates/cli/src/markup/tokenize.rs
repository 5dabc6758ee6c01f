// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lazy tokenizers for markup and ANSI source strings.

use std::collections::VecDeque;
use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};
use tintmark_palette::RESET;

use super::color::{resolve_color, resolve_named_color};
use super::error::{escape_ansi, MarkupError};
use super::token::{Token, TokenAttribute, NAMES, UNSET_MAP};

/// Regex for SGR escape sequences (`ESC [ params m`) and OSC-style
/// sequences terminated by a string terminator (`ESC ] params ESC \`).
static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1b\[(.*?)m|\x1b\](.*?)\x1b\\").expect("ANSI regex pattern is invalid")
});

/// Regex for bracketed tag groups: an optional run of backslashes, then a
/// bracket whose body starts with an allowed tag character.
static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: This regex pattern is a compile-time constant and is guaranteed to be valid
    #[allow(clippy::expect_used)]
    Regex::new(r"(\\*)\[([a-z0-9!#@/].*?)\]").expect("markup regex pattern is invalid")
});

/// Tokenize a markup string.
///
/// The returned iterator is lazy and yields an error for the first
/// unrecognized tag, after any tokens already produced for its group.
pub fn tokenize_markup(text: &str) -> MarkupTokens<'_> {
    MarkupTokens {
        text,
        matches: MARKUP_RE.captures_iter(text),
        pending: VecDeque::new(),
        position: 0,
        deferred: None,
        failed: false,
    }
}

/// Tokenize a string containing ANSI escape sequences.
///
/// A trailing full-reset token is synthesized when the input does not
/// already end with one, so every styled run is eventually terminated.
pub fn tokenize_ansi(text: &str) -> AnsiTokens<'_> {
    AnsiTokens {
        text,
        matches: ANSI_RE.captures_iter(text),
        pending: VecDeque::new(),
        position: 0,
        previous_code: None,
        needs_reset: !text.ends_with(RESET),
        finished: false,
    }
}

/// Lazy token stream over a markup source string.
pub struct MarkupTokens<'a> {
    text: &'a str,
    matches: CaptureMatches<'static, 'a>,
    pending: VecDeque<Token>,
    position: usize,
    deferred: Option<MarkupError>,
    failed: bool,
}

impl Iterator for MarkupTokens<'_> {
    type Item = Result<Token, MarkupError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            if let Some(error) = self.deferred.take() {
                self.failed = true;
                return Some(Err(error));
            }
            if self.failed {
                return None;
            }

            let Some(caps) = self.matches.next() else {
                self.failed = true;
                if self.position < self.text.len() {
                    let tail = Token::plain(
                        self.position,
                        self.text.len(),
                        &self.text[self.position..],
                    );
                    self.position = self.text.len();
                    return Some(Ok(tail));
                }
                return None;
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let (start, end) = (whole.start(), whole.end());

            if start > self.position {
                self.pending.push_back(Token::plain(
                    self.position,
                    start,
                    &self.text[self.position..start],
                ));
            }
            self.position = end;

            let escapes = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());

            if !escapes.is_empty() {
                // Complete escape pairs collapse to single literal
                // backslashes; any escape prefix keeps the bracket group
                // out of tag parsing entirely.
                let literal_start = start + escapes.len();
                let kept = escapes.len() / 2;
                if kept > 0 {
                    self.pending
                        .push_back(Token::plain(start, literal_start, "\\".repeat(kept)));
                }
                self.pending.push_back(Token::plain(
                    literal_start,
                    end,
                    &self.text[literal_start..end],
                ));
                continue;
            }

            for tag in body.split_whitespace() {
                match resolve_tag(tag) {
                    Ok((value, attribute)) => {
                        self.pending
                            .push_back(Token::code(start, end, value, Some(attribute)));
                    }
                    Err(error) => {
                        self.deferred = Some(error);
                        break;
                    }
                }
            }
        }
    }
}

/// Lazy token stream over an ANSI source string.
///
/// Keeps one token of lookback so a sequence identical to the immediately
/// preceding one collapses into a single token.
pub struct AnsiTokens<'a> {
    text: &'a str,
    matches: CaptureMatches<'static, 'a>,
    pending: VecDeque<Token>,
    position: usize,
    previous_code: Option<String>,
    needs_reset: bool,
    finished: bool,
}

impl Iterator for AnsiTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }

            let Some(caps) = self.matches.next() else {
                self.finished = true;
                if self.position < self.text.len() {
                    self.pending.push_back(Token::plain(
                        self.position,
                        self.text.len(),
                        &self.text[self.position..],
                    ));
                    self.previous_code = None;
                    self.position = self.text.len();
                }
                if self.needs_reset && self.previous_code.as_deref() != Some("0") {
                    let at = self.text.len();
                    self.pending
                        .push_back(Token::code(at, at, "0", TokenAttribute::classify("0")));
                }
                continue;
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let (start, end) = (whole.start(), whole.end());

            if start > self.position {
                self.pending.push_back(Token::plain(
                    self.position,
                    start,
                    &self.text[self.position..start],
                ));
                self.previous_code = None;
            }
            self.position = end;

            let params = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            if self.previous_code.as_deref() != Some(params) {
                self.pending.push_back(Token::code(
                    start,
                    end,
                    params,
                    TokenAttribute::classify(params),
                ));
                self.previous_code = Some(params.to_string());
            }
        }
    }
}

/// Resolve one tag word into its SGR code and attribute.
///
/// The chain order is a hard contract: style names, then unset names,
/// then named colors, then raw numeric colors.
fn resolve_tag(tag: &str) -> Result<(String, TokenAttribute), MarkupError> {
    if let Some(index) = NAMES.iter().position(|name| *name == tag) {
        let attribute = if tag == "/" {
            TokenAttribute::Clear
        } else {
            TokenAttribute::Style
        };
        return Ok((index.to_string(), attribute));
    }

    if let Some((_, code)) = UNSET_MAP.iter().find(|(name, _)| *name == tag) {
        return Ok(((*code).to_string(), TokenAttribute::Clear));
    }

    if let Some((payload, background)) = resolve_named_color(tag).or_else(|| resolve_color(tag)) {
        let attribute = if background {
            TokenAttribute::BackgroundColor
        } else {
            TokenAttribute::Color
        };
        return Ok((payload, attribute));
    }

    Err(MarkupError::UnrecognizedTag(escape_ansi(tag)))
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
