// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

// =============================================================================
// to_name tests
// =============================================================================

#[test]
fn plain_token_name_is_its_text() {
    let token = Token::plain(0, 5, "hello");
    assert_eq!(token.to_name().unwrap(), "hello");
}

#[parameterized(
    reset = { "0", "/" },
    bold = { "1", "bold" },
    dim = { "2", "dim" },
    strikethrough = { "9", "strikethrough" },
    unset_italic = { "23", "/italic" },
    unset_foreground = { "39", "/fg" },
    unset_background = { "49", "/bg" },
)]
fn bare_code_names(code: &str, expected: &str) {
    let token = Token::code(0, 0, code, TokenAttribute::classify(code));
    assert_eq!(token.to_name().unwrap(), expected);
}

#[test]
fn shared_unset_code_resolves_deterministically() {
    // 22 clears both bold and dim; reverse lookup always picks the first
    // table entry.
    for _ in 0..3 {
        let token = Token::code(0, 0, "22", Some(TokenAttribute::Clear));
        assert_eq!(token.to_name().unwrap(), "/bold");
    }
}

#[parameterized(
    named_foreground = { "38;5;1", "red" },
    named_background = { "48;5;1", "@red" },
    numeric_foreground = { "38;5;141", "141" },
    numeric_background = { "48;5;141", "@141" },
    rgb = { "38;2;60;100;200", "60;100;200" },
    rgb_background = { "48;2;60;100;200", "@60;100;200" },
)]
fn composite_code_names(code: &str, expected: &str) {
    let token = Token::code(0, 0, code, TokenAttribute::classify(code));
    assert_eq!(token.to_name().unwrap(), expected);
}

#[test]
fn rgb_payload_never_aliases_to_a_color_name() {
    // Only 8-bit payloads consult the named table; 38;2;1;... starts with
    // red's index but is a different color entirely.
    let token = Token::code(0, 0, "38;2;1;2;3", Some(TokenAttribute::Color));
    assert_eq!(token.to_name().unwrap(), "1;2;3");
}

#[test]
fn short_composite_code_is_invalid() {
    let token = Token::code(3, 10, "38;5", Some(TokenAttribute::Color));
    assert_eq!(
        token.to_name(),
        Err(MarkupError::InvalidAnsiCode {
            code: "38;5".to_string(),
            start: 3,
            end: 10,
        })
    );
}

#[test]
fn out_of_range_bare_code_has_no_name() {
    let token = Token::code(0, 0, "42", None);
    assert_eq!(
        token.to_name(),
        Err(MarkupError::UnnamedCode("42".to_string()))
    );
}

// =============================================================================
// to_sequence tests
// =============================================================================

#[test]
fn plain_token_sequence_is_its_text() {
    let token = Token::plain(0, 2, "hi");
    assert_eq!(token.to_sequence(), "hi");
}

#[parameterized(
    bold = { "1", "\x1b[1m" },
    reset = { "0", "\x1b[0m" },
    color = { "38;5;141", "\x1b[38;5;141m" },
)]
fn code_token_sequences(code: &str, expected: &str) {
    let token = Token::code(0, 0, code, TokenAttribute::classify(code));
    assert_eq!(token.to_sequence(), expected);
}

// =============================================================================
// classification tests
// =============================================================================

#[parameterized(
    reset = { "0", Some(TokenAttribute::Clear) },
    empty_params = { "", Some(TokenAttribute::Clear) },
    bold = { "1", Some(TokenAttribute::Style) },
    strikethrough = { "9", Some(TokenAttribute::Style) },
    unset_bold = { "22", Some(TokenAttribute::Clear) },
    unset_foreground = { "39", Some(TokenAttribute::Clear) },
    unset_background = { "49", Some(TokenAttribute::Clear) },
    four_bit_foreground = { "31", Some(TokenAttribute::Color) },
    bright_foreground = { "91", Some(TokenAttribute::Color) },
    four_bit_background = { "41", Some(TokenAttribute::BackgroundColor) },
    eight_bit_foreground = { "38;5;141", Some(TokenAttribute::Color) },
    rgb_background = { "48;2;0;0;0", Some(TokenAttribute::BackgroundColor) },
    unknown_code = { "11", None },
    osc_params = { "0;window title", None },
)]
fn classify_sgr_payloads(value: &str, expected: Option<TokenAttribute>) {
    assert_eq!(TokenAttribute::classify(value), expected);
}

// =============================================================================
// serialization tests
// =============================================================================

#[test]
fn tokens_serialize_for_the_json_dump() {
    let plain = serde_json::to_value(Token::plain(0, 2, "hi")).unwrap();
    assert_eq!(plain["kind"]["plain"], "hi");

    let code = serde_json::to_value(Token::code(
        2,
        8,
        "1",
        Some(TokenAttribute::Style),
    ))
    .unwrap();
    assert_eq!(code["start"], 2);
    assert_eq!(code["kind"]["code"]["value"], "1");
    assert_eq!(code["kind"]["code"]["attribute"], "style");
}
