// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    black = { "black", Some(0) },
    red = { "red", Some(1) },
    white = { "white", Some(7) },
    bright_red = { "brightred", Some(9) },
    bright_white = { "brightwhite", Some(15) },
    unknown = { "salmon", None },
    empty = { "", None },
)]
fn lookup_by_name(name: &str, expected: Option<u8>) {
    assert_eq!(lookup(name), expected);
}

#[parameterized(
    zero = { 0, Some("black") },
    one = { 1, Some("red") },
    fifteen = { 15, Some("brightwhite") },
    out_of_table = { 141, None },
)]
fn name_for_index(index: u8, expected: Option<&str>) {
    assert_eq!(name_for(index), expected);
}

#[test]
fn name_for_is_stable_across_calls() {
    for _ in 0..3 {
        assert_eq!(name_for(1), Some("red"));
    }
}

#[parameterized(
    red = { "#ff0000", (255, 0, 0) },
    green = { "#00ff00", (0, 255, 0) },
    mixed = { "#d77757", (215, 119, 87) },
    no_hash = { "d77757", (215, 119, 87) },
    shorthand = { "#f80", (255, 136, 0) },
    uppercase = { "#FF8800", (255, 136, 0) },
)]
fn translate_hex_valid(hex: &str, expected: (u8, u8, u8)) {
    assert_eq!(translate_hex(hex).unwrap(), expected);
}

#[parameterized(
    empty = { "" },
    bare_hash = { "#" },
    too_short = { "#ff00" },
    too_long = { "#ff00000" },
    not_hex = { "#zzzzzz" },
)]
fn translate_hex_invalid(hex: &str) {
    assert_eq!(translate_hex(hex), Err(HexColorError(hex.to_string())));
}
