// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    eight_bit = { "141", "38;5;141", false },
    eight_bit_background = { "@141", "48;5;141", true },
    four_bit = { "1", "38;5;1", false },
    rgb = { "60;100;200", "38;2;60;100;200", false },
    rgb_background = { "@60;100;200", "48;2;60;100;200", true },
    hex = { "#ff0000", "38;2;255;0;0", false },
    hex_background = { "@#ff0000", "48;2;255;0;0", true },
)]
fn resolve_color_valid(tag: &str, payload: &str, background: bool) {
    assert_eq!(
        resolve_color(tag),
        Some((payload.to_string(), background))
    );
}

#[parameterized(
    style_name = { "bold" },
    unset_name = { "/bold" },
    word = { "notacolor" },
    empty = { "" },
    bare_at = { "@" },
    bad_hex = { "#xyz" },
)]
fn resolve_color_rejects_non_colors(tag: &str) {
    assert_eq!(resolve_color(tag), None);
}

#[parameterized(
    red = { "red", "38;5;1", false },
    background_red = { "@red", "48;5;1", true },
    bright = { "brightwhite", "38;5;15", false },
)]
fn resolve_named_color_valid(tag: &str, payload: &str, background: bool) {
    assert_eq!(
        resolve_named_color(tag),
        Some((payload.to_string(), background))
    );
}

#[test]
fn resolve_named_color_rejects_unknown_names() {
    assert_eq!(resolve_named_color("salmon"), None);
    assert_eq!(resolve_named_color("141"), None);
}
