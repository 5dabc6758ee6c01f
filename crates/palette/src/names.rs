// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named-color table and hex color translation.

use thiserror::Error;

/// Named colors mapped to their 8-bit palette index.
///
/// Order matters: reverse lookup returns the first match, so the base
/// colors come before their bright variants.
pub const NAMED_COLORS: [(&str, u8); 16] = [
    ("black", 0),
    ("red", 1),
    ("green", 2),
    ("yellow", 3),
    ("blue", 4),
    ("magenta", 5),
    ("cyan", 6),
    ("white", 7),
    ("brightblack", 8),
    ("brightred", 9),
    ("brightgreen", 10),
    ("brightyellow", 11),
    ("brightblue", 12),
    ("brightmagenta", 13),
    ("brightcyan", 14),
    ("brightwhite", 15),
];

/// Error raised for a hex color that cannot be translated to RGB.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color \"{0}\"")]
pub struct HexColorError(pub String);

/// Look up the palette index for a color name.
pub fn lookup(name: &str) -> Option<u8> {
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, index)| *index)
}

/// Look up the canonical name for a palette index.
///
/// Returns the first match in table order, so shared indices resolve the
/// same way on every call.
pub fn name_for(index: u8) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(_, candidate)| *candidate == index)
        .map(|(name, _)| *name)
}

/// Translate a hex color (`#rrggbb` or `#rgb`, leading `#` optional) into
/// its RGB components.
pub fn translate_hex(hex: &str) -> Result<(u8, u8, u8), HexColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() {
        return Err(HexColorError(hex.to_string()));
    }

    match digits.len() {
        6 => {
            let r = parse_channel(&digits[0..2], hex)?;
            let g = parse_channel(&digits[2..4], hex)?;
            let b = parse_channel(&digits[4..6], hex)?;
            Ok((r, g, b))
        }
        // Shorthand form: each digit doubles, so "#f80" means "#ff8800".
        3 => {
            let r = parse_channel(&digits[0..1].repeat(2), hex)?;
            let g = parse_channel(&digits[1..2].repeat(2), hex)?;
            let b = parse_channel(&digits[2..3].repeat(2), hex)?;
            Ok((r, g, b))
        }
        _ => Err(HexColorError(hex.to_string())),
    }
}

fn parse_channel(digits: &str, original: &str) -> Result<u8, HexColorError> {
    u8::from_str_radix(digits, 16).map_err(|_| HexColorError(original.to_string()))
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod tests;
