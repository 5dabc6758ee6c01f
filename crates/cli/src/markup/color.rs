// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color tag resolution.
//!
//! Classifies a markup tag as a color expression and computes its numeric
//! SGR payload. Named colors resolve through the palette table; raw tags
//! cover 8-bit palette indices, `;`-separated RGB triplets, and hex form.

use tintmark_palette::{lookup, translate_hex};

/// Resolve a raw color tag into `(payload, is_background)`.
///
/// Returns `None` for tags that are not color expressions, so style and
/// name tags fall through to the other resolvers.
pub(crate) fn resolve_color(tag: &str) -> Option<(String, bool)> {
    let (body, background) = split_background(tag);

    if body.is_empty() {
        return None;
    }
    if !body
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '#' | ';' | 'a'..='f'))
    {
        return None;
    }

    let hex = body.starts_with('#');
    // 8-bit palette indices use the 5; selector, RGB and hex use 2;.
    let selector = if body.matches(';').count() < 2 && !hex {
        "5;"
    } else {
        "2;"
    };

    let fields = if hex {
        let (r, g, b) = translate_hex(body).ok()?;
        format!("{r};{g};{b}")
    } else {
        body.to_string()
    };

    let prefix = if background { "48;" } else { "38;" };
    Some((format!("{prefix}{selector}{fields}"), background))
}

/// Resolve a named color tag by substituting its palette index and
/// re-running the numeric path.
///
/// Tried before raw numeric parsing: a bare digit string is ambiguous
/// between a name's index and a literal palette position.
pub(crate) fn resolve_named_color(tag: &str) -> Option<(String, bool)> {
    let (name, background) = split_background(tag);
    let index = lookup(name)?;

    let spelled = if background {
        format!("@{index}")
    } else {
        index.to_string()
    };
    resolve_color(&spelled)
}

fn split_background(tag: &str) -> (&str, bool) {
    match tag.strip_prefix('@') {
        Some(rest) => (rest, true),
        None => (tag, false),
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
