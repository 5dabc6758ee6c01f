// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Converters folding token streams into output strings.

use tintmark_palette::{bold, foreground, RESET};

use super::error::MarkupError;
use super::token::{Token, TokenAttribute, TokenKind};
use super::tokenize::{tokenize_ansi, tokenize_markup};

/// Highlight color for clear tags in prettified output.
const CLEAR_HIGHLIGHT: u8 = 210;
/// Highlight color for style tags in prettified output.
const STYLE_HIGHLIGHT: u8 = 114;

/// Convert markup into an ANSI escape sequence string.
///
/// The output always ends with the full-reset sequence.
pub fn markup_to_ansi(markup: &str) -> Result<String, MarkupError> {
    let mut ansi = String::new();
    for token in tokenize_markup(markup) {
        ansi.push_str(&token?.to_sequence());
    }

    if !ansi.ends_with(RESET) {
        ansi.push_str(RESET);
    }
    Ok(ansi)
}

/// Convert an ANSI escape sequence string into markup.
///
/// Consecutive code tokens accumulate into one bracket group, flushed by
/// the next plain-text token. The output always ends with a bracket
/// group, `[/]` in the common case of reset-terminated input.
pub fn ansi_to_markup(ansi: &str) -> Result<String, MarkupError> {
    let mut markup = String::new();
    let mut group: Vec<String> = Vec::new();
    let mut in_group = false;

    for token in tokenize_ansi(ansi) {
        match &token.kind {
            TokenKind::Code { .. } => {
                in_group = true;
                group.push(token.to_name()?);
            }
            TokenKind::Plain(text) => {
                if in_group {
                    flush_group(&mut markup, &mut group);
                    in_group = false;
                }
                markup.push_str(text);
            }
        }
    }

    flush_group(&mut markup, &mut group);
    Ok(markup)
}

fn flush_group(markup: &mut String, group: &mut Vec<String>) {
    markup.push('[');
    markup.push_str(&group.join(" "));
    markup.push(']');
    group.clear();
}

/// Render markup source as syntax-highlighted ANSI output for display.
///
/// Literal text is echoed under the attributes currently applied to it;
/// each bracket group is rendered with bold delimiters and per-tag
/// highlighting.
pub fn prettify_markup(markup: &str) -> Result<String, MarkupError> {
    let mut out = String::new();
    // Tokens of the group being rendered, and the raw sequences currently
    // applied to literal text.
    let mut visual: Vec<Token> = Vec::new();
    let mut applied: Vec<String> = Vec::new();

    for token in tokenize_markup(markup) {
        let token = token?;
        match &token.kind {
            TokenKind::Code { value, attribute } => {
                if *attribute == Some(TokenAttribute::Clear) {
                    if value.as_str() == "0" {
                        applied.clear();
                    } else {
                        for set_code in set_codes_for_unset(value) {
                            let sequence = format!("\x1b[{set_code}m");
                            applied.retain(|active| *active != sequence);
                        }
                    }
                }
                applied.push(token.to_sequence());
                visual.push(token);
            }
            TokenKind::Plain(text) => {
                if !visual.is_empty() {
                    out.push_str(&style_attributes(&visual)?);
                    visual.clear();
                }
                for sequence in &applied {
                    out.push_str(sequence);
                }
                out.push_str(text);
                out.push_str(RESET);
            }
        }
    }

    if !visual.is_empty() {
        out.push_str(&style_attributes(&visual)?);
    }
    Ok(out)
}

/// Set codes cleared by an unset code.
///
/// SGR 22 clears both bold and dim; the remaining unset codes map
/// one-to-one. Color unsets (39, 49) leave the applied stack alone.
fn set_codes_for_unset(code: &str) -> &'static [u8] {
    match code {
        "22" => &[1, 2],
        "23" => &[3],
        "24" => &[4],
        "25" => &[5],
        "26" => &[6],
        "27" => &[7],
        "28" => &[8],
        "29" => &[9],
        _ => &[],
    }
}

/// Render one bracket group with highlighted tags.
fn style_attributes(tokens: &[Token]) -> Result<String, MarkupError> {
    let mut styled = bold("[", true);

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            styled.push(' ');
        }
        let TokenKind::Code { attribute, .. } = &token.kind else {
            continue;
        };

        match attribute {
            Some(TokenAttribute::Clear) => {
                styled.push_str(&foreground(&token.to_name()?, CLEAR_HIGHLIGHT));
            }
            Some(TokenAttribute::Color) => {
                styled.push_str(&token.to_sequence());
                styled.push_str(&token.to_name()?);
                styled.push_str(RESET);
            }
            Some(TokenAttribute::BackgroundColor) => {
                // Shown as a bold foreground swatch so the name stays
                // readable against the terminal background.
                let sequence = token.to_sequence();
                let mut fields: Vec<String> = sequence.split(';').map(String::from).collect();
                if let Some(first) = fields.first_mut() {
                    *first = format!("{}\x1b[38", bold("", false));
                }
                styled.push_str(&fields.join(";"));
                styled.push_str(&token.to_name()?);
                styled.push_str(RESET);
            }
            Some(TokenAttribute::Style) | None => {
                styled.push_str(&token.to_sequence());
                styled.push_str(&foreground(&token.to_name()?, STYLE_HIGHLIGHT));
            }
        }
    }

    styled.push_str(&bold("]", true));
    Ok(styled)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
