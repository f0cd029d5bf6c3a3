//! Text rendering utilities

use crate::document::Color;
use crate::font::StandardFont;
use crate::Align;

/// Context for rendering text
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f64,
    /// Text width in points (for alignment)
    pub text_width: f64,
    /// Text color (RGB)
    pub color: Color,
}

/// Escape encoded bytes as a PDF literal string, including the parentheses
pub fn encode_literal(codes: &[u8]) -> String {
    let mut out = String::with_capacity(codes.len() + 2);
    out.push('(');
    for &b in codes {
        match b {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7E => out.push(b as char),
            _ => out.push_str(&format!("\\{b:03o}")),
        }
    }
    out.push(')');
    out
}

/// Generate PDF operators for text insertion
///
/// Creates the text operators (BT, Tf, Td, Tj, ET) to render text at a
/// baseline position with alignment support.
///
/// # Arguments
/// * `text_literal` - Escaped literal string (e.g., "(Hello)")
/// * `x` - X anchor in points (PDF coordinates, from left)
/// * `y` - Baseline in points (PDF coordinates, from bottom)
/// * `align` - Which side of the text `x` anchors
/// * `ctx` - Text rendering context
pub fn generate_text_operators(
    text_literal: &str,
    x: f64,
    y: f64,
    align: Align,
    ctx: &TextRenderContext,
) -> Vec<u8> {
    let mut ops = String::new();

    let x_offset = match align {
        Align::Left => 0.0,
        Align::Center => -ctx.text_width / 2.0,
        Align::Right => -ctx.text_width,
    };

    let final_x = x + x_offset;

    ops.push_str("BT\n");
    ops.push_str(&format!(
        "{} {} {} rg\n",
        ctx.color.r, ctx.color.g, ctx.color.b
    ));
    ops.push_str(&format!("/{} {} Tf\n", ctx.font_name, ctx.font_size));
    ops.push_str(&format!("{final_x} {y} Td\n"));
    ops.push_str(&format!("{text_literal} Tj\n"));
    ops.push_str("ET\n");

    ops.into_bytes()
}

/// Split text into lines that fit within `max_width` points
///
/// Explicit line breaks are kept. Words are separated on whitespace; a
/// single word wider than the line is broken between characters.
pub fn word_wrap(text: &str, font: StandardFont, font_size: f64, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let raw_line = raw_line.trim_end_matches('\r');
        let mut current = String::new();

        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if font.text_width_points(&candidate, font_size) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            if font.text_width_points(word, font_size) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = break_word(word, font, font_size, max_width);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }

        lines.push(current);
    }

    lines
}

/// Break an over-long word into chunks no wider than `max_width`
fn break_word(word: &str, font: StandardFont, font_size: f64, max_width: f64) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();

    for c in word.chars() {
        piece.push(c);
        if piece.chars().count() > 1 && font.text_width_points(&piece, font_size) > max_width {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }

    pieces
}
