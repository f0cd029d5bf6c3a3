//! Measured, word-wrapped paragraphs
//!
//! A paragraph must be wrapped against a width before it can be drawn; the
//! wrap fixes its line breaks and therefore its height.

use crate::document::{Color, PdfDocument};
use crate::font::StandardFont;
use crate::text::word_wrap;
use crate::Align;

/// Visual style of a paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    pub font: StandardFont,
    pub font_size: f64,
    /// Distance between consecutive baselines
    pub leading: f64,
    pub color: Color,
    pub align: Align,
    /// Indent applied to every line, in points
    pub left_indent: f64,
    pub underline: bool,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            font: StandardFont::Helvetica,
            font_size: 10.0,
            leading: 12.0,
            color: Color::black(),
            align: Align::Left,
            left_indent: 0.0,
            underline: false,
        }
    }
}

impl ParagraphStyle {
    /// Copy of this style with a different left indent
    pub fn indented(&self, left_indent: f64) -> Self {
        Self {
            left_indent,
            ..self.clone()
        }
    }

    /// Copy of this style with a different alignment
    pub fn aligned(&self, align: Align) -> Self {
        Self {
            align,
            ..self.clone()
        }
    }
}

/// A paragraph that has been wrapped to a width
#[derive(Debug, Clone)]
pub struct Paragraph {
    text: String,
    style: ParagraphStyle,
    width: f64,
    lines: Vec<String>,
}

impl Paragraph {
    /// Wrap `text` to `avail_width` points (indent included)
    pub fn wrap(text: impl Into<String>, style: &ParagraphStyle, avail_width: f64) -> Self {
        let text = text.into();
        let line_width = (avail_width - style.left_indent).max(0.0);
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            word_wrap(&text, style.font, style.font_size, line_width)
        };

        Self {
            text,
            style: style.clone(),
            width: avail_width,
            lines,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &ParagraphStyle {
        &self.style
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Rendered height: one leading per wrapped line
    pub fn height(&self) -> f64 {
        self.lines.len() as f64 * self.style.leading
    }

    /// Draw with the bottom-left corner of the wrapped box at (x, y)
    pub fn draw_on(&self, doc: &mut PdfDocument, x: f64, y: f64) {
        let style = &self.style;
        let ascent = style.font.ascender() as f64 * style.font_size / 1000.0;
        let left = x + style.left_indent;
        let inner_width = self.width - style.left_indent;

        doc.set_font(style.font, style.font_size);
        doc.set_text_color(style.color);
        doc.set_stroke_color(style.color);

        let top = y + self.height();
        for (i, line) in self.lines.iter().enumerate() {
            let baseline = top - ascent - i as f64 * style.leading;
            let (anchor, line_left) = match style.align {
                Align::Left => (left, left),
                Align::Center => {
                    let center = left + inner_width / 2.0;
                    (center, center - doc.get_text_width(line) / 2.0)
                }
                Align::Right => {
                    let right = left + inner_width;
                    (right, right - doc.get_text_width(line))
                }
            };

            doc.insert_text(line, anchor, baseline, style.align);

            if style.underline && !line.is_empty() {
                let underline_y = baseline - style.font_size * 0.125;
                let line_width = doc.get_text_width(line);
                doc.line(
                    line_left,
                    underline_y,
                    line_left + line_width,
                    underline_y,
                    style.font_size / 20.0,
                );
            }
        }
    }
}
