//! Positioned drawing instructions
//!
//! The layout produces a flat, ordered list of these; painting replays
//! them onto a document in the same order.

use pdf_core::{
    Align, Color, ImageXObject, Paragraph, PdfDocument, StandardFont,
    WrappedTable,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum DrawInstruction {
    /// One line of text; `y` is the baseline, `x` the anchor for `align`
    Text {
        text: String,
        x: f64,
        y: f64,
        font: StandardFont,
        size: f64,
        color: Color,
        align: Align,
    },
    /// Centred text rotated counter-clockwise around (x, y)
    RotatedText {
        text: String,
        x: f64,
        y: f64,
        degrees: f64,
        font: StandardFont,
        size: f64,
        color: Color,
    },
    /// A wrapped paragraph with its bottom-left corner at (x, y)
    Paragraph { paragraph: Paragraph, x: f64, y: f64 },
    /// A wrapped table with its bottom-left corner at (x, y)
    Table { table: WrappedTable, x: f64, y: f64 },
    /// An image stretched to the box
    Image {
        image: Arc<ImageXObject>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    FillRoundRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
        color: Color,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: Color,
    },
}

impl DrawInstruction {
    /// Every piece of text this instruction prints
    pub fn texts(&self) -> Vec<String> {
        match self {
            DrawInstruction::Text { text, .. } | DrawInstruction::RotatedText { text, .. } => {
                vec![text.clone()]
            }
            DrawInstruction::Paragraph { paragraph, .. } => vec![paragraph.text().to_string()],
            DrawInstruction::Table { table, .. } => table
                .cell_texts()
                .into_iter()
                .flatten()
                .filter(|t| !t.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn paint(&self, doc: &mut PdfDocument) {
        match self {
            DrawInstruction::Text {
                text,
                x,
                y,
                font,
                size,
                color,
                align,
            } => {
                doc.set_font(*font, *size);
                doc.set_text_color(*color);
                doc.insert_text(text, *x, *y, *align);
            }
            DrawInstruction::RotatedText {
                text,
                x,
                y,
                degrees,
                font,
                size,
                color,
            } => {
                doc.set_font(*font, *size);
                doc.set_text_color(*color);
                doc.insert_text_rotated(text, *x, *y, *degrees, Align::Center);
            }
            DrawInstruction::Paragraph { paragraph, x, y } => paragraph.draw_on(doc, *x, *y),
            DrawInstruction::Table { table, x, y } => table.draw_on(doc, *x, *y),
            DrawInstruction::Image {
                image,
                x,
                y,
                width,
                height,
            } => {
                doc.insert_image(image, *x, *y, *width, *height);
            }
            DrawInstruction::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                doc.set_fill_color(*color);
                doc.fill_rect(*x, *y, *width, *height);
            }
            DrawInstruction::FillRoundRect {
                x,
                y,
                width,
                height,
                radius,
                color,
            } => {
                doc.set_fill_color(*color);
                doc.fill_round_rect(*x, *y, *width, *height, *radius);
            }
            DrawInstruction::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => {
                doc.set_stroke_color(*color);
                doc.line(*x1, *y1, *x2, *y2, *width);
            }
        }
    }
}
