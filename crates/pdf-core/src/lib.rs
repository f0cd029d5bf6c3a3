//! PDF Core - Single-page PDF drawing surface
//!
//! This crate provides functionality for:
//! - Creating a blank page and saving it to bytes
//! - Placing text with the standard Type1 fonts (no embedding needed)
//! - Inserting images (JPEG, PNG)
//! - Filling and stroking rectangles, rounded rectangles and rules
//! - Measuring and drawing wrapped paragraphs and styled tables
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Align, Color, PdfDocument, StandardFont};
//!
//! let mut doc = PdfDocument::a4();
//! doc.set_font(StandardFont::HelveticaBold, 12.0);
//! doc.set_fill_color(Color::black());
//! doc.insert_text("Hello, World!", 100.0, 700.0, Align::Left);
//! let bytes = doc.to_bytes()?;
//! ```

mod document;
mod font;
mod image;
mod paragraph;
mod table;
mod text;

pub use document::{Color, PdfDocument, A4_HEIGHT, A4_WIDTH};
pub use font::StandardFont;
pub use image::ImageXObject;
pub use paragraph::{Paragraph, ParagraphStyle};
pub use table::{Cell, RowStyle, Table, VerticalAlign, WrappedTable};
pub use text::{encode_literal, generate_text_operators, word_wrap, TextRenderContext};

use thiserror::Error;

/// Points per inch
pub const INCH: f64 = 72.0;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("Table error: {0}")]
    TableError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
