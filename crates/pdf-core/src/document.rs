//! Single-page PDF document
//!
//! Coordinates are PDF user space: points, origin at the bottom-left corner
//! of the page, y growing upwards.

use crate::font::StandardFont;
use crate::image::{generate_image_operators, ImageXObject};
use crate::text::{encode_literal, generate_text_operators, TextRenderContext};
use crate::{Align, PdfError, Result};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A4 width in points
pub const A4_WIDTH: f64 = 595.2755905511812;
/// A4 height in points
pub const A4_HEIGHT: f64 = 841.8897637795277;

/// Bezier control distance for a quarter circle of radius 1
const KAPPA: f64 = 0.552_284_749_8;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    pub const fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }

    pub const fn green() -> Self {
        Self::rgb(0.0, 0.5, 0.0)
    }

    pub const fn dark_gray() -> Self {
        Self::rgb(0.66, 0.66, 0.66)
    }

    pub const fn light_gray() -> Self {
        Self::rgb(0.83, 0.83, 0.83)
    }

    fn operands(&self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// An image registered as a page resource
struct EmbeddedImage {
    hash: u64,
    resource_name: String,
    object_id: ObjectId,
}

/// Single-page PDF document with a buffered content stream
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    width: f64,
    height: f64,
    /// Fonts in first-use order; resource name is `F{index + 1}`
    fonts: Vec<StandardFont>,
    images: Vec<EmbeddedImage>,
    current_font: StandardFont,
    current_font_size: f64,
    current_text_color: Color,
    current_fill_color: Color,
    current_stroke_color: Color,
    /// Page content operators, written once on save
    content: Vec<u8>,
}

impl PdfDocument {
    /// Create a document with one blank page of the given size in points
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            inner: Document::with_version("1.5"),
            width,
            height,
            fonts: Vec::new(),
            images: Vec::new(),
            current_font: StandardFont::Helvetica,
            current_font_size: 12.0,
            current_text_color: Color::black(),
            current_fill_color: Color::black(),
            current_stroke_color: Color::black(),
            content: Vec::new(),
        }
    }

    /// Create a document with one blank A4 page
    pub fn a4() -> Self {
        Self::new(A4_WIDTH, A4_HEIGHT)
    }

    pub fn page_width(&self) -> f64 {
        self.width
    }

    pub fn page_height(&self) -> f64 {
        self.height
    }

    /// Set the current font and size
    pub fn set_font(&mut self, font: StandardFont, size: f64) {
        self.current_font = font;
        self.current_font_size = size;
    }

    /// Set the text color
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    /// Set the fill color used by shapes
    pub fn set_fill_color(&mut self, color: Color) {
        self.current_fill_color = color;
    }

    /// Set the stroke color used by rules and outlines
    pub fn set_stroke_color(&mut self, color: Color) {
        self.current_stroke_color = color;
    }

    /// Width of `text` in the current font and size, in points
    pub fn get_text_width(&self, text: &str) -> f64 {
        self.current_font
            .text_width_points(text, self.current_font_size)
    }

    /// Insert a single line of text
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `x` - Anchor x in points; `align` says which side of the text it marks
    /// * `y` - Baseline in points (from bottom)
    /// * `align` - Text alignment
    pub fn insert_text(&mut self, text: &str, x: f64, y: f64, align: Align) {
        if text.is_empty() {
            return;
        }

        let ctx = self.text_context(text);
        let literal = encode_literal(&self.current_font.encode(text));
        let operators = generate_text_operators(&literal, x, y, align, &ctx);
        self.content.extend_from_slice(&operators);
    }

    /// Insert a single line of text rotated counter-clockwise around (x, y)
    pub fn insert_text_rotated(&mut self, text: &str, x: f64, y: f64, degrees: f64, align: Align) {
        if text.is_empty() {
            return;
        }

        let (sin, cos) = degrees.to_radians().sin_cos();
        // Snap so that 90 degrees yields an exact matrix
        let (sin, cos) = (snap(sin), snap(cos));

        let ctx = self.text_context(text);
        let literal = encode_literal(&self.current_font.encode(text));
        let operators = generate_text_operators(&literal, 0.0, 0.0, align, &ctx);

        self.push_ops(&format!("q\n{cos} {sin} {} {cos} {x} {y} cm\n", -sin));
        self.content.extend_from_slice(&operators);
        self.push_ops("Q\n");
    }

    fn text_context(&mut self, text: &str) -> TextRenderContext {
        TextRenderContext {
            font_name: self.font_resource_name(self.current_font),
            font_size: self.current_font_size,
            text_width: self.get_text_width(text),
            color: self.current_text_color,
        }
    }

    /// Get (or assign) the resource name for a font
    fn font_resource_name(&mut self, font: StandardFont) -> String {
        let index = match self.fonts.iter().position(|f| *f == font) {
            Some(index) => index,
            None => {
                self.fonts.push(font);
                self.fonts.len() - 1
            }
        };
        format!("F{}", index + 1)
    }

    /// Stretch a decoded image over the box with bottom-left corner (x, y)
    pub fn insert_image(&mut self, image: &ImageXObject, x: f64, y: f64, width: f64, height: f64) {
        let resource_name = self.get_or_create_image_ref(image);
        let operators = generate_image_operators(&resource_name, x, y, width, height);
        self.content.extend_from_slice(&operators);
    }

    /// Get or create an image resource; images are deduplicated by data hash
    fn get_or_create_image_ref(&mut self, image: &ImageXObject) -> String {
        let mut hasher = DefaultHasher::new();
        image.data.hash(&mut hasher);
        image.soft_mask.hash(&mut hasher);
        let hash = hasher.finish();

        if let Some(existing) = self.images.iter().find(|i| i.hash == hash) {
            return existing.resource_name.clone();
        }

        let smask_id = image
            .soft_mask_stream()
            .map(|stream| self.inner.add_object(stream));
        let object_id = self.inner.add_object(image.to_pdf_stream(smask_id));
        let resource_name = format!("Im{}", self.images.len() + 1);

        self.images.push(EmbeddedImage {
            hash,
            resource_name: resource_name.clone(),
            object_id,
        });

        resource_name
    }

    /// Fill a rectangle with the current fill color
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let ops = format!(
            "q\n{} rg\n{x} {y} {width} {height} re\nf\nQ\n",
            self.current_fill_color.operands()
        );
        self.push_ops(&ops);
    }

    /// Stroke a rectangle outline with the current stroke color
    pub fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64, line_width: f64) {
        let ops = format!(
            "q\n{} RG\n{line_width} w\n{x} {y} {width} {height} re\nS\nQ\n",
            self.current_stroke_color.operands()
        );
        self.push_ops(&ops);
    }

    /// Fill a rectangle with rounded corners
    pub fn fill_round_rect(&mut self, x: f64, y: f64, width: f64, height: f64, radius: f64) {
        let r = radius.min(width / 2.0).min(height / 2.0).max(0.0);
        let k = r * KAPPA;
        let (x1, y1) = (x + width, y + height);

        let mut ops = format!("q\n{} rg\n", self.current_fill_color.operands());
        ops.push_str(&format!("{} {y} m\n", x + r));
        ops.push_str(&format!("{} {y} l\n", x1 - r));
        ops.push_str(&format!("{} {y} {x1} {} {x1} {} c\n", x1 - r + k, y + r - k, y + r));
        ops.push_str(&format!("{x1} {} l\n", y1 - r));
        ops.push_str(&format!("{x1} {} {} {y1} {} {y1} c\n", y1 - r + k, x1 - r + k, x1 - r));
        ops.push_str(&format!("{} {y1} l\n", x + r));
        ops.push_str(&format!("{} {y1} {x} {} {x} {} c\n", x + r - k, y1 - r + k, y1 - r));
        ops.push_str(&format!("{x} {} l\n", y + r));
        ops.push_str(&format!("{x} {} {} {y} {} {y} c\n", y + r - k, x + r - k, x + r));
        ops.push_str("h\nf\nQ\n");
        self.push_ops(&ops);
    }

    /// Stroke a straight line with the current stroke color
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, line_width: f64) {
        let ops = format!(
            "q\n{} RG\n{line_width} w\n{x1} {y1} m\n{x2} {y2} l\nS\nQ\n",
            self.current_stroke_color.operands()
        );
        self.push_ops(&ops);
    }

    fn push_ops(&mut self, ops: &str) {
        self.content.extend_from_slice(ops.as_bytes());
    }

    /// Raw content operators buffered so far
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Assemble the page tree and serialize the document
    ///
    /// Output depends only on the drawing calls made, so the same calls
    /// always produce the same bytes.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut font_resources = Dictionary::new();
        for (index, font) in self.fonts.iter().enumerate() {
            let font_id = self.inner.add_object(font.to_pdf_dictionary());
            font_resources.set(format!("F{}", index + 1), Object::Reference(font_id));
        }

        let mut xobject_resources = Dictionary::new();
        for image in &self.images {
            xobject_resources.set(
                image.resource_name.as_bytes(),
                Object::Reference(image.object_id),
            );
        }

        let content_id = self
            .inner
            .add_object(Stream::new(Dictionary::new(), std::mem::take(&mut self.content)));

        let pages_id = self.inner.new_object_id();
        let page_id = self.inner.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.width as f32),
                Object::Real(self.height as f32),
            ],
            "Resources" => dictionary! {
                "Font" => font_resources,
                "XObject" => xobject_resources,
            },
            "Contents" => content_id,
        });

        self.inner.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1,
            }),
        );

        let catalog_id = self.inner.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        self.inner.trailer.set("Root", catalog_id);

        self.inner.compress();

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }
}

fn snap(value: f64) -> f64 {
    if value.abs() < 1e-12 {
        0.0
    } else if (value.abs() - 1.0).abs() < 1e-12 {
        value.signum()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_string(doc: &PdfDocument) -> String {
        String::from_utf8(doc.content().to_vec()).unwrap()
    }

    #[test]
    fn test_a4_dimensions() {
        let doc = PdfDocument::a4();
        assert!((doc.page_width() - 595.28).abs() < 0.01);
        assert!((doc.page_height() - 841.89).abs() < 0.01);
    }

    #[test]
    fn test_fonts_get_stable_resource_names() {
        let mut doc = PdfDocument::a4();
        doc.set_font(StandardFont::HelveticaBold, 10.0);
        doc.insert_text("Bold", 10.0, 10.0, Align::Left);
        doc.set_font(StandardFont::Helvetica, 9.0);
        doc.insert_text("Regular", 10.0, 20.0, Align::Left);
        doc.set_font(StandardFont::HelveticaBold, 12.0);
        doc.insert_text("Bold again", 10.0, 30.0, Align::Left);

        let content = content_string(&doc);
        assert!(content.contains("/F1 10 Tf"));
        assert!(content.contains("/F2 9 Tf"));
        assert!(content.contains("/F1 12 Tf"));
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let mut doc = PdfDocument::a4();
        doc.insert_text("", 10.0, 10.0, Align::Left);
        assert!(doc.content().is_empty());
    }

    #[test]
    fn test_rotated_text_uses_exact_matrix() {
        let mut doc = PdfDocument::a4();
        doc.insert_text_rotated("PAY HERE", 100.0, 200.0, 90.0, Align::Center);

        let content = content_string(&doc);
        assert!(content.contains("0 1 -1 0 100 200 cm"));
        assert!(content.contains("(PAY HERE) Tj"));
    }

    #[test]
    fn test_shapes_emit_operators() {
        let mut doc = PdfDocument::a4();
        doc.set_fill_color(Color::red());
        doc.fill_rect(1.0, 2.0, 3.0, 4.0);
        doc.set_stroke_color(Color::black());
        doc.line(0.0, 5.0, 10.0, 5.0, 0.5);
        doc.fill_round_rect(0.0, 0.0, 100.0, 30.0, 3.0);

        let content = content_string(&doc);
        assert!(content.contains("1 0 0 rg\n1 2 3 4 re\nf"));
        assert!(content.contains("0 0 0 RG\n0.5 w\n0 5 m\n10 5 l\nS"));
        assert!(content.contains("h\nf"));
    }

    #[test]
    fn test_stroke_rect_uses_stroke_color_and_width() {
        let mut doc = PdfDocument::a4();
        doc.set_stroke_color(Color::rgb(0.5, 0.0, 0.0));
        doc.stroke_rect(10.0, 20.0, 30.0, 40.0, 1.5);

        assert_eq!(
            content_string(&doc),
            "q\n0.5 0 0 RG\n1.5 w\n10 20 30 40 re\nS\nQ\n"
        );
    }

    #[test]
    fn test_to_bytes_is_deterministic() {
        let build = || {
            let mut doc = PdfDocument::a4();
            doc.set_font(StandardFont::Helvetica, 9.0);
            doc.insert_text("Same input", 72.0, 700.0, Align::Left);
            doc.fill_rect(72.0, 600.0, 100.0, 20.0);
            doc.to_bytes().unwrap()
        };

        assert_eq!(build(), build());
    }
}
