//! Layout blocks
//!
//! Each submodule places one region of the invoice. Blocks share a
//! [`Composer`], which owns the style sheet and collects the instructions.

pub mod bank;
pub mod contact;
pub mod footer;
pub mod header;
pub mod items;
pub mod party;
pub mod signature;
pub mod summary;
pub mod terms;

use crate::assets::{AssetKind, AssetState};
use crate::instruction::DrawInstruction;
use crate::region::{LayoutRegion, PageGeometry};
use crate::styles::{palette, StyleRole, StyleSheet};
use pdf_core::{Align, Color, Paragraph, ParagraphStyle, StandardFont, INCH};

/// Caption size of image placeholders
const PLACEHOLDER_FONT_SIZE: f64 = 8.0;

/// Instruction sink shared by the blocks of one render
pub struct Composer<'a> {
    styles: &'a StyleSheet,
    page: PageGeometry,
    instructions: Vec<DrawInstruction>,
}

impl<'a> Composer<'a> {
    pub fn new(styles: &'a StyleSheet, page: PageGeometry) -> Self {
        Self {
            styles,
            page,
            instructions: Vec::new(),
        }
    }

    pub fn styles(&self) -> &StyleSheet {
        self.styles
    }

    pub fn page(&self) -> &PageGeometry {
        &self.page
    }

    pub fn push(&mut self, instruction: DrawInstruction) {
        self.instructions.push(instruction);
    }

    pub fn into_instructions(self) -> Vec<DrawInstruction> {
        self.instructions
    }

    /// Wrap `text` in the style of `role`
    pub fn wrap(&self, text: impl Into<String>, role: StyleRole, width: f64) -> Paragraph {
        Paragraph::wrap(text, self.styles.get(role), width)
    }

    pub fn paragraph(&mut self, paragraph: Paragraph, x: f64, y: f64) {
        self.push(DrawInstruction::Paragraph { paragraph, x, y });
    }

    /// Wrap, measure and draw a paragraph sitting on the region cursor
    pub fn place_on(
        &mut self,
        region: &mut LayoutRegion,
        text: impl Into<String>,
        role: StyleRole,
        gap: f64,
    ) -> f64 {
        let paragraph = self.wrap(text, role, region.width());
        let height = paragraph.height();
        let y = region.place_on(height, gap);
        self.paragraph(paragraph, region.x(), y);
        height
    }

    /// Single line of text at a baseline
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        &mut self,
        text: impl Into<String>,
        x: f64,
        y: f64,
        font: StandardFont,
        size: f64,
        color: Color,
        align: Align,
    ) {
        self.push(DrawInstruction::Text {
            text: text.into(),
            x,
            y,
            font,
            size,
            color,
            align,
        });
    }

    /// Draw an asset into a box, or a placeholder when it is not usable
    pub fn image_box(
        &mut self,
        kind: AssetKind,
        state: &AssetState,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) {
        let (caption, color) = match state {
            AssetState::Ready(image) => {
                self.push(DrawInstruction::Image {
                    image: image.clone(),
                    x,
                    y,
                    width,
                    height,
                });
                return;
            }
            AssetState::Missing => (
                format!("[{} not found]", kind.file_name()),
                palette::PLACEHOLDER_TEXT,
            ),
            AssetState::Unreadable(_) => (
                format!("Image Error: {}", kind.file_name()),
                palette::IMAGE_ERROR_TEXT,
            ),
        };

        self.push(DrawInstruction::FillRect {
            x,
            y,
            width,
            height,
            color: palette::PLACEHOLDER_FILL,
        });
        self.text(
            caption,
            x + width / 2.0,
            y + height / 2.0,
            StandardFont::Helvetica,
            PLACEHOLDER_FONT_SIZE,
            color,
            Align::Center,
        );
    }
}

/// How a label/value row sits against the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAnchor {
    /// Both paragraphs hang from the cursor
    Top,
    /// Both paragraphs sit on the cursor
    Bottom,
}

/// Geometry of a block of bold label / indented value rows
#[derive(Debug, Clone, Copy)]
pub struct LabelValueRows {
    /// Label column width in inches
    pub label_width: f64,
    /// Value indent from the region's left edge in inches
    pub value_indent: f64,
    /// Gap after each row in inches
    pub row_gap: f64,
    pub anchor: RowAnchor,
}

impl LabelValueRows {
    /// Place the rows; each advances the cursor by the taller of its two
    /// paragraphs plus the row gap
    pub fn place(&self, composer: &mut Composer<'_>, region: &mut LayoutRegion, rows: &[(&str, &str)]) {
        let value_style: ParagraphStyle = composer
            .styles()
            .indented(StyleRole::Body, self.value_indent);

        for (label, value) in rows {
            let label = composer.wrap(*label, StyleRole::Emphasis, self.label_width * INCH);
            let value = Paragraph::wrap(*value, &value_style, region.width());
            let row_height = label.height().max(value.height());

            let (label_y, value_y) = match self.anchor {
                RowAnchor::Top => (
                    region.cursor() - label.height(),
                    region.cursor() - value.height(),
                ),
                RowAnchor::Bottom => (region.cursor(), region.cursor()),
            };

            composer.paragraph(label, region.x(), label_y);
            composer.paragraph(value, region.x(), value_y);
            region.advance(row_height + self.row_gap * INCH);
        }
    }
}
