//! Terms and conditions

use super::Composer;
use crate::branding::CHECK_MARK;
use crate::region::LayoutRegion;
use crate::styles::{palette, StyleRole};
use pdf_core::{Align, Paragraph, StandardFont, INCH};

/// ZapfDingbats code of the heavy check mark
const CHECK_GLYPH: &str = "4";

/// Heading, then the terms paragraphs hanging below it
pub fn place_terms(composer: &mut Composer<'_>, region: &mut LayoutRegion, terms: &[String]) {
    composer.place_on(region, "TERMS AND CONDITIONS", StyleRole::Heading, 0.15 * INCH);

    let body = composer.styles().get(StyleRole::Body).clone();
    let check_width = StandardFont::ZapfDingbats.text_width_points(CHECK_GLYPH, body.font_size)
        + body.font.text_width_points(" ", body.font_size);

    for line in terms {
        match line.strip_prefix(CHECK_MARK) {
            Some(rest) => {
                let paragraph = Paragraph::wrap(rest.trim_start(), &body.indented(check_width), region.width());
                let y = region.hang(paragraph.height(), 0.0);
                let first_baseline =
                    y + paragraph.height() - body.font.ascender() as f64 * body.font_size / 1000.0;
                composer.text(
                    CHECK_GLYPH,
                    region.x(),
                    first_baseline,
                    StandardFont::ZapfDingbats,
                    body.font_size,
                    palette::CHECK_GREEN,
                    Align::Left,
                );
                composer.paragraph(paragraph, region.x(), y);
            }
            None => {
                let paragraph = Paragraph::wrap(line.as_str(), &body, region.width());
                let y = region.hang(paragraph.height(), 0.0);
                composer.paragraph(paragraph, region.x(), y);
            }
        }
    }

    region.advance(0.3 * INCH);
}
