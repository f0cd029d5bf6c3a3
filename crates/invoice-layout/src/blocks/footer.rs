//! Footer rule and invoice reference

use super::header::strap_line;
use super::Composer;
use crate::instruction::DrawInstruction;
use crate::record::InvoiceRecord;
use crate::styles::{palette, StyleRole};
use pdf_core::INCH;

pub fn place_footer(composer: &mut Composer<'_>, record: &InvoiceRecord) {
    let page = *composer.page();
    let rule_y = page.bottom_margin + 0.25 * INCH;

    composer.push(DrawInstruction::Line {
        x1: page.left_margin,
        y1: rule_y,
        x2: page.right_edge(),
        y2: rule_y,
        width: 1.0,
        color: palette::HEADER_RED,
    });

    let text = composer.wrap(strap_line(record), StyleRole::Footer, page.content_width() / 2.0);
    composer.paragraph(text, page.left_margin, page.bottom_margin);
}
