//! Client details under "INVOICE TO:"

use super::Composer;
use crate::record::InvoiceRecord;
use crate::region::LayoutRegion;
use crate::styles::StyleRole;
use pdf_core::{Paragraph, INCH};

/// Address lines are indented under the "Address:" label
const ADDRESS_INDENT: f64 = 0.3;

/// Client name, phone, email and address
///
/// Lines wrap one inch wider than the company column; each advances the
/// cursor by exactly its wrapped height.
pub fn place_client(composer: &mut Composer<'_>, left: &mut LayoutRegion, record: &InvoiceRecord) {
    let width = left.width() + 1.0 * INCH;
    let mut lines: Vec<Paragraph> = vec![composer.wrap(record.client_name.as_str(), StyleRole::Emphasis, width)];

    if let Some(phone) = &record.client_phone {
        lines.push(composer.wrap(format!("Phone: {phone}"), StyleRole::Body, width));
    }
    if let Some(email) = &record.client_email {
        lines.push(composer.wrap(format!("Email: {email}"), StyleRole::Body, width));
    }
    if !record.client_address.is_empty() {
        lines.push(composer.wrap("Address:", StyleRole::Body, width));
        let indented = composer.styles().indented(StyleRole::Body, ADDRESS_INDENT);
        lines.extend(
            record
                .client_address
                .iter()
                .map(|line| Paragraph::wrap(line.as_str(), &indented, width)),
        );
    }

    for paragraph in lines {
        let y = left.place_on(paragraph.height(), 0.0);
        composer.paragraph(paragraph, left.x(), y);
    }
}
