//! Header: company column on the left, invoice identity and QR on the right

use super::Composer;
use crate::assets::{AssetKind, ImageProvider};
use crate::branding::Branding;
use crate::instruction::DrawInstruction;
use crate::record::InvoiceRecord;
use crate::region::LayoutRegion;
use crate::styles::{palette, StyleRole};
use pdf_core::{Align, Color, StandardFont, INCH};

const LOGO_SIZE: f64 = 1.5 * INCH;
const QR_SIZE: f64 = 1.6 * INCH;
const META_LINE_HEIGHT: f64 = 0.2 * INCH;

/// Logo, company name, tagline and the "INVOICE TO:" heading
pub fn place_company(
    composer: &mut Composer<'_>,
    left: &mut LayoutRegion,
    branding: &Branding,
    assets: &dyn ImageProvider,
) {
    let header_top = left.cursor();
    composer.image_box(
        AssetKind::Logo,
        &assets.image(AssetKind::Logo),
        left.x(),
        header_top - LOGO_SIZE,
        LOGO_SIZE,
        LOGO_SIZE,
    );
    left.advance(LOGO_SIZE + 0.3 * INCH);

    composer.place_on(left, branding.company_name.as_str(), StyleRole::Heading, 0.1 * INCH);
    composer.place_on(left, branding.tagline.as_str(), StyleRole::Body, 0.2 * INCH);
    composer.place_on(left, "INVOICE TO:", StyleRole::SectionLabel, 0.1 * INCH);
}

/// Strap line, title, metadata rows, UPI ID and the payment QR code
pub fn place_identity(
    composer: &mut Composer<'_>,
    right: &mut LayoutRegion,
    record: &InvoiceRecord,
    branding: &Branding,
    assets: &dyn ImageProvider,
) {
    let header_top = right.cursor();
    let (x, right_x) = (right.x(), right.right());

    composer.text(
        strap_line(record),
        right_x,
        header_top + 0.1 * INCH,
        StandardFont::Helvetica,
        8.0,
        palette::HEADER_RED,
        Align::Right,
    );

    let title = composer.wrap("INVOICE", StyleRole::Title, right.width());
    let title_height = title.height();
    composer.paragraph(title, x, header_top - 0.4 * INCH);
    right.advance(0.4 * INCH + title_height + 0.15 * INCH);

    let metadata = [
        ("Invoice No:", format!("#{}", record.invoice_no)),
        ("Due Date:", record.due_date.clone()),
        ("Invoice Date:", record.invoice_date.clone()),
    ];
    for (label, value) in metadata {
        let y = right.cursor();
        composer.text(label, x, y, StandardFont::Helvetica, 9.0, Color::black(), Align::Left);
        composer.text(value, right_x, y, StandardFont::Helvetica, 9.0, Color::black(), Align::Right);
        right.advance(META_LINE_HEIGHT);
    }
    right.advance(0.1 * INCH);

    composer.place_on(right, branding.upi_line(), StyleRole::PaymentId, 0.1 * INCH);

    let qr_x = x + (right.width() - QR_SIZE) / 2.0;
    let qr_y = right.cursor() - QR_SIZE;
    composer.image_box(
        AssetKind::QrCode,
        &assets.image(AssetKind::QrCode),
        qr_x,
        qr_y,
        QR_SIZE,
        QR_SIZE,
    );
    composer.push(DrawInstruction::RotatedText {
        text: "PAY HERE".to_string(),
        x: qr_x - 0.2 * INCH,
        y: qr_y + QR_SIZE / 2.0,
        degrees: 90.0,
        font: StandardFont::HelveticaBold,
        size: 10.0,
        color: palette::HEADER_RED,
    });
    right.advance(QR_SIZE + 0.2 * INCH);
}

/// `INVOICE NO: <no> | INVOICE DATE: <date>`, shared with the footer
pub fn strap_line(record: &InvoiceRecord) -> String {
    format!(
        "INVOICE NO: {} | INVOICE DATE: {}",
        record.invoice_no, record.invoice_date
    )
}
