//! Bank details

use super::{Composer, LabelValueRows, RowAnchor};
use crate::branding::Branding;
use crate::region::LayoutRegion;
use crate::styles::StyleRole;
use pdf_core::INCH;

const BANK_ROWS: LabelValueRows = LabelValueRows {
    label_width: 1.0,
    value_indent: 1.05,
    row_gap: 0.05,
    anchor: RowAnchor::Bottom,
};

/// Place the bank block 0.3in below the cursor; returns its bottom y
pub fn place_bank(composer: &mut Composer<'_>, region: &mut LayoutRegion, branding: &Branding) -> f64 {
    region.advance(0.3 * INCH);
    composer.place_on(region, "Bank Details:", StyleRole::Heading, 0.1 * INCH);
    BANK_ROWS.place(composer, region, &branding.bank_rows());
    region.cursor()
}
