//! Thank-you heading and contact rows

use super::{Composer, LabelValueRows, RowAnchor};
use crate::branding::Branding;
use crate::region::LayoutRegion;
use crate::styles::StyleRole;
use pdf_core::INCH;

const CONTACT_ROWS: LabelValueRows = LabelValueRows {
    label_width: 0.6,
    value_indent: 0.7,
    row_gap: 0.1,
    anchor: RowAnchor::Top,
};

pub fn place_contact(composer: &mut Composer<'_>, region: &mut LayoutRegion, branding: &Branding) {
    composer.place_on(region, "THANK YOU FOR CHOOSING US!", StyleRole::Heading, 0.2 * INCH);
    CONTACT_ROWS.place(composer, region, &branding.contact_rows());
}
