//! Invoice rendering

use crate::assets::ImageProvider;
use crate::blocks::{bank, contact, footer, header, items, party, signature, summary, terms};
use crate::blocks::Composer;
use crate::branding::Branding;
use crate::instruction::DrawInstruction;
use crate::record::InvoiceRecord;
use crate::region::{Anchors, LayoutRegion, PageGeometry};
use crate::styles::StyleSheet;
use crate::totals::Totals;
use crate::Result;
use pdf_core::{PdfDocument, INCH};
use tracing::{debug, trace};

/// Width of the company column in the header
const COMPANY_COLUMN_WIDTH: f64 = 3.0 * INCH;
/// Share of the content width used by terms, contact and bank blocks
const TERMS_WIDTH_SHARE: f64 = 0.55;

/// A laid-out invoice: positioned instructions plus the anchors and totals
/// they were computed from
#[derive(Debug, Clone)]
pub struct InvoiceLayout {
    pub page: PageGeometry,
    pub instructions: Vec<DrawInstruction>,
    pub anchors: Anchors,
    pub totals: Totals,
}

impl InvoiceLayout {
    /// All printed text in drawing order
    pub fn texts(&self) -> Vec<String> {
        self.instructions
            .iter()
            .flat_map(DrawInstruction::texts)
            .collect()
    }

    /// Paint onto a fresh page and serialize
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        let mut doc = PdfDocument::new(self.page.width, self.page.height);
        for instruction in &self.instructions {
            instruction.paint(&mut doc);
        }
        Ok(doc.to_bytes()?)
    }
}

fn trace_region(region: &LayoutRegion) {
    trace!(
        region = region.name(),
        x = region.x(),
        width = region.width(),
        bottom = region.cursor(),
        "region placed"
    );
}

/// Invoice renderer
pub struct InvoiceRenderer<'a> {
    branding: &'a Branding,
    assets: &'a dyn ImageProvider,
    styles: StyleSheet,
    page: PageGeometry,
}

impl<'a> InvoiceRenderer<'a> {
    /// Create a renderer for an A4 page
    pub fn new(branding: &'a Branding, assets: &'a dyn ImageProvider) -> Self {
        Self {
            branding,
            assets,
            styles: StyleSheet::new(),
            page: PageGeometry::a4(),
        }
    }

    /// Compute every position on the page
    ///
    /// Regions are placed top to bottom; later regions start from the
    /// anchors recorded by earlier ones.
    pub fn layout(&self, record: &InvoiceRecord) -> Result<InvoiceLayout> {
        let page = self.page;
        let totals = record.totals();
        let mut anchors = Anchors {
            header_top: page.top_edge() - 0.4 * INCH,
            ..Anchors::default()
        };
        let mut composer = Composer::new(&self.styles, page);

        // Header and party info
        let mut left = LayoutRegion::new(
            "left",
            page.left_margin,
            COMPANY_COLUMN_WIDTH,
            anchors.header_top,
        );
        let right_x = page.right_column_x();
        let mut right = LayoutRegion::new(
            "right",
            right_x,
            page.right_edge() - right_x,
            anchors.header_top,
        );

        header::place_company(&mut composer, &mut left, self.branding, self.assets);
        header::place_identity(&mut composer, &mut right, record, self.branding, self.assets);
        party::place_client(&mut composer, &mut left, record);
        anchors.left_bottom = left.cursor();
        anchors.right_bottom = right.cursor();
        trace_region(&left);
        trace_region(&right);

        // Line items
        anchors.table_top = anchors.left_bottom.min(anchors.right_bottom) - 0.3 * INCH;
        anchors.table_bottom = items::place_table(&mut composer, &record.items, anchors.table_top)?;

        // Summary on the right, terms, contact and bank on the left
        let below_table = anchors.table_bottom - 0.3 * INCH;
        let mut summary_region = LayoutRegion::new(
            "summary",
            right_x,
            page.right_edge() - right_x,
            below_table,
        );
        anchors.summary_bottom = summary::place_summary(&mut composer, &mut summary_region, &totals);

        let mut lower_left = LayoutRegion::new(
            "terms",
            page.left_margin,
            page.content_width() * TERMS_WIDTH_SHARE,
            below_table,
        );
        terms::place_terms(&mut composer, &mut lower_left, &self.branding.terms);
        contact::place_contact(&mut composer, &mut lower_left, self.branding);
        anchors.bank_bottom = bank::place_bank(&mut composer, &mut lower_left, self.branding);
        trace_region(&summary_region);
        trace_region(&lower_left);

        // Signature and footer
        anchors.signature_base = anchors.summary_bottom.min(anchors.bank_bottom) - 0.2 * INCH;
        signature::place_signature(
            &mut composer,
            anchors.signature_base,
            &self.branding.signature_caption,
            self.assets,
        );
        footer::place_footer(&mut composer, record);

        let instructions = composer.into_instructions();
        debug!(
            invoice_no = %record.invoice_no,
            items = record.items.len(),
            instructions = instructions.len(),
            table_bottom = anchors.table_bottom,
            "invoice laid out"
        );

        Ok(InvoiceLayout {
            page,
            instructions,
            anchors,
            totals,
        })
    }

    /// Lay out and paint the invoice into PDF bytes
    pub fn render(&self, record: &InvoiceRecord) -> Result<Vec<u8>> {
        let bytes = self.layout(record)?.to_pdf()?;
        debug!(invoice_no = %record.invoice_no, bytes = bytes.len(), "invoice rendered");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetSet;
    use crate::record::LineItem;

    fn record(items: Vec<LineItem>) -> InvoiceRecord {
        InvoiceRecord {
            invoice_no: "INV-20240101-001".to_string(),
            invoice_date: "01.01.24".to_string(),
            due_date: "15.01.24".to_string(),
            client_name: "Sourav Saha".to_string(),
            client_phone: Some("+91 90000 00000".to_string()),
            client_email: Some("sourav@example.com".to_string()),
            client_address: vec!["English Bazar, Malda".to_string()],
            items,
            discount: 0.0,
            advance_payment: 0.0,
            gst_rate: 5.0,
        }
    }

    #[test]
    fn test_anchor_order() {
        let branding = Branding::default();
        let assets = AssetSet::empty();
        let layout = InvoiceRenderer::new(&branding, &assets)
            .layout(&record(vec![LineItem::new("Trek", 1000.0, 2.0)]))
            .unwrap();
        let a = layout.anchors;

        assert_eq!(a.table_top, a.left_bottom.min(a.right_bottom) - 0.3 * INCH);
        assert!(a.table_bottom < a.table_top);
        assert!(a.summary_bottom < a.table_bottom);
        assert!(a.bank_bottom < a.table_bottom);
        assert_eq!(a.signature_base, a.summary_bottom.min(a.bank_bottom) - 0.2 * INCH);
    }

    #[test]
    fn test_more_rows_push_everything_below_down() {
        let branding = Branding::default();
        let assets = AssetSet::empty();
        let renderer = InvoiceRenderer::new(&branding, &assets);

        let one = renderer.layout(&record(vec![LineItem::new("Trek", 1.0, 1.0)])).unwrap();
        let three = renderer
            .layout(&record(vec![LineItem::new("Trek", 1.0, 1.0); 3]))
            .unwrap();

        assert_eq!(one.anchors.table_top, three.anchors.table_top);
        assert!(three.anchors.table_bottom < one.anchors.table_bottom);
        assert!(three.anchors.signature_base < one.anchors.signature_base);
    }

    #[test]
    fn test_render_produces_pdf() {
        let branding = Branding::default();
        let assets = AssetSet::empty();
        let bytes = InvoiceRenderer::new(&branding, &assets)
            .render(&record(Vec::new()))
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
