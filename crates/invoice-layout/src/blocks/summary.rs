//! Financial summary with the "Total Due" band

use super::Composer;
use crate::format::{format_amount, format_number};
use crate::instruction::DrawInstruction;
use crate::region::LayoutRegion;
use crate::styles::palette;
use crate::totals::Totals;
use pdf_core::{Align, Color, StandardFont, INCH};

const LINE_HEIGHT: f64 = 0.25 * INCH;
const BAND_HEIGHT: f64 = 0.4 * INCH;
const BAND_RADIUS: f64 = 3.0;

/// The four label/value rows above the band
pub fn summary_rows(totals: &Totals) -> [(String, String); 4] {
    [
        ("Sub-total :".to_string(), format_amount(totals.sub_total)),
        ("Discount :".to_string(), format!("- {}", format_amount(totals.discount))),
        (
            format!("GST ({}%) :", format_number(totals.gst_rate)),
            format!("+ {}", format_amount(totals.gst_amount)),
        ),
        (
            "Advance Payment :".to_string(),
            format!("- {}", format_amount(totals.advance_payment)),
        ),
    ]
}

/// Place the summary; returns the bottom edge of the band
pub fn place_summary(composer: &mut Composer<'_>, region: &mut LayoutRegion, totals: &Totals) -> f64 {
    let (x, right) = (region.x(), region.right());

    for (label, value) in summary_rows(totals) {
        let y = region.cursor();
        composer.text(label, x, y, StandardFont::Helvetica, 10.0, Color::black(), Align::Left);
        composer.text(value, right, y, StandardFont::Helvetica, 10.0, Color::black(), Align::Right);
        region.advance(LINE_HEIGHT);
    }

    let band_top = region.cursor();
    composer.push(DrawInstruction::FillRoundRect {
        x: x - 0.1 * INCH,
        y: band_top - BAND_HEIGHT + 0.05 * INCH,
        width: region.width() + 0.1 * INCH,
        height: BAND_HEIGHT,
        radius: BAND_RADIUS,
        color: palette::DARK_RED,
    });

    let baseline = band_top - 0.25 * INCH;
    composer.text(
        "Total Due :",
        x + 0.1 * INCH,
        baseline,
        StandardFont::HelveticaBold,
        12.0,
        Color::white(),
        Align::Left,
    );
    composer.text(
        format_amount(totals.amount_due),
        right - 0.1 * INCH,
        baseline,
        StandardFont::HelveticaBold,
        12.0,
        Color::white(),
        Align::Right,
    );

    region.advance(BAND_HEIGHT);
    region.cursor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LineItem;
    use crate::region::PageGeometry;
    use crate::styles::StyleSheet;
    use crate::totals::compute_totals;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rows_are_formatted() {
        let totals = compute_totals(&[LineItem::new("Trek", 1000.0, 2.0)], 0.0, 500.0, 5.0);
        let rows = summary_rows(&totals);

        assert_eq!(rows[0], ("Sub-total :".to_string(), "2,000.00".to_string()));
        assert_eq!(rows[1].1, "- 0.00");
        assert_eq!(rows[2], ("GST (5.0%) :".to_string(), "+ 100.00".to_string()));
        assert_eq!(rows[3].1, "- 500.00");
    }

    #[test]
    fn test_band_shows_amount_due() {
        let totals = compute_totals(&[LineItem::new("Trek", 100.0, 1.0)], 0.0, 1350.0, 0.0);
        let styles = StyleSheet::new();
        let mut composer = Composer::new(&styles, PageGeometry::a4());
        let mut region = LayoutRegion::new("summary", 333.0, 208.0, 300.0);

        let bottom = place_summary(&mut composer, &mut region, &totals);
        let instructions = composer.into_instructions();

        let band = instructions
            .iter()
            .find(|i| matches!(i, DrawInstruction::FillRoundRect { .. }));
        assert!(matches!(
            band,
            Some(DrawInstruction::FillRoundRect { color, .. }) if *color == palette::DARK_RED
        ));

        let texts: Vec<String> = instructions.iter().flat_map(DrawInstruction::texts).collect();
        assert_eq!(texts.last().map(String::as_str), Some("-1,250.00"));
        assert_eq!(bottom, 300.0 - 4.0 * LINE_HEIGHT - BAND_HEIGHT);
    }
}
