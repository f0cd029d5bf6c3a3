//! Line-item table

use super::Composer;
use crate::format::{format_amount, format_number};
use crate::instruction::DrawInstruction;
use crate::record::{LineAmounts, LineItem};
use crate::styles::{palette, StyleRole};
use crate::Result;
use pdf_core::{Cell, Color, RowStyle, Table, VerticalAlign};

/// Column shares of the content width
const COLUMN_SHARES: [f64; 4] = [0.50, 0.15, 0.15, 0.20];
const HEADERS: [&str; 4] = ["DESCRIPTION", "PRICE", "QTY", "SUBTOTAL"];

/// Suffix of a row whose price or quantity is not a number
pub const INVALID_SUFFIX: &str = "(Invalid Price/Qty)";
/// Numeric cells of an invalid row
pub const NOT_APPLICABLE: &str = "-";

/// Build, measure and place the table with its top edge at `top`
///
/// Returns the y of the table's bottom edge.
pub fn place_table(composer: &mut Composer<'_>, items: &[LineItem], top: f64) -> Result<f64> {
    let page = *composer.page();
    let content_width = page.content_width();
    let styles = composer.styles();

    let header = styles.get(StyleRole::TableHeader);
    let cell = styles.get(StyleRole::TableCell);
    let center = styles.get(StyleRole::TableCellCenter);
    let right = styles.get(StyleRole::TableCellRight);

    let mut table = Table::new(COLUMN_SHARES.iter().map(|s| content_width * s).collect())
        .add_row(
            HEADERS.iter().map(|h| Cell::text(*h, header)).collect(),
            RowStyle {
                background: Some(palette::TABLE_HEADER_RED),
                top_padding: 6.0,
                bottom_padding: 6.0,
                valign: VerticalAlign::Middle,
                line_below: Some((1.0, palette::TABLE_HEADER_RED)),
                ..RowStyle::default()
            },
        );

    let body_style = RowStyle {
        background: None,
        top_padding: 4.0,
        bottom_padding: 4.0,
        valign: VerticalAlign::Top,
        line_below: Some((0.5, Color::light_gray())),
        // Body rows sit slightly closer to the outer edges than the header
        column_padding: vec![(0, 5.0, 6.0), (3, 6.0, 5.0)],
    };

    for item in items {
        let cells = match item.amounts {
            LineAmounts::Valid { price, qty } => vec![
                Cell::text(item.desc.as_str(), cell),
                if price != 0.0 {
                    Cell::text(format_amount(price), center)
                } else {
                    Cell::Empty
                },
                Cell::text(format_number(qty), center),
                Cell::text(format_amount(item.subtotal()), right),
            ],
            LineAmounts::Invalid => vec![
                Cell::text(invalid_description(&item.desc), cell),
                Cell::text(NOT_APPLICABLE, center),
                Cell::text(NOT_APPLICABLE, center),
                Cell::text(NOT_APPLICABLE, right),
            ],
        };
        table = table.add_row(cells, body_style.clone());
    }

    let last = table.row_count() - 1;
    if let Some(style) = table.row_style_mut(last) {
        style.line_below = Some((1.0, Color::black()));
    }

    let table = table.wrap()?;
    let bottom = top - table.height();
    composer.push(DrawInstruction::Table {
        table,
        x: page.left_margin,
        y: bottom,
    });

    Ok(bottom)
}

fn invalid_description(desc: &str) -> String {
    if desc.is_empty() {
        INVALID_SUFFIX.to_string()
    } else {
        format!("{desc} {INVALID_SUFFIX}")
    }
}
