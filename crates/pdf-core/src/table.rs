//! Multi-row tables with per-row styling
//!
//! A [`Table`] is built row by row, then wrapped: every cell paragraph is
//! wrapped to its column and the row heights are fixed, so the total height
//! is known before anything is drawn.

use crate::document::{Color, PdfDocument};
use crate::paragraph::{Paragraph, ParagraphStyle};
use crate::{PdfError, Result};

/// Default horizontal cell padding in points
const DEFAULT_HORIZONTAL_PADDING: f64 = 6.0;
/// Default vertical cell padding in points
const DEFAULT_VERTICAL_PADDING: f64 = 3.0;

/// Table cell content
#[derive(Debug, Clone)]
pub enum Cell {
    Empty,
    Text(String, ParagraphStyle),
}

impl Cell {
    pub fn text(text: impl Into<String>, style: &ParagraphStyle) -> Self {
        Cell::Text(text.into(), style.clone())
    }
}

/// Vertical placement of cell content within its row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
}

/// Styling for one row
#[derive(Debug, Clone, PartialEq)]
pub struct RowStyle {
    pub background: Option<Color>,
    pub top_padding: f64,
    pub bottom_padding: f64,
    pub valign: VerticalAlign,
    /// Rule drawn along the bottom edge of the row: (line width, color)
    pub line_below: Option<(f64, Color)>,
    /// Horizontal padding overrides for this row only: (column, left, right)
    pub column_padding: Vec<(usize, f64, f64)>,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            background: None,
            top_padding: DEFAULT_VERTICAL_PADDING,
            bottom_padding: DEFAULT_VERTICAL_PADDING,
            valign: VerticalAlign::Top,
            line_below: None,
            column_padding: Vec::new(),
        }
    }
}

impl RowStyle {
    fn padding(&self, column: usize) -> (f64, f64) {
        self.column_padding
            .iter()
            .rev()
            .find(|(c, _, _)| *c == column)
            .map(|(_, left, right)| (*left, *right))
            .unwrap_or((DEFAULT_HORIZONTAL_PADDING, DEFAULT_HORIZONTAL_PADDING))
    }
}

/// A table under construction
#[derive(Debug, Clone)]
pub struct Table {
    col_widths: Vec<f64>,
    rows: Vec<(Vec<Cell>, RowStyle)>,
}

impl Table {
    /// Create a table with fixed column widths in points
    pub fn new(col_widths: Vec<f64>) -> Self {
        Self {
            col_widths,
            rows: Vec::new(),
        }
    }

    pub fn add_row(mut self, cells: Vec<Cell>, style: RowStyle) -> Self {
        self.rows.push((cells, style));
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Mutable access to a row's style, e.g. to restyle the last row
    pub fn row_style_mut(&mut self, row: usize) -> Option<&mut RowStyle> {
        self.rows.get_mut(row).map(|(_, style)| style)
    }

    /// Wrap every cell and fix the row heights
    pub fn wrap(&self) -> Result<WrappedTable> {
        let mut rows = Vec::with_capacity(self.rows.len());

        for (index, (cells, style)) in self.rows.iter().enumerate() {
            if cells.len() != self.col_widths.len() {
                return Err(PdfError::TableError(format!(
                    "row {index} has {} cells, expected {}",
                    cells.len(),
                    self.col_widths.len()
                )));
            }

            let padding: Vec<(f64, f64)> =
                (0..self.col_widths.len()).map(|c| style.padding(c)).collect();

            let paragraphs: Vec<Option<Paragraph>> = cells
                .iter()
                .zip(self.col_widths.iter().zip(&padding))
                .map(|(cell, (width, (left, right)))| match cell {
                    Cell::Empty => None,
                    Cell::Text(text, style) => {
                        Some(Paragraph::wrap(text.clone(), style, (width - left - right).max(0.0)))
                    }
                })
                .collect();

            let content_height = paragraphs
                .iter()
                .flatten()
                .map(Paragraph::height)
                .fold(0.0, f64::max);

            rows.push(WrappedRow {
                height: content_height + style.top_padding + style.bottom_padding,
                paragraphs,
                padding,
                style: style.clone(),
            });
        }

        Ok(WrappedTable {
            col_widths: self.col_widths.clone(),
            rows,
        })
    }
}

#[derive(Debug, Clone)]
struct WrappedRow {
    height: f64,
    paragraphs: Vec<Option<Paragraph>>,
    /// Resolved (left, right) padding per column
    padding: Vec<(f64, f64)>,
    style: RowStyle,
}

/// A table whose row heights are known
#[derive(Debug, Clone)]
pub struct WrappedTable {
    col_widths: Vec<f64>,
    rows: Vec<WrappedRow>,
}

impl WrappedTable {
    pub fn width(&self) -> f64 {
        self.col_widths.iter().sum()
    }

    pub fn height(&self) -> f64 {
        self.rows.iter().map(|r| r.height).sum()
    }

    pub fn row_heights(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.height).collect()
    }

    /// Text of every non-empty cell, row by row
    pub fn cell_texts(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                row.paragraphs
                    .iter()
                    .map(|p| p.as_ref().map(|p| p.text().to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Draw with the bottom-left corner of the table at (x, y)
    pub fn draw_on(&self, doc: &mut PdfDocument, x: f64, y: f64) {
        let total_width = self.width();
        let mut row_top = y + self.height();

        for row in &self.rows {
            let row_bottom = row_top - row.height;

            if let Some(background) = row.style.background {
                doc.set_fill_color(background);
                doc.fill_rect(x, row_bottom, total_width, row.height);
            }

            let mut col_x = x;
            for ((paragraph, width), (left, _)) in row
                .paragraphs
                .iter()
                .zip(&self.col_widths)
                .zip(&row.padding)
            {
                if let Some(paragraph) = paragraph {
                    let cell_y = match row.style.valign {
                        VerticalAlign::Top => row_top - row.style.top_padding - paragraph.height(),
                        VerticalAlign::Middle => {
                            row_bottom + (row.height - paragraph.height()) / 2.0
                        }
                    };
                    paragraph.draw_on(doc, col_x + left, cell_y);
                }
                col_x += width;
            }

            if let Some((line_width, color)) = row.style.line_below {
                doc.set_stroke_color(color);
                doc.line(x, row_bottom, x + total_width, row_bottom, line_width);
            }

            row_top = row_bottom;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cell_style() -> ParagraphStyle {
        ParagraphStyle {
            font_size: 9.0,
            leading: 12.0,
            ..ParagraphStyle::default()
        }
    }

    #[test]
    fn test_row_height_is_tallest_cell_plus_padding() {
        let style = cell_style();
        let long = "A very long description that must wrap over several lines in a narrow column";
        let table = Table::new(vec![80.0, 80.0])
            .add_row(
                vec![Cell::text(long, &style), Cell::text("1.00", &style)],
                RowStyle {
                    top_padding: 4.0,
                    bottom_padding: 4.0,
                    ..RowStyle::default()
                },
            );

        let wrapped = table.wrap().unwrap();
        let lines = Paragraph::wrap(long, &style, 80.0 - 12.0).lines().len();
        assert!(lines > 1);
        assert_eq!(wrapped.height(), lines as f64 * 12.0 + 8.0);
    }

    #[test]
    fn test_empty_cells_take_no_height() {
        let style = cell_style();
        let table = Table::new(vec![50.0, 50.0]).add_row(
            vec![Cell::text("x", &style), Cell::Empty],
            RowStyle::default(),
        );

        let wrapped = table.wrap().unwrap();
        assert_eq!(wrapped.row_heights(), vec![12.0 + 6.0]);
        assert_eq!(wrapped.cell_texts(), vec![vec!["x".to_string(), String::new()]]);
    }

    #[test]
    fn test_wrong_cell_count_is_error() {
        let table = Table::new(vec![50.0, 50.0]).add_row(vec![Cell::Empty], RowStyle::default());
        assert!(matches!(table.wrap(), Err(PdfError::TableError(_))));
    }

    #[test]
    fn test_column_padding_override_applies_to_its_row_only() {
        let style = cell_style();
        let table = Table::new(vec![100.0, 100.0])
            .add_row(
                vec![Cell::text("head", &style), Cell::Empty],
                RowStyle::default(),
            )
            .add_row(
                vec![Cell::text("body", &style), Cell::Empty],
                RowStyle {
                    column_padding: vec![(0, 2.0, 6.0)],
                    ..RowStyle::default()
                },
            );

        let mut doc = PdfDocument::a4();
        table.wrap().unwrap().draw_on(&mut doc, 0.0, 0.0);

        let content = String::from_utf8(doc.content().to_vec()).unwrap();
        let text_x: Vec<&str> = content
            .lines()
            .filter(|line| line.ends_with(" Td"))
            .filter_map(|line| line.split(' ').next())
            .collect();
        assert_eq!(text_x, vec!["6", "2"]);
    }

    #[test]
    fn test_draw_emits_background_and_rules() {
        let style = cell_style();
        let table = Table::new(vec![100.0, 100.0])
            .add_row(
                vec![Cell::text("H1", &style), Cell::text("H2", &style)],
                RowStyle {
                    background: Some(Color::red()),
                    line_below: Some((1.0, Color::red())),
                    valign: VerticalAlign::Middle,
                    ..RowStyle::default()
                },
            )
            .add_row(
                vec![Cell::text("a", &style), Cell::text("b", &style)],
                RowStyle {
                    line_below: Some((1.0, Color::black())),
                    ..RowStyle::default()
                },
            );

        let wrapped = table.wrap().unwrap();
        let mut doc = PdfDocument::a4();
        wrapped.draw_on(&mut doc, 50.0, 100.0);

        let content = String::from_utf8(doc.content().to_vec()).unwrap();
        assert!(content.contains("1 0 0 rg\n50 118 200 18 re\nf"));
        assert!(content.contains("1 0 0 RG\n1 w\n50 118 m\n250 118 l\nS"));
        assert!(content.contains("0 0 0 RG\n1 w\n50 100 m\n250 100 l\nS"));
        assert!(content.contains("(H1) Tj"));
    }
}
