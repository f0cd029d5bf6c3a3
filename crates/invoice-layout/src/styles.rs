//! Role-based paragraph styles

use pdf_core::{Align, Color, ParagraphStyle, StandardFont, INCH};

/// Invoice colour palette
pub mod palette {
    use pdf_core::Color;

    /// Strap line, "INVOICE TO:", "PAY HERE", footer rule
    pub const HEADER_RED: Color = Color::rgb(0.8, 0.2, 0.2);
    /// Table header band
    pub const TABLE_HEADER_RED: Color = Color::rgb(0.75, 0.25, 0.25);
    /// "Total Due" band
    pub const DARK_RED: Color = Color::rgb(0.6, 0.0, 0.0);
    /// Check mark in the terms block
    pub const CHECK_GREEN: Color = Color::green();
    /// Background of a missing image
    pub const PLACEHOLDER_FILL: Color = Color::rgb(0.93, 0.93, 0.93);
    /// Caption of a missing image
    pub const PLACEHOLDER_TEXT: Color = Color::dark_gray();
    /// Caption of an image that failed to decode
    pub const IMAGE_ERROR_TEXT: Color = Color::red();
}

/// What a piece of text is, as opposed to how it looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    /// 9pt running text
    Body,
    /// Bold running text: client name, row labels
    Emphasis,
    /// Big right-aligned "INVOICE"
    Title,
    /// Section headings
    Heading,
    /// Underlined red "INVOICE TO:"
    SectionLabel,
    /// Right-aligned bold UPI line
    PaymentId,
    TableHeader,
    TableCell,
    TableCellCenter,
    TableCellRight,
    /// Centred signature caption
    Caption,
    Footer,
}

impl StyleRole {
    pub const ALL: [StyleRole; 12] = [
        StyleRole::Body,
        StyleRole::Emphasis,
        StyleRole::Title,
        StyleRole::Heading,
        StyleRole::SectionLabel,
        StyleRole::PaymentId,
        StyleRole::TableHeader,
        StyleRole::TableCell,
        StyleRole::TableCellCenter,
        StyleRole::TableCellRight,
        StyleRole::Caption,
        StyleRole::Footer,
    ];
}

/// The fixed set of styles, built once per renderer
#[derive(Debug, Clone)]
pub struct StyleSheet {
    styles: Vec<ParagraphStyle>,
}

impl StyleSheet {
    pub fn new() -> Self {
        let body = ParagraphStyle {
            font: StandardFont::Helvetica,
            font_size: 9.0,
            leading: 11.0,
            color: Color::black(),
            align: Align::Left,
            left_indent: 0.0,
            underline: false,
        };
        let bold = ParagraphStyle {
            font: StandardFont::HelveticaBold,
            ..body.clone()
        };
        let table_cell = ParagraphStyle {
            leading: 12.0,
            ..body.clone()
        };

        let styles = StyleRole::ALL
            .iter()
            .map(|role| match role {
                StyleRole::Body => body.clone(),
                StyleRole::Emphasis => bold.clone(),
                StyleRole::Title => ParagraphStyle {
                    font_size: 22.0,
                    leading: 26.0,
                    align: Align::Right,
                    ..bold.clone()
                },
                StyleRole::Heading => ParagraphStyle {
                    font_size: 10.0,
                    leading: 12.0,
                    ..bold.clone()
                },
                StyleRole::SectionLabel => ParagraphStyle {
                    color: palette::HEADER_RED,
                    underline: true,
                    ..bold.clone()
                },
                StyleRole::PaymentId => bold.aligned(Align::Right),
                StyleRole::TableHeader => ParagraphStyle {
                    color: Color::white(),
                    align: Align::Center,
                    ..bold.clone()
                },
                StyleRole::TableCell => table_cell.clone(),
                StyleRole::TableCellCenter => table_cell.aligned(Align::Center),
                StyleRole::TableCellRight => table_cell.aligned(Align::Right),
                StyleRole::Caption => body.aligned(Align::Center),
                StyleRole::Footer => ParagraphStyle {
                    font_size: 8.0,
                    leading: 10.0,
                    ..body.clone()
                },
            })
            .collect();

        Self { styles }
    }

    pub fn get(&self, role: StyleRole) -> &ParagraphStyle {
        &self.styles[role as usize]
    }

    /// A role's style with a left indent given in inches
    pub fn indented(&self, role: StyleRole, inches: f64) -> ParagraphStyle {
        self.get(role).indented(inches * INCH)
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_resolves_to_its_own_style() {
        let sheet = StyleSheet::new();
        assert_eq!(sheet.get(StyleRole::Title).font_size, 22.0);
        assert_eq!(sheet.get(StyleRole::Title).align, Align::Right);
        assert_eq!(sheet.get(StyleRole::Footer).font_size, 8.0);
        assert_eq!(sheet.get(StyleRole::TableCellRight).align, Align::Right);
        assert_eq!(sheet.get(StyleRole::TableHeader).color, Color::white());
        assert!(sheet.get(StyleRole::SectionLabel).underline);
    }

    #[test]
    fn test_roles_are_in_declaration_order() {
        for (index, role) in StyleRole::ALL.iter().enumerate() {
            assert_eq!(*role as usize, index);
        }
    }

    #[test]
    fn test_indented_converts_inches() {
        let sheet = StyleSheet::new();
        assert_eq!(sheet.indented(StyleRole::Body, 0.3).left_indent, 0.3 * INCH);
    }
}
