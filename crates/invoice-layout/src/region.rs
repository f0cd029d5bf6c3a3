//! Page geometry, layout regions and cross-region anchors

use pdf_core::{A4_HEIGHT, A4_WIDTH, INCH};

/// Page size and margins, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub left_margin: f64,
    pub right_margin: f64,
    pub top_margin: f64,
    pub bottom_margin: f64,
}

impl PageGeometry {
    /// A4 with 0.75in side margins and 0.5in top and bottom margins
    pub fn a4() -> Self {
        Self {
            width: A4_WIDTH,
            height: A4_HEIGHT,
            left_margin: 0.75 * INCH,
            right_margin: 0.75 * INCH,
            top_margin: 0.5 * INCH,
            bottom_margin: 0.5 * INCH,
        }
    }

    pub fn content_width(&self) -> f64 {
        self.width - self.left_margin - self.right_margin
    }

    /// x of the right margin
    pub fn right_edge(&self) -> f64 {
        self.width - self.right_margin
    }

    /// y of the top margin
    pub fn top_edge(&self) -> f64 {
        self.height - self.top_margin
    }

    /// Left edge of the right-hand column: half an inch past the centre
    pub fn right_column_x(&self) -> f64 {
        self.width / 2.0 + 0.5 * INCH
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// A vertical strip of the page with a y cursor that only moves down
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRegion {
    name: &'static str,
    x: f64,
    width: f64,
    cursor: f64,
}

impl LayoutRegion {
    pub fn new(name: &'static str, x: f64, width: f64, top: f64) -> Self {
        Self {
            name,
            x,
            width,
            cursor: top,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Move the cursor down; negative distances are ignored
    pub fn advance(&mut self, by: f64) {
        self.cursor -= by.max(0.0);
    }

    /// Content of `height` sitting on the cursor: returns its bottom y,
    /// then advances past it plus `gap`
    pub fn place_on(&mut self, height: f64, gap: f64) -> f64 {
        let bottom = self.cursor;
        self.advance(height + gap);
        bottom
    }

    /// Content of `height` hanging from the cursor: returns its bottom y,
    /// then advances past it plus `gap`
    pub fn hang(&mut self, height: f64, gap: f64) -> f64 {
        let bottom = self.cursor - height;
        self.advance(height + gap);
        bottom
    }
}

/// Positions one region hands to another
///
/// Every field is a y coordinate recorded once its region is done.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Anchors {
    pub header_top: f64,
    /// Cursor of the left column after the party block
    pub left_bottom: f64,
    /// Cursor of the right column after the QR code
    pub right_bottom: f64,
    pub table_top: f64,
    pub table_bottom: f64,
    pub summary_bottom: f64,
    pub bank_bottom: f64,
    pub signature_base: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_geometry() {
        let page = PageGeometry::a4();
        assert_eq!(page.left_margin, 54.0);
        assert_eq!(page.top_margin, 36.0);
        assert!((page.content_width() - (A4_WIDTH - 108.0)).abs() < 1e-9);
        assert_eq!(page.right_column_x(), A4_WIDTH / 2.0 + 36.0);
    }

    #[test]
    fn test_place_on_returns_cursor() {
        let mut region = LayoutRegion::new("left", 54.0, 216.0, 700.0);
        let bottom = region.place_on(12.0, 8.0);
        assert_eq!(bottom, 700.0);
        assert_eq!(region.cursor(), 680.0);
    }

    #[test]
    fn test_hang_returns_bottom_of_content() {
        let mut region = LayoutRegion::new("terms", 54.0, 200.0, 500.0);
        let bottom = region.hang(33.0, 0.0);
        assert_eq!(bottom, 467.0);
        assert_eq!(region.cursor(), 467.0);
    }

    #[test]
    fn test_cursor_never_moves_up() {
        let mut region = LayoutRegion::new("right", 0.0, 100.0, 300.0);
        region.advance(-50.0);
        assert_eq!(region.cursor(), 300.0);
        assert_eq!(region.name(), "right");
        assert_eq!(region.right(), 100.0);
    }
}
