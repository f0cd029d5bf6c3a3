//! Standard Type1 fonts and their metrics
//!
//! The base-14 fonts need no embedding, so only the glyph advance widths
//! (from the Adobe AFM files) are carried here for measuring text.

use lopdf::{dictionary, Dictionary};

/// Helvetica advance widths for codes 32..=126 (1/1000 em)
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 32-47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 48-63
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 64-79
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 80-95
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 96-111
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 112-126
];

/// Helvetica-Bold advance widths for codes 32..=126 (1/1000 em)
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 32-47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 48-63
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 64-79
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 80-95
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 96-111
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 112-126
];

/// The standard fonts used by the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    /// Symbol font; `'4'` is the heavy check mark
    ZapfDingbats,
}

impl StandardFont {
    /// The PDF BaseFont name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Ascender height in 1/1000 em
    pub fn ascender(&self) -> i16 {
        match self {
            Self::Helvetica | Self::HelveticaBold => 718,
            Self::ZapfDingbats => 820,
        }
    }

    /// Descender depth in 1/1000 em (negative)
    pub fn descender(&self) -> i16 {
        match self {
            Self::Helvetica | Self::HelveticaBold => -207,
            Self::ZapfDingbats => -143,
        }
    }

    /// Advance width of a single encoded byte in 1/1000 em
    pub fn code_width(&self, code: u8) -> u16 {
        match self {
            Self::Helvetica => latin_width(&HELVETICA_WIDTHS, code),
            Self::HelveticaBold => latin_width(&HELVETICA_BOLD_WIDTHS, code),
            Self::ZapfDingbats => match code {
                b' ' => 278,
                b'4' => 846,
                _ => 788,
            },
        }
    }

    /// Text width in 1/1000 em
    pub fn text_width(&self, text: &str) -> u32 {
        self.encode(text)
            .iter()
            .map(|&code| self.code_width(code) as u32)
            .sum()
    }

    /// Text width in points for a given font size
    pub fn text_width_points(&self, text: &str, font_size: f64) -> f64 {
        self.text_width(text) as f64 * font_size / 1000.0
    }

    /// Encode text into single-byte codes
    ///
    /// Helvetica uses WinAnsiEncoding; characters outside it become `?`.
    /// ZapfDingbats uses its built-in encoding and passes ASCII through.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::ZapfDingbats => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            _ => text.chars().map(win_ansi_code).collect(),
        }
    }

    /// Font resource dictionary for this font
    pub fn to_pdf_dictionary(&self) -> Dictionary {
        let mut dict = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => self.pdf_name(),
        };
        if *self != Self::ZapfDingbats {
            dict.set("Encoding", "WinAnsiEncoding");
        }
        dict
    }
}

fn latin_width(table: &[u16; 95], code: u8) -> u16 {
    match code {
        32..=126 => table[(code - 32) as usize],
        0x85 | 0x97 => 1000, // ellipsis, em dash
        0x91 | 0x92 => 222,
        0x93 | 0x94 => 333,
        0x95 => 350,
        0xA0 => 278,
        _ => 556,
    }
}

/// Map a character to its WinAnsiEncoding code
fn win_ansi_code(c: char) -> u8 {
    match c {
        ' '..='~' => c as u8,
        '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '\u{20AC}' => 0x80,
        '\u{2026}' => 0x85,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{2122}' => 0x99,
        // Minus sign has no WinAnsi slot
        '\u{2212}' => b'-',
        '\t' => b' ',
        _ => b'?',
    }
}
