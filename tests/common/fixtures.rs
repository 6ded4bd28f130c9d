use formfont::{Color, FontDescriptor, Point, TextFragment};
use serde_json::{json, Value};

/// An embedded Arial subset, bold by style suffix.
pub fn subset_arial_bold() -> FontDescriptor {
    FontDescriptor::new("BCDFEE+Arial-BoldMT").with_fallback_name("Arial")
}

/// A subset Arial font wrongly flagged as symbolic by the extractor.
pub fn misflagged_arial() -> FontDescriptor {
    FontDescriptor::new("EFGHIJ+ArialNarrow").with_symbolic(true)
}

/// A pictographic checkbox font.
pub fn checkbox_font() -> FontDescriptor {
    FontDescriptor::new("KLMNOP+ZapfDingbats").with_symbolic(true)
}

/// An OCR-B monospace font as used on payment slips.
pub fn ocr_b_font() -> FontDescriptor {
    FontDescriptor::new("QRSTUV+OCR B MT").with_monospace(true)
}

/// A fragment at one inch from the top left corner (96 dpi source space).
pub fn fragment_at_inch(text: &str, font_size: f32) -> TextFragment<'_> {
    TextFragment::new(Point::new(96.0, 96.0), text)
        .with_max_width(192.0)
        .with_color(Color::rgb(0x33, 0x66, 0x99))
        .with_font_size(font_size)
}

/// A job document with one plain and one symbolic font.
pub fn two_font_job() -> Value {
    json!({
        "fonts": [
            { "name": "BCDFEE+Arial-BoldMT", "fallbackName": "Arial" },
            { "name": "KLMNOP+ZapfDingbats", "isSymbolicFont": true }
        ],
        "fragments": [
            { "font": 0, "x": 48, "y": 72, "text": "Total", "maxWidth": 96,
              "color": "#000000", "fontSize": 11 },
            { "font": 1, "x": 24, "y": 72, "text": "v", "fontSize": 10 },
            { "font": 0, "x": 24, "y": 96, "text": "C" }
        ]
    })
}
