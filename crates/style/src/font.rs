use std::fmt;

/// Substitution stacks for each face, indexed by [`FontFace::index`].
///
/// Only ever used for substring containment tests, so the order of names
/// within a stack carries no meaning here.
pub const FACE_GROUPS: [&str; 6] = [
    "QuickType,Arial,Helvetica,sans-serif",
    "QuickType Condensed,Arial Narrow,Arial,Helvetica,sans-serif",
    "QuickTypePi",
    "QuickType Mono,Courier New,Courier,monospace",
    "OCR-A,Courier New,Courier,monospace",
    "OCR B MT,Courier New,Courier,monospace",
];

/// Style suffixes of subset font names (`ABCDEF+Arial-Bd`) that imply bold.
pub const BOLD_SUB_NAMES: [&str; 3] = ["bd", "bold", "demi"];

/// A broad font-family category the target renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    #[default]
    SansSerif,
    Serif,
    Symbolic,
    Monospace,
    OcrA,
    OcrB,
}

impl FontFace {
    pub const ALL: [FontFace; 6] = [
        FontFace::SansSerif,
        FontFace::Serif,
        FontFace::Symbolic,
        FontFace::Monospace,
        FontFace::OcrA,
        FontFace::OcrB,
    ];

    /// The catalog face index (0-5).
    pub fn index(self) -> u8 {
        match self {
            FontFace::SansSerif => 0,
            FontFace::Serif => 1,
            FontFace::Symbolic => 2,
            FontFace::Monospace => 3,
            FontFace::OcrA => 4,
            FontFace::OcrB => 5,
        }
    }

    /// The comma separated substitution stack for this face.
    pub fn candidates(self) -> &'static str {
        FACE_GROUPS[usize::from(self.index())]
    }

    /// Whether `type_name` occurs anywhere in this face's substitution stack.
    ///
    /// Case sensitive. An empty name is contained in every stack.
    pub fn lists(self, type_name: &str) -> bool {
        self.candidates().contains(type_name)
    }
}

impl fmt::Display for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FontFace::SansSerif => "sans-serif",
            FontFace::Serif => "serif",
            FontFace::Symbolic => "symbolic",
            FontFace::Monospace => "monospace",
            FontFace::OcrA => "ocr-a",
            FontFace::OcrB => "ocr-b",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_catalog_order() {
        for (expected, face) in FontFace::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(face.index()), expected);
            assert_eq!(face.candidates(), FACE_GROUPS[expected]);
        }
    }

    #[test]
    fn test_candidate_lookup_is_case_sensitive_substring() {
        assert!(FontFace::OcrA.lists("OCR-A"));
        assert!(FontFace::OcrB.lists("OCR B"));
        assert!(!FontFace::OcrA.lists("ocr-a"));
        assert!(FontFace::Serif.lists("Arial Narrow"));
        assert!(!FontFace::Serif.lists("Times"));
    }

    #[test]
    fn test_display_uses_short_labels() {
        assert_eq!(FontFace::OcrB.to_string(), "ocr-b");
        assert_eq!(FontFace::SansSerif.to_string(), "sans-serif");
    }
}
