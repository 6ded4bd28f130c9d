//! Face classification from descriptor names and flags.

use super::descriptor::FontDescriptor;
use crate::style::{FontFace, BOLD_SUB_NAMES};

/// The face and weight/slant attributes derived from one descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceClassification {
    pub face: FontFace,
    pub bold: bool,
    pub italic: bool,
}

/// `needle` occurs in `haystack` somewhere after the first byte.
fn contains_past_start(haystack: &str, needle: &str) -> bool {
    haystack.find(needle).is_some_and(|pos| pos > 0)
}

/// Fix the symbolic flag of a freshly extracted descriptor.
///
/// Arial derived subsets are routinely flagged symbolic and fonts named
/// after Symbol are routinely not. A match at position 0 does not count.
/// Returns `true` when the flag was changed.
pub fn correct_symbolic_flag(descriptor: &mut FontDescriptor) -> bool {
    let lowered = descriptor.type_name().to_lowercase();
    let corrected = if descriptor.is_symbolic_font {
        !contains_past_start(&lowered, "arial")
    } else {
        contains_past_start(&lowered, "symbol")
    };

    let changed = corrected != descriptor.is_symbolic_font;
    if changed {
        log::debug!(
            "Corrected symbolic flag of '{}' to {}",
            descriptor.type_name(),
            corrected
        );
        descriptor.is_symbolic_font = corrected;
    }
    changed
}

/// Splits a subset font name (`ABCDEF+Family-Style`) into the working
/// family name and an optional style suffix.
///
/// Names without a `+` are returned whole. Only the segment following the
/// first `+` is considered.
fn split_subset_name(type_name: &str) -> (&str, Option<&str>) {
    let mut segments = type_name.split('+');
    let _prefix = segments.next();
    let Some(subset) = segments.next() else {
        return (type_name, None);
    };

    let mut parts = subset.split('-');
    match (parts.next(), parts.next()) {
        (Some(family), Some(style)) => (family, Some(style)),
        _ => (subset, None),
    }
}

/// Derive the face index and bold/italic attributes for a descriptor.
///
/// Flags are checked in priority order serif, monospace, symbolic. A serif
/// font whose family is not in the serif stack stays sans-serif; it does not
/// fall through to the later checks.
pub fn classify_face(descriptor: &FontDescriptor) -> FaceClassification {
    let type_name = descriptor.type_name();

    let mut bold = descriptor.bold || type_name.to_lowercase().contains("bold");

    let (working_name, style_suffix) = split_subset_name(type_name);
    bold = bold
        || style_suffix.is_some_and(|suffix| {
            BOLD_SUB_NAMES.contains(&suffix.to_lowercase().as_str())
        });

    let face = if descriptor.is_serif_font {
        if FontFace::Serif.lists(working_name) {
            FontFace::Serif
        } else {
            FontFace::SansSerif
        }
    } else if descriptor.is_monospace {
        if FontFace::OcrA.lists(working_name) {
            FontFace::OcrA
        } else if FontFace::OcrB.lists(working_name) {
            FontFace::OcrB
        } else {
            FontFace::Monospace
        }
    } else if descriptor.is_symbolic_font {
        FontFace::Symbolic
    } else {
        FontFace::SansSerif
    };

    FaceClassification {
        face,
        bold,
        italic: descriptor.italic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_arial_subset_is_cleared() {
        let mut font = FontDescriptor::new("ABCDEF+ArialMT").with_symbolic(true);
        assert!(correct_symbolic_flag(&mut font));
        assert!(!font.is_symbolic_font);
    }

    #[test]
    fn test_symbol_named_font_is_flagged() {
        let mut font = FontDescriptor::new("XYZ+SymbolMT");
        assert!(correct_symbolic_flag(&mut font));
        assert!(font.is_symbolic_font);
    }

    #[test]
    fn test_match_at_position_zero_is_ignored() {
        let mut arial = FontDescriptor::new("Arial,Bold").with_symbolic(true);
        assert!(!correct_symbolic_flag(&mut arial));
        assert!(arial.is_symbolic_font);

        let mut symbol = FontDescriptor::new("Symbol");
        assert!(!correct_symbolic_flag(&mut symbol));
        assert!(!symbol.is_symbolic_font);
    }

    #[test]
    fn test_correction_uses_fallback_name_case_insensitively() {
        let mut font = FontDescriptor::from_fallback("MS-SYMBOL");
        assert!(correct_symbolic_flag(&mut font));
        assert!(font.is_symbolic_font);
    }

    #[test]
    fn test_bold_from_flag_or_name() {
        let flagged = FontDescriptor::new("Helvetica").with_bold(true);
        assert!(classify_face(&flagged).bold);

        let named = FontDescriptor::new("Helvetica-BoldOblique");
        assert!(classify_face(&named).bold);

        let plain = FontDescriptor::new("Helvetica");
        assert!(!classify_face(&plain).bold);
    }

    #[test]
    fn test_bold_from_subset_style_suffix() {
        for name in ["AAAAAA+Arial-Bd", "AAAAAA+Arial-DEMI"] {
            let font = FontDescriptor::new(name);
            assert!(classify_face(&font).bold, "{name} should be bold");
        }
        let regular = FontDescriptor::new("AAAAAA+Arial-Italic");
        assert!(!classify_face(&regular).bold);
    }

    #[test]
    fn test_subset_name_splits_on_first_plus_and_dash() {
        assert_eq!(split_subset_name("ABC+OCR-A-Std"), ("OCR", Some("A")));
        assert_eq!(split_subset_name("ABC+Courier"), ("Courier", None));
        assert_eq!(split_subset_name("Courier-Bold"), ("Courier-Bold", None));
    }

    #[test]
    fn test_serif_face_requires_listed_family() {
        let listed = FontDescriptor::new("ABCDEF+Arial Narrow").with_serif(true);
        assert_eq!(classify_face(&listed).face, FontFace::Serif);

        let unlisted = FontDescriptor::new("ABCDEF+TimesNewRoman").with_serif(true);
        assert_eq!(classify_face(&unlisted).face, FontFace::SansSerif);
    }

    #[test]
    fn test_serif_flag_wins_over_monospace_and_symbolic() {
        let font = FontDescriptor::new("Garamond")
            .with_serif(true)
            .with_monospace(true)
            .with_symbolic(true);
        assert_eq!(classify_face(&font).face, FontFace::SansSerif);
    }

    #[test]
    fn test_monospace_faces_upgrade_to_ocr() {
        let plain = FontDescriptor::new("Consolas").with_monospace(true);
        assert_eq!(classify_face(&plain).face, FontFace::Monospace);

        let ocr_b = FontDescriptor::new("QWERTY+OCR B MT").with_monospace(true);
        assert_eq!(classify_face(&ocr_b).face, FontFace::OcrB);

        let ocr_a = FontDescriptor::new("OCR-A").with_monospace(true);
        assert_eq!(classify_face(&ocr_a).face, FontFace::OcrA);
    }

    #[test]
    fn test_symbolic_flag_selects_symbolic_face() {
        let font = FontDescriptor::new("ZapfDingbats").with_symbolic(true);
        assert_eq!(classify_face(&font).face, FontFace::Symbolic);
    }

    #[test]
    fn test_italic_comes_from_descriptor_hint() {
        let font = FontDescriptor::new("Helvetica-Oblique").with_italic(true);
        assert!(classify_face(&font).italic);
        assert!(!classify_face(&FontDescriptor::new("Helvetica-Oblique")).italic);
    }
}
