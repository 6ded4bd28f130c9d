//! Glyph remapping for fonts whose codes address pictographs, not letters.

use super::descriptor::FontDescriptor;
use std::borrow::Cow;

/// Replacement text for a single symbolic character code.
///
/// Only the codes observed in practice are mapped; `106` is deliberately
/// hidden because it renders as a stray `j` beside checkboxes.
pub fn symbolic_substitute(code: u32) -> Option<&'static str> {
    match code {
        99 => Some("\u{25B2}"),  // up triangle
        97 => Some("\u{25B6}"),  // right triangle
        20 => Some("\u{2713}"),  // check mark
        70 => Some("\u{007D}"),  // right curly bracket
        118 => Some("\u{2022}"), // bullet
        106 => Some(""),
        _ => None,
    }
}

/// Remap a one-character fragment drawn with a symbolic font.
///
/// Anything longer or shorter than one character, and any text from a
/// non-symbolic font, passes through untouched. Unmapped codes are kept
/// as-is and reported on the `formfont::symbolic` log target.
pub fn map_symbolic<'a>(descriptor: &FontDescriptor, text: &'a str) -> Cow<'a, str> {
    if !descriptor.is_symbolic_font {
        return Cow::Borrowed(text);
    }

    let mut chars = text.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Cow::Borrowed(text);
    };

    let code = u32::from(ch);
    match symbolic_substitute(code) {
        Some(replacement) => Cow::Borrowed(replacement),
        None => {
            log::warn!(
                target: "formfont::symbolic",
                "Unmapped symbolic glyph: font={:?} code={} fallback={:?}",
                descriptor.type_name(),
                code,
                text
            );
            Cow::Borrowed(text)
        }
    }
}

/// Surround a lone `C` or `G` with spaces.
///
/// The downstream renderer otherwise treats these two single letters as
/// control glyphs.
pub fn pad_control_glyphs(text: Cow<'_, str>) -> Cow<'_, str> {
    if matches!(text.as_ref(), "C" | "G") {
        Cow::Owned(format!(" {} ", text))
    } else {
        text
    }
}
