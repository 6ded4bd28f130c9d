//! Style row resolution over [`STYLE_CATALOG`].
//!
//! Documents ask for sizes and attribute combinations the catalog does not
//! have, so resolution degrades through three progressively looser tiers
//! and never returns a row smaller than requested when the face has one
//! large enough. Every tier scans first to last and takes the first hit.

use crate::style::{DEFAULT_STYLE_ROW, STYLE_CATALOG};
use std::fmt;

/// Which tier produced a resolved row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchTier {
    /// Face, size, bold and italic all equal.
    Exact,
    /// Face, bold and italic equal; row size at least the requested size.
    SizeFlex,
    /// Face equal; row size at least the requested size.
    FaceOnly,
    /// Nothing matched; [`DEFAULT_STYLE_ROW`] was used.
    Default,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchTier::Exact => "exact",
            MatchTier::SizeFlex => "size-flex",
            MatchTier::FaceOnly => "face-only",
            MatchTier::Default => "default",
        };
        f.write_str(label)
    }
}

pub fn exact_match(face: u8, size: f32, bold: bool, italic: bool) -> Option<usize> {
    STYLE_CATALOG
        .iter()
        .position(|row| row.matches_exactly(face, size, bold, italic))
}

pub fn size_flex_match(face: u8, size: f32, bold: bool, italic: bool) -> Option<usize> {
    STYLE_CATALOG.iter().position(|row| {
        row.face == face && row.bold == bold && row.italic == italic && row.size_at_least(size)
    })
}

pub fn face_only_match(face: u8, size: f32) -> Option<usize> {
    STYLE_CATALOG
        .iter()
        .position(|row| row.face == face && row.size_at_least(size))
}

/// Resolve a style row and report the tier that matched.
pub fn resolve_style_with_tier(face: u8, size: f32, bold: bool, italic: bool) -> (usize, MatchTier) {
    exact_match(face, size, bold, italic)
        .map(|row| (row, MatchTier::Exact))
        .or_else(|| size_flex_match(face, size, bold, italic).map(|row| (row, MatchTier::SizeFlex)))
        .or_else(|| face_only_match(face, size).map(|row| (row, MatchTier::FaceOnly)))
        .unwrap_or((DEFAULT_STYLE_ROW, MatchTier::Default))
}

/// Resolve the catalog row for a face index, point size and attributes.
///
/// Always succeeds; unmatched queries, including face indices outside the
/// catalog, resolve to [`DEFAULT_STYLE_ROW`].
pub fn resolve_style(face: u8, size: f32, bold: bool, italic: bool) -> usize {
    resolve_style_with_tier(face, size, bold, italic).0
}
