//! Newtype wrapper for font instance identifiers.

use serde::Serialize;
use std::fmt;

/// Prefix shared by every generated font name.
pub const FONT_NAME_PREFIX: &str = "PDFFont";

/// A process-unique font instance identifier.
///
/// Identifiers are handed out in increasing order and never reused, so
/// ordering two ids also orders the instances by creation time.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub struct FontId(u64);

impl FontId {
    /// Creates a new FontId from its raw value
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }

    /// The generated font name, e.g. `PDFFont3`.
    pub fn font_name(self) -> String {
        format!("{}{}", FONT_NAME_PREFIX, self.0)
    }
}

impl From<u64> for FontId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
