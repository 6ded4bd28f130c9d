use serde::{Deserialize, Serialize};

/// Font metadata as extracted from a source document.
///
/// `name` is usually the embedded (often subset-prefixed) font name, e.g.
/// `ABCDEF+Arial-Bold`. When it is missing or empty, `fallback_name` is
/// used instead; at least one of the two must be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fallback_name: String,
    #[serde(default)]
    pub is_serif_font: bool,
    #[serde(default)]
    pub is_monospace: bool,
    #[serde(default)]
    pub is_symbolic_font: bool,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl FontDescriptor {
    /// A descriptor with the given primary name and no flags set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A descriptor that only carries a fallback name.
    pub fn from_fallback(fallback_name: impl Into<String>) -> Self {
        Self {
            fallback_name: fallback_name.into(),
            ..Self::default()
        }
    }

    pub fn with_fallback_name(mut self, fallback_name: impl Into<String>) -> Self {
        self.fallback_name = fallback_name.into();
        self
    }

    pub fn with_serif(mut self, is_serif: bool) -> Self {
        self.is_serif_font = is_serif;
        self
    }

    pub fn with_monospace(mut self, is_monospace: bool) -> Self {
        self.is_monospace = is_monospace;
        self
    }

    pub fn with_symbolic(mut self, is_symbolic: bool) -> Self {
        self.is_symbolic_font = is_symbolic;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// The name used for matching and reporting: `name` when non-empty,
    /// otherwise `fallback_name`.
    pub fn type_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.fallback_name,
        }
    }

    /// Whether either name field is usable.
    pub fn has_name(&self) -> bool {
        !self.type_name().is_empty()
    }
}
