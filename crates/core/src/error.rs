// src/error.rs
//! Error types for font resolution and text processing.
//!
//! Matching itself never fails: unknown names, sizes and glyphs all degrade
//! to a fallback. Only contract violations by the caller surface here.

use crate::types::FontId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    #[error("Font descriptor has neither a name nor a fallback name")]
    MissingName,

    #[error("Font PDFFont{0} was released and can no longer process text")]
    Released(FontId),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid processor configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid processor configuration: {field} must be a positive number, got {value}")]
    NonPositiveUnit { field: &'static str, value: f32 },
}
