// src/error.rs
use formfont_core::{ConfigError, FontError};
use thiserror::Error;

/// Top level error for page processing and the command line tool.
#[derive(Error, Debug)]
pub enum FormfontError {
    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Fragment references font #{index}, but only {count} fonts are registered")]
    UnknownFont { index: usize, count: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
