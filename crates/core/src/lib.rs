//! # formfont-core
//!
//! Resolves loosely structured font descriptors onto a fixed catalog of
//! renderable styles and turns raw text fragments into positioned text runs.
//!
//! - **font**: descriptor, face classification, style resolution, symbolic
//!   glyph mapping, run building and the per-font [`FontInstance`]
//! - **config**: unit and baseline settings for run construction
//! - **error**: error types
//!
//! Nothing here performs I/O. Geometry and output collection are supplied by
//! the caller through the [`UnitConverter`] and [`TextSink`] traits.

// Re-export foundation crates
pub use formfont_style as style;
pub use formfont_traits as traits;
pub use formfont_types as types;

pub mod config;
pub mod error;
pub mod font;

pub use style::{FontFace, StyleRow, DEFAULT_STYLE_ROW, STYLE_CATALOG};
pub use traits::{FormUnits, TextSink, UnitConverter};
pub use types::{Color, FontId, PageTexts, Point, TextAlign, TextRun, TextRunSpan};

pub use config::{BaselineOffset, ProcessorConfig};
pub use error::{ConfigError, FontError};
pub use font::{
    FaceClassification, FontDescriptor, FontInstance, MatchTier, RunStyle, TextFragment,
    TextRunBuilder,
};
