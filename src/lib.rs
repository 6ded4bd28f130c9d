//! # formfont
//!
//! Turns text fragments extracted from a PDF page into positioned text runs
//! styled against a fixed catalog of renderer fonts.
//!
//! The matching logic lives in [`formfont_core`]; this crate adds the
//! page-level driver, the JSON job format and the `formfont` binary.

pub mod error;
pub mod job;
pub mod page;

pub use error::FormfontError;
pub use job::{FragmentSpec, TextJob};
pub use page::PageProcessor;

pub use formfont_core::{
    BaselineOffset, Color, FontDescriptor, FontError, FontFace, FontId, FontInstance, FormUnits,
    PageTexts, Point, ProcessorConfig, TextFragment, TextRun, TextRunBuilder, TextRunSpan,
    TextSink, UnitConverter,
};
