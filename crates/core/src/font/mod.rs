//! Font matching and text run construction.
//!
//! A [`FontInstance`] is created once per distinct font in a source
//! document. Each call to [`FontInstance::process_text`] classifies the
//! descriptor into a face, resolves a catalog style row, remaps symbolic
//! glyphs and appends one [`TextRun`](crate::types::TextRun) to the sink.

pub mod classify;
pub mod descriptor;
pub mod instance;
pub mod resolve;
pub mod run;
pub mod symbolic;

pub use classify::{classify_face, correct_symbolic_flag, FaceClassification};
pub use descriptor::FontDescriptor;
pub use instance::{FontInstance, TextFragment};
pub use resolve::{resolve_style, resolve_style_with_tier, MatchTier};
pub use run::{RunStyle, TextRunBuilder};
pub use symbolic::{map_symbolic, pad_control_glyphs, symbolic_substitute};
