pub mod catalog;
pub mod font;

pub use catalog::{StyleRow, DEFAULT_STYLE_ROW, STYLE_CATALOG};
pub use font::{FontFace, BOLD_SUB_NAMES, FACE_GROUPS};
