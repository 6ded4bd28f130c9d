pub mod color;
pub mod geometry;
pub mod ids;
pub mod text_run;

pub use color::Color;
pub use geometry::Point;
pub use ids::FontId;
pub use text_run::{PageTexts, TextAlign, TextRun, TextRunSpan};
