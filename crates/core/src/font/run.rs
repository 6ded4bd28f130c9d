//! Text run construction in output units.

use crate::config::BaselineOffset;
use crate::traits::{FormUnits, UnitConverter};
use crate::types::{Color, Point, TextAlign, TextRun, TextRunSpan};

/// The resolved font attributes stamped onto a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStyle<'a> {
    /// The family name from the source document, before any substitution.
    pub font_family: &'a str,
    pub bold: bool,
    pub italic: bool,
}

/// Builds [`TextRun`]s: converts geometry, applies the baseline offset and
/// wraps the text in a single left aligned span.
#[derive(Debug, Clone)]
pub struct TextRunBuilder<U: UnitConverter = FormUnits> {
    units: U,
    offset: BaselineOffset,
}

impl TextRunBuilder<FormUnits> {
    /// A builder using the default form grid and baseline offset.
    pub fn with_form_units() -> Self {
        Self::new(FormUnits::default())
    }
}

impl Default for TextRunBuilder<FormUnits> {
    fn default() -> Self {
        Self::with_form_units()
    }
}

impl<U: UnitConverter> TextRunBuilder<U> {
    pub fn new(units: U) -> Self {
        Self {
            units,
            offset: BaselineOffset::default(),
        }
    }

    pub fn with_offset(mut self, offset: BaselineOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn units(&self) -> &U {
        &self.units
    }

    pub fn offset(&self) -> BaselineOffset {
        self.offset
    }

    pub fn build_run(
        &self,
        position: Point,
        text: impl Into<String>,
        max_width: f32,
        color: &Color,
        style: RunStyle<'_>,
    ) -> TextRun {
        TextRun {
            x: self.units.to_form_x(position.x) + self.offset.x,
            y: self.units.to_form_y(position.y) + self.offset.y,
            w: self.units.to_form_x(max_width),
            color: color.clone(),
            align: TextAlign::Left,
            runs: vec![TextRunSpan {
                text: text.into(),
                font_family: style.font_family.to_string(),
                bold: style.bold,
                italic: style.italic,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Identity;

    impl UnitConverter for Identity {
        fn to_form_x(&self, x: f32) -> f32 {
            x
        }

        fn to_form_y(&self, y: f32) -> f32 {
            y
        }
    }

    fn style() -> RunStyle<'static> {
        RunStyle {
            font_family: "ABCDEF+Arial-Bold",
            bold: true,
            italic: false,
        }
    }

    #[test]
    fn test_applies_baseline_offset_after_conversion() {
        let builder = TextRunBuilder::new(Identity);
        let run = builder.build_run(Point::new(10.0, 20.0), "Total", 50.0, &Color::black(), style());
        assert_eq!((run.x, run.y, run.w), (9.75, 19.25, 50.0));
        assert_eq!(run.align, TextAlign::Left);
    }

    #[test]
    fn test_width_uses_horizontal_conversion() {
        let builder = TextRunBuilder::with_form_units().with_offset(BaselineOffset::none());
        let run = builder.build_run(Point::new(48.0, 24.0), "x", 96.0, &Color::black(), style());
        assert_eq!((run.x, run.y, run.w), (2.0, 1.0, 4.0));
    }

    #[test]
    fn test_emits_exactly_one_span_with_source_family() {
        let builder = TextRunBuilder::new(Identity);
        let run = builder.build_run(Point::origin(), "Total", 1.0, &Color::gray(128), style());
        assert_eq!(run.runs.len(), 1);
        let span = &run.runs[0];
        assert_eq!(span.text, "Total");
        assert_eq!(span.font_family, "ABCDEF+Arial-Bold");
        assert!(span.bold);
        assert!(!span.italic);
        assert_eq!(run.color, Color::gray(128));
    }
}
