//! JSON job format consumed by the `formfont` binary.
//!
//! ```json
//! {
//!   "fonts": [{ "name": "ABCDEF+Arial-Bold", "fallbackName": "Arial" }],
//!   "fragments": [{ "font": 0, "x": 72, "y": 96, "text": "Total",
//!                   "maxWidth": 120, "color": "#000000", "fontSize": 10 }]
//! }
//! ```

use crate::error::FormfontError;
use crate::page::PageProcessor;
use formfont_core::{Color, FontDescriptor, PageTexts, Point, ProcessorConfig, TextFragment};
use serde::Deserialize;

fn default_font_size() -> f32 {
    10.0
}

/// One text fragment of a job, referring to a font by index.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentSpec {
    pub font: usize,
    pub x: f32,
    pub y: f32,
    pub text: String,
    #[serde(default)]
    pub max_width: f32,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

impl FragmentSpec {
    pub fn as_fragment(&self) -> TextFragment<'_> {
        TextFragment::new(Point::new(self.x, self.y), &self.text)
            .with_max_width(self.max_width)
            .with_color(self.color.clone())
            .with_font_size(self.font_size)
    }
}

/// The fonts and fragments of one page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextJob {
    #[serde(default)]
    pub fonts: Vec<FontDescriptor>,
    #[serde(default)]
    pub fragments: Vec<FragmentSpec>,
}

impl TextJob {
    pub fn from_json(json: &str) -> Result<Self, FormfontError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Register every font, process every fragment in order and return the
    /// resulting runs.
    pub fn run(&self, config: &ProcessorConfig) -> Result<PageTexts, FormfontError> {
        let mut page = PageProcessor::new(config);
        for descriptor in &self.fonts {
            page.register_font(descriptor.clone())?;
        }
        for spec in &self.fragments {
            page.process(spec.font, &spec.as_fragment())?;
        }
        log::info!(
            "Processed {} fragments across {} fonts",
            self.fragments.len(),
            self.fonts.len()
        );
        Ok(page.finish())
    }
}
