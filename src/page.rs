//! Page-level driver: one font table and one output collection per page.

use crate::error::FormfontError;
use formfont_core::{
    FontDescriptor, FontInstance, FormUnits, PageTexts, ProcessorConfig, TextFragment,
    TextRunBuilder, UnitConverter,
};

/// Processes the text fragments of a single page.
///
/// Fonts are registered once and addressed by their registration index.
/// [`finish`](Self::finish) releases every font and hands back the runs.
#[derive(Debug)]
pub struct PageProcessor<U: UnitConverter = FormUnits> {
    fonts: Vec<FontInstance>,
    builder: TextRunBuilder<U>,
    texts: PageTexts,
}

impl PageProcessor<FormUnits> {
    pub fn new(config: &ProcessorConfig) -> Self {
        Self::with_builder(config.run_builder())
    }
}

impl Default for PageProcessor<FormUnits> {
    fn default() -> Self {
        Self::new(&ProcessorConfig::default())
    }
}

impl<U: UnitConverter> PageProcessor<U> {
    /// A processor using a custom run builder, e.g. with a different
    /// unit converter.
    pub fn with_builder(builder: TextRunBuilder<U>) -> Self {
        Self {
            fonts: Vec::new(),
            builder,
            texts: PageTexts::new(),
        }
    }

    /// Register a font and return the index fragments use to refer to it.
    pub fn register_font(&mut self, descriptor: FontDescriptor) -> Result<usize, FormfontError> {
        let font = FontInstance::new(descriptor)?;
        self.fonts.push(font);
        Ok(self.fonts.len() - 1)
    }

    pub fn font(&self, index: usize) -> Option<&FontInstance> {
        self.fonts.get(index)
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Run one fragment through the font registered at `font_index`.
    pub fn process(
        &mut self,
        font_index: usize,
        fragment: &TextFragment<'_>,
    ) -> Result<(), FormfontError> {
        let count = self.fonts.len();
        let font = self
            .fonts
            .get_mut(font_index)
            .ok_or(FormfontError::UnknownFont {
                index: font_index,
                count,
            })?;
        font.process_text(fragment, &self.builder, &mut self.texts)?;
        Ok(())
    }

    /// Runs produced so far.
    pub fn texts(&self) -> &PageTexts {
        &self.texts
    }

    /// Release all fonts and return the collected runs.
    pub fn finish(mut self) -> PageTexts {
        for font in &mut self.fonts {
            font.release();
        }
        log::debug!(
            "Finished page: {} fonts, {} text runs",
            self.fonts.len(),
            self.texts.len()
        );
        self.texts
    }
}
