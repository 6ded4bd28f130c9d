//! TextSink trait for the caller-owned output collection.
//!
//! Text runs are handed over by value; the producer keeps no reference
//! to a run once it has been pushed.

use formfont_types::{PageTexts, TextRun};

/// A collection that accepts finished text runs.
pub trait TextSink {
    /// Take ownership of `run` and append it.
    fn push_text(&mut self, run: TextRun);
}

impl TextSink for Vec<TextRun> {
    fn push_text(&mut self, run: TextRun) {
        self.push(run);
    }
}

impl TextSink for PageTexts {
    fn push_text(&mut self, run: TextRun) {
        self.texts.push(run);
    }
}

impl<S: TextSink + ?Sized> TextSink for &mut S {
    fn push_text(&mut self, run: TextRun) {
        (**self).push_text(run);
    }
}
