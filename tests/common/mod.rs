pub mod fixtures;

use formfont::{FontDescriptor, FontInstance, TextFragment, TextRun, TextRunBuilder};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Create a font instance and run a single fragment through it.
pub fn process_one(
    descriptor: FontDescriptor,
    fragment: &TextFragment<'_>,
) -> Result<(FontInstance, TextRun), Box<dyn std::error::Error>> {
    let mut font = FontInstance::new(descriptor)?;
    let mut runs: Vec<TextRun> = Vec::new();
    font.process_text(fragment, &TextRunBuilder::with_form_units(), &mut runs)?;
    let run = runs.pop().ok_or("no text run was produced")?;
    Ok((font, run))
}

/// The text of the only span of `run`.
pub fn span_text(run: &TextRun) -> &str {
    run.text().unwrap_or_default()
}
