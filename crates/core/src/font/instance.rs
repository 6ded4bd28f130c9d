use super::classify::{classify_face, correct_symbolic_flag};
use super::descriptor::FontDescriptor;
use super::resolve::resolve_style_with_tier;
use super::run::{RunStyle, TextRunBuilder};
use super::symbolic::{map_symbolic, pad_control_glyphs};
use crate::error::FontError;
use crate::style::FontFace;
use crate::traits::{TextSink, UnitConverter};
use crate::types::{Color, FontId, Point};
use std::sync::atomic::{AtomicU64, Ordering};

/// Next id to hand out. Starts at 1 and is never reset.
static NEXT_FONT_ID: AtomicU64 = AtomicU64::new(1);

/// One raw text fragment as extracted from a source page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment<'a> {
    pub position: Point,
    pub text: &'a str,
    pub max_width: f32,
    pub color: Color,
    pub font_size: f32,
}

impl<'a> TextFragment<'a> {
    /// A black, zero width fragment at `position` using a 10pt size.
    pub fn new(position: Point, text: &'a str) -> Self {
        Self {
            position,
            text,
            max_width: 0.0,
            color: Color::black(),
            font_size: 10.0,
        }
    }

    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

/// A font referenced by the source document, plus the style it last
/// resolved to.
///
/// The resolved fields are recomputed from the descriptor on every call to
/// [`resolve`](Self::resolve) or [`process_text`](Self::process_text);
/// nothing is cached between calls.
#[derive(Debug)]
pub struct FontInstance {
    id: FontId,
    descriptor: Option<FontDescriptor>,
    pub face: FontFace,
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    /// Catalog row from the last resolution; `None` until first resolved.
    pub style_row: Option<usize>,
}

impl FontInstance {
    /// Take ownership of `descriptor`, correct its symbolic flag and assign
    /// a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::MissingName`] when both name fields are empty.
    pub fn new(mut descriptor: FontDescriptor) -> Result<Self, FontError> {
        if !descriptor.has_name() {
            return Err(FontError::MissingName);
        }
        correct_symbolic_flag(&mut descriptor);

        let id = FontId::new(NEXT_FONT_ID.fetch_add(1, Ordering::Relaxed));
        log::debug!("Created {} for '{}'", id.font_name(), descriptor.type_name());

        Ok(Self {
            id,
            descriptor: Some(descriptor),
            face: FontFace::SansSerif,
            font_size: 1.0,
            bold: false,
            italic: false,
            style_row: None,
        })
    }

    pub fn id(&self) -> FontId {
        self.id
    }

    /// Generated name of this instance, e.g. `PDFFont4`.
    pub fn name(&self) -> String {
        self.id.font_name()
    }

    /// The name the next created instance will receive, without claiming it.
    pub fn next_name() -> String {
        FontId::new(NEXT_FONT_ID.load(Ordering::Relaxed)).font_name()
    }

    /// The owned descriptor, or `None` once released.
    pub fn descriptor(&self) -> Option<&FontDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn is_released(&self) -> bool {
        self.descriptor.is_none()
    }

    fn live_descriptor(&self) -> Result<&FontDescriptor, FontError> {
        self.descriptor.as_ref().ok_or(FontError::Released(self.id))
    }

    /// Classify the face and resolve the catalog row for `font_size`.
    pub fn resolve(&mut self, font_size: f32) -> Result<usize, FontError> {
        let class = classify_face(self.live_descriptor()?);
        let (row, tier) =
            resolve_style_with_tier(class.face.index(), font_size, class.bold, class.italic);
        log::debug!(
            "{}: face={} size={} bold={} italic={} -> row {} ({})",
            self.name(),
            class.face,
            font_size,
            class.bold,
            class.italic,
            row,
            tier
        );

        self.face = class.face;
        self.font_size = font_size;
        self.bold = class.bold;
        self.italic = class.italic;
        self.style_row = Some(row);
        Ok(row)
    }

    /// Resolve the style for `fragment`, remap its text and append one
    /// text run to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Released`] if the descriptor was released.
    pub fn process_text<U, S>(
        &mut self,
        fragment: &TextFragment<'_>,
        builder: &TextRunBuilder<U>,
        sink: &mut S,
    ) -> Result<(), FontError>
    where
        U: UnitConverter,
        S: TextSink + ?Sized,
    {
        self.resolve(fragment.font_size)?;
        let descriptor = self.live_descriptor()?;

        let text = pad_control_glyphs(map_symbolic(descriptor, fragment.text));
        let style = RunStyle {
            font_family: descriptor.type_name(),
            bold: self.bold,
            italic: self.italic,
        };
        let run = builder.build_run(
            fragment.position,
            text,
            fragment.max_width,
            &fragment.color,
            style,
        );
        sink.push_text(run);
        Ok(())
    }

    /// Drop the owned descriptor. Safe to call more than once.
    pub fn release(&mut self) {
        if self.descriptor.take().is_some() {
            log::debug!("Released {}", self.name());
        }
    }
}
