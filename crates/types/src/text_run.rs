use crate::color::Color;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Horizontal alignment of a text run. Runs are always emitted left aligned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
}

/// Flags travel as `0`/`1` on the wire.
mod flag {
    use super::*;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(de::Error::custom(format!("expected 0 or 1, got {}", other))),
        }
    }
}

/// One styled fragment inside a [`TextRun`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRunSpan {
    pub text: String,
    /// The family name as found in the source document, before substitution.
    pub font_family: String,
    #[serde(with = "flag")]
    pub bold: bool,
    #[serde(with = "flag")]
    pub italic: bool,
}

/// A positioned, styled text record in output (form) units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub color: Color,
    #[serde(default)]
    pub align: TextAlign,
    pub runs: Vec<TextRunSpan>,
}

impl TextRun {
    /// The text of the first span, if any.
    pub fn text(&self) -> Option<&str> {
        self.runs.first().map(|span| span.text.as_str())
    }
}

/// The text runs collected for one page of output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTexts {
    pub texts: Vec<TextRun>,
}

impl PageTexts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_run() -> TextRun {
        TextRun {
            x: 1.5,
            y: 2.25,
            w: 10.0,
            color: Color::black(),
            align: TextAlign::Left,
            runs: vec![TextRunSpan {
                text: "Total".to_string(),
                font_family: "ABCDEF+Arial-Bold".to_string(),
                bold: true,
                italic: false,
            }],
        }
    }

    #[test]
    fn test_text_run_wire_shape() {
        let value = serde_json::to_value(sample_run()).unwrap();
        assert_eq!(
            value,
            json!({
                "x": 1.5,
                "y": 2.25,
                "w": 10.0,
                "color": "#000000",
                "align": "left",
                "runs": [{
                    "text": "Total",
                    "fontFamily": "ABCDEF+Arial-Bold",
                    "bold": 1,
                    "italic": 0
                }]
            })
        );
    }

    #[test]
    fn test_flags_reject_values_other_than_zero_or_one() {
        let bad = json!({ "text": "a", "fontFamily": "f", "bold": 2, "italic": 0 });
        assert!(serde_json::from_value::<TextRunSpan>(bad).is_err());
    }

    #[test]
    fn test_text_returns_first_span() {
        assert_eq!(sample_run().text(), Some("Total"));
    }
}
