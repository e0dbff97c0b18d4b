use crate::error::ValidationError;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// A required free-text field of the content brief, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BriefText(String);

impl BriefText {
    /// Returns an instance of `BriefText` if the trimmed input is non-empty
    /// and no longer than `max_length` graphemes.
    pub fn parse(
        value: &str,
        field: &'static str,
        max_length: usize,
    ) -> Result<Self, ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::FieldIsEmpty(field));
        }

        // `å` is a single grapheme, but it is composed of two characters,
        // so count what the user sees rather than bytes or chars.
        if value.graphemes(true).count() > max_length {
            return Err(ValidationError::FieldIsTooLong(field, max_length));
        }

        Ok(Self(value.to_string()))
    }

    /// Like `parse`, but a blank input means "not provided".
    pub fn parse_optional(
        value: Option<&str>,
        field: &'static str,
        max_length: usize,
    ) -> Result<Option<Self>, ValidationError> {
        match value {
            Some(v) if !v.trim().is_empty() => Self::parse(v, field, max_length).map(Some),
            _ => Ok(None),
        }
    }
}

impl AsRef<str> for BriefText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
