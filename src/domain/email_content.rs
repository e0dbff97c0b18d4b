use crate::error::ValidationError;
use serde::Serialize;

/// Generated markdown to be emailed. Kept byte for byte, so leading
/// indentation and blank lines survive; only an all-blank body is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailContent(String);

impl EmailContent {
    pub fn parse(content: &str) -> Result<Self, ValidationError> {
        if content.trim().is_empty() {
            return Err(ValidationError::FieldIsEmpty("Content"));
        }
        Ok(Self(content.to_string()))
    }
}

impl AsRef<str> for EmailContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
