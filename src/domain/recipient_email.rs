use crate::error::ValidationError;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A well-formed email address, trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecipientEmail(String);

impl RecipientEmail {
    pub fn parse(email: &str) -> Result<Self, ValidationError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(ValidationError::RecipientEmailIsMissing);
        }

        if !email.contains('@') {
            return Err(ValidationError::EmailMissingAtSymbol);
        }

        let split = email.rsplitn(2, '@').collect::<Vec<&str>>();
        // domain part
        if split[0].is_empty() {
            return Err(ValidationError::EmailMissingDomain);
        }
        // user part
        if split[1].is_empty() {
            return Err(ValidationError::EmailMissingLocalPart);
        }

        if !validator::validate_email(&email) {
            return Err(ValidationError::EmailFormatWrong);
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for RecipientEmail {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for RecipientEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
