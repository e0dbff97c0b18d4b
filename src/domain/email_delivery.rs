use crate::constant::MAX_SHORT_TEXT_LENGTH;
use crate::domain::{BriefText, RecipientEmail};
use crate::error::ValidationError;

/// Whether the generated content should also be emailed, and where to.
///
/// The recipient and subject only exist inside `Send`, so a request built
/// with `Skip` cannot carry stale values for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailDelivery {
    Skip,
    Send {
        recipient: RecipientEmail,
        subject: Option<BriefText>,
    },
}

impl EmailDelivery {
    /// Resolves the email fields of a form.
    ///
    /// With `send_email` unset the recipient and subject are ignored
    /// entirely, whatever they hold.
    pub fn from_form(
        send_email: bool,
        recipient_email: Option<&str>,
        email_subject: Option<&str>,
    ) -> Result<Self, ValidationError> {
        if !send_email {
            return Ok(Self::Skip);
        }
        let recipient = match recipient_email {
            Some(email) => RecipientEmail::parse(email)?,
            None => return Err(ValidationError::RecipientEmailIsMissing),
        };
        let subject =
            BriefText::parse_optional(email_subject, "Email subject", MAX_SHORT_TEXT_LENGTH)?;
        Ok(Self::Send { recipient, subject })
    }

    pub fn is_requested(&self) -> bool {
        matches!(self, Self::Send { .. })
    }

    pub fn recipient(&self) -> Option<&RecipientEmail> {
        match self {
            Self::Send { recipient, .. } => Some(recipient),
            Self::Skip => None,
        }
    }

    pub fn subject(&self) -> Option<&BriefText> {
        match self {
            Self::Send { subject, .. } => subject.as_ref(),
            Self::Skip => None,
        }
    }
}
