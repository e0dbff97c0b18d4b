use crate::constant::MAX_SHORT_TEXT_LENGTH;
use crate::domain::{
    default_subject, BriefText, ContentTopics, EmailContent, RecipientEmail, SendEmailRequest,
};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Raw input for re-sending already generated content by email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendEmailForm {
    pub recipient_email: String,
    pub subject: String,
    pub content: String,
    pub topics: Vec<String>,
    pub content_types: String,
}

impl TryFrom<&SendEmailForm> for SendEmailRequest {
    type Error = ValidationError;

    fn try_from(form: &SendEmailForm) -> Result<Self, Self::Error> {
        let recipient_email = RecipientEmail::parse(&form.recipient_email)?;
        let topics = ContentTopics::at_least_one(form.topics.clone())?;
        let content = EmailContent::parse(&form.content)?;
        let content_types =
            BriefText::parse(&form.content_types, "Content types", MAX_SHORT_TEXT_LENGTH)?;
        let subject = match BriefText::parse_optional(
            Some(&form.subject),
            "Email subject",
            MAX_SHORT_TEXT_LENGTH,
        )? {
            Some(subject) => subject,
            None => BriefText::parse(&default_subject(&topics), "Email subject", usize::MAX)?,
        };
        Ok(SendEmailRequest::new(
            recipient_email,
            subject,
            content,
            topics,
            content_types,
        ))
    }
}
