use crate::constant::{MAX_LONG_TEXT_LENGTH, MAX_SHORT_TEXT_LENGTH};
use crate::domain::{
    split_topics, BriefText, ContentTopics, EmailDelivery, GenerationRequest, GenerationResult,
};
use crate::error::ValidationError;
use crate::request::SendEmailForm;
use serde::{Deserialize, Serialize};

/// Raw state of the content brief form, exactly as the user typed it.
///
/// Topics are a single comma-separated string; every other field is kept
/// verbatim until it is converted into a `GenerationRequest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationForm {
    pub content_topics: String,
    pub business_goals: String,
    pub target_audience: String,
    pub timeline: String,
    pub content_types: String,
    pub brand_voice: String,
    pub additional_notes: String,
    pub send_email: bool,
    pub recipient_email: String,
    pub email_subject: String,
}

impl GenerationForm {
    /// Prefills a form for re-sending `result` by email.
    pub fn resend_form(&self, result: &GenerationResult) -> SendEmailForm {
        let topics = if result.topics.is_empty() {
            split_topics(&self.content_topics)
        } else {
            result.topics.clone()
        };
        SendEmailForm {
            recipient_email: self.recipient_email.clone(),
            subject: self.email_subject.clone(),
            content: result.content.clone(),
            topics,
            content_types: self.content_types.clone(),
        }
    }
}

impl TryFrom<&GenerationForm> for GenerationRequest {
    type Error = ValidationError;

    fn try_from(form: &GenerationForm) -> Result<Self, Self::Error> {
        let content_topics = ContentTopics::parse(&form.content_topics)?;
        let business_goals =
            BriefText::parse(&form.business_goals, "Business goals", MAX_LONG_TEXT_LENGTH)?;
        let target_audience =
            BriefText::parse(&form.target_audience, "Target audience", MAX_LONG_TEXT_LENGTH)?;
        let timeline = BriefText::parse(&form.timeline, "Timeline", MAX_SHORT_TEXT_LENGTH)?;
        let content_types =
            BriefText::parse(&form.content_types, "Content types", MAX_SHORT_TEXT_LENGTH)?;
        let brand_voice = BriefText::parse(&form.brand_voice, "Brand voice", MAX_SHORT_TEXT_LENGTH)?;
        let additional_notes = BriefText::parse_optional(
            Some(&form.additional_notes),
            "Additional notes",
            MAX_LONG_TEXT_LENGTH,
        )?;
        let email_delivery = EmailDelivery::from_form(
            form.send_email,
            Some(&form.recipient_email),
            Some(&form.email_subject),
        )?;
        Ok(GenerationRequest::new(
            content_topics,
            business_goals,
            target_audience,
            timeline,
            content_types,
            brand_voice,
            additional_notes,
            email_delivery,
        ))
    }
}
