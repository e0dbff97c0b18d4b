use crate::domain::{BriefText, ContentTopics, EmailDelivery};
use serde::{Serialize, Serializer};

/// A validated content brief, ready to be sent to the generation service.
///
/// Built fresh for every submission; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    content_topics: ContentTopics,
    business_goals: BriefText,
    target_audience: BriefText,
    timeline: BriefText,
    content_types: BriefText,
    brand_voice: BriefText,
    additional_notes: Option<BriefText>,
    email_delivery: EmailDelivery,
}

impl GenerationRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        content_topics: ContentTopics,
        business_goals: BriefText,
        target_audience: BriefText,
        timeline: BriefText,
        content_types: BriefText,
        brand_voice: BriefText,
        additional_notes: Option<BriefText>,
        email_delivery: EmailDelivery,
    ) -> Self {
        Self {
            content_topics,
            business_goals,
            target_audience,
            timeline,
            content_types,
            brand_voice,
            additional_notes,
            email_delivery,
        }
    }

    pub fn content_topics(&self) -> &ContentTopics {
        &self.content_topics
    }

    fn payload(&self) -> GenerationPayload<'_> {
        GenerationPayload {
            content_topics: self.content_topics.as_slice(),
            business_goals: self.business_goals.as_ref(),
            target_audience: self.target_audience.as_ref(),
            timeline: self.timeline.as_ref(),
            content_types: self.content_types.as_ref(),
            brand_voice: self.brand_voice.as_ref(),
            additional_notes: self.additional_notes.as_ref().map(AsRef::as_ref),
            send_email: self.email_delivery.is_requested(),
            recipient_email: self.email_delivery.recipient().map(AsRef::as_ref),
            email_subject: self.email_delivery.subject().map(AsRef::as_ref),
        }
    }
}

impl Serialize for GenerationRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.payload().serialize(serializer)
    }
}

/// Wire shape of `POST /content/generate`. Absent optionals are omitted, never `null`.
#[derive(Debug, Serialize)]
struct GenerationPayload<'a> {
    content_topics: &'a [String],
    business_goals: &'a str,
    target_audience: &'a str,
    timeline: &'a str,
    content_types: &'a str,
    brand_voice: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional_notes: Option<&'a str>,
    send_email: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    recipient_email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_subject: Option<&'a str>,
}
