use crate::domain::{BriefText, ContentTopics, EmailContent, RecipientEmail};
use serde::Serialize;

/// A validated request to email content that was already generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendEmailRequest {
    recipient_email: RecipientEmail,
    subject: BriefText,
    content: EmailContent,
    topics: ContentTopics,
    content_types: BriefText,
}

impl SendEmailRequest {
    pub fn new(
        recipient_email: RecipientEmail,
        subject: BriefText,
        content: EmailContent,
        topics: ContentTopics,
        content_types: BriefText,
    ) -> Self {
        Self {
            recipient_email,
            subject,
            content,
            topics,
            content_types,
        }
    }

    pub fn recipient_email(&self) -> &RecipientEmail {
        &self.recipient_email
    }

    pub fn subject(&self) -> &str {
        self.subject.as_ref()
    }
}

/// Subject used when the user leaves it blank, e.g.
/// `Your AI-Generated Content: A, B and 2 more`.
pub fn default_subject(topics: &ContentTopics) -> String {
    let topics = topics.as_slice();
    let mut listed = topics
        .iter()
        .take(2)
        .map(String::as_str)
        .collect::<Vec<&str>>()
        .join(", ");
    if topics.len() > 2 {
        listed.push_str(&format!(" and {} more", topics.len() - 2));
    }
    format!("Your AI-Generated Content: {}", listed)
}
