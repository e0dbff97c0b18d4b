mod brief_text;
mod content_topics;
mod email_content;
mod email_delivery;
mod email_status;
mod generation_request;
mod generation_result;
mod recipient_email;
mod send_email_request;

pub use brief_text::BriefText;
pub use content_topics::{split_topics, ContentTopics};
pub use email_content::EmailContent;
pub use email_delivery::EmailDelivery;
pub use email_status::EmailStatus;
pub use generation_request::GenerationRequest;
pub use generation_result::{EmailIndicator, GenerationResult};
pub use recipient_email::RecipientEmail;
pub use send_email_request::{default_subject, SendEmailRequest};
