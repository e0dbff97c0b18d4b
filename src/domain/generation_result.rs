use crate::constant::{EMAIL_FAILED_INDICATOR, EMAIL_SENT_INDICATOR};
use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// The generation service's answer to a successful `POST /content/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerationResult {
    /// Markdown body.
    pub content: String,
    /// `None` when no email was requested.
    #[serde(default)]
    pub email_sent: Option<bool>,
    #[serde(default)]
    email_status: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl GenerationResult {
    pub fn email_status(&self) -> &str {
        self.email_status.as_deref().unwrap_or_default()
    }

    pub fn email_indicator(&self) -> Option<EmailIndicator> {
        self.email_sent.map(|sent| {
            if sent {
                EmailIndicator::Sent
            } else {
                EmailIndicator::Failed
            }
        })
    }

    /// The email notice shown above the content, if any.
    pub fn email_notice(&self) -> Option<String> {
        let indicator = self.email_indicator()?;
        match self.email_status() {
            "" => Some(indicator.to_string()),
            status => Some(format!("{}\n{}", indicator, status)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailIndicator {
    Sent,
    Failed,
}

impl EmailIndicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmailIndicator::Sent => EMAIL_SENT_INDICATOR,
            EmailIndicator::Failed => EMAIL_FAILED_INDICATOR,
        }
    }
}

impl Display for EmailIndicator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
