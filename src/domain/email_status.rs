use crate::constant::EMAIL_SUCCESS_STATUS;
use serde::Deserialize;

/// The generation service's answer to `POST /content/send-email`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmailStatus {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl EmailStatus {
    pub fn is_success(&self) -> bool {
        self.status == EMAIL_SUCCESS_STATUS
    }
}
