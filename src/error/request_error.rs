use serde_json::Value;

/// The request left the client but no successful result came back.
///
/// Only a human-readable message survives: the server's `detail` field when it
/// has one, otherwise a generic description of what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Used when no response was received at all.
    pub fn fallback(message: &str) -> Self {
        Self::new(message)
    }

    /// Used when the server answered with an error status but no usable detail.
    pub fn from_status(status: u16) -> Self {
        Self::new(format!("Request failed with status code {}", status))
    }

    /// Extracts a message from the server's `detail` field.
    ///
    /// Returns `None` when the detail is null or a blank string, so the caller
    /// can fall back to a status based message.
    pub fn from_detail(detail: &Value) -> Option<Self> {
        detail_message(detail).map(Self::new)
    }

    /// Builds the error for a non-success response from its status and raw body.
    pub fn from_response_body(status: u16, body: &[u8]) -> Self {
        serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|body| body.get("detail").and_then(Self::from_detail))
            .unwrap_or_else(|| Self::from_status(status))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) if items.is_empty() => None,
        // FastAPI validation errors: [{"loc": [...], "msg": "...", "type": "..."}]
        Value::Array(items) => Some(
            items
                .iter()
                .map(item_message)
                .collect::<Vec<String>>()
                .join(", "),
        ),
        other => Some(other.to_string()),
    }
}

fn item_message(item: &Value) -> String {
    match item {
        Value::Object(fields) => match fields.get("msg") {
            Some(Value::String(msg)) => msg.clone(),
            _ => item.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
