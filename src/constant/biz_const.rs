/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// configuration defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_TIMEOUT_MILLISECONDS: u64 = 300_000;

/// generation service endpoints, relative to the base url
pub const GENERATE_PATH: &str = "content/generate";
pub const SEND_EMAIL_PATH: &str = "content/send-email";

/// validate request fields, measured in graphemes
pub const MAX_TOPICS: usize = 5;
pub const MAX_LONG_TEXT_LENGTH: usize = 500;
pub const MAX_SHORT_TEXT_LENGTH: usize = 200;

/// fallback messages when the service gives nothing better
pub const GENERATE_FALLBACK_MESSAGE: &str = "Failed to generate content";
pub const SEND_EMAIL_FALLBACK_MESSAGE: &str = "Failed to send email";

/// email result indicators
pub const EMAIL_SENT_INDICATOR: &str = "✓ Email Sent";
pub const EMAIL_FAILED_INDICATOR: &str = "✗ Email Failed";
pub const EMAIL_SUCCESS_STATUS: &str = "success";

/// logging
pub const APP_NAME: &str = "content-pilot";
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// http stack targets that are noisy at info level
pub const QUIET_LOG_TARGETS: [&str; 3] = ["hyper", "reqwest", "rustls"];
