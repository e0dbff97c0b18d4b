use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum BizErrorEnum {
    // VALIDATE BASE URL
    #[error("Url is incorrect: {0}")]
    ParseUrlError(String),

    #[error("Url cannot be used as a base: {0}")]
    UrlCannotBeABase(String),

    // HTTP CLIENT
    #[error("Failed to build the http client.")]
    BuildHttpClientError(#[source] reqwest::Error),

    // CONFIGURATION
    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    #[error("Failed to load the content brief.")]
    LoadBriefError(#[source] config::ConfigError),

    // TELEMETRY
    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),
}

impl Debug for BizErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
