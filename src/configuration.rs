use crate::constant::{
    DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_MILLISECONDS, LOCAL_ENVIRONMENT, PRODUCTION_ENVIRONMENT,
};
use crate::error::BizErrorEnum;
use crate::generation_client::GenerationClient;
use crate::request::GenerationForm;
use config::{Config, File};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::Path;
use std::time::Duration;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub api: ApiSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(&self) -> Result<GenerationClient, BizErrorEnum> {
        GenerationClient::new(&self.base_url, self.timeout())
    }
}

pub fn get_configuration() -> Result<Settings, BizErrorEnum> {
    let base_path = std::env::current_dir().map_err(|e| {
        tracing::error!("Failed to get current dir.");
        BizErrorEnum::GetCurrentDirError(e)
    })?;
    let config_dir = base_path.join("configuration");
    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| LOCAL_ENVIRONMENT.into())
        .try_into()
        .map_err(|e| {
            tracing::error!("Failed to parse APP_ENVIRONMENT: {:?}", e);
            BizErrorEnum::ParseEnvironmentVariableError(e)
        })?;
    let environment_filename = format!("{}.yaml", environment.as_str());
    // Defaults first, then the yaml files, then `APP_API__BASE_URL`-style variables
    let settings = Config::builder()
        .set_default("api.base_url", DEFAULT_API_BASE_URL)
        .and_then(|builder| {
            builder.set_default("api.timeout_milliseconds", DEFAULT_TIMEOUT_MILLISECONDS)
        })
        .map_err(|e| {
            tracing::error!("Failed to set configuration defaults.");
            BizErrorEnum::BuildConfigSourcesError(e)
        })?
        .add_source(File::from(config_dir.join("base.yaml")).required(false))
        .add_source(File::from(config_dir.join(environment_filename)).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build config sources.");
            BizErrorEnum::BuildConfigSourcesError(e)
        })?;
    // Try to convert the configuration values it read into our Settings type
    settings.try_deserialize().map_err(|e| {
        tracing::error!("Failed to deserialize config file.");
        BizErrorEnum::DeserializeConfigurationFileError(e)
    })
}

/// Reads a yaml content brief into a form. Missing fields stay empty.
pub fn load_brief(path: &Path) -> Result<GenerationForm, BizErrorEnum> {
    Config::builder()
        .add_source(File::from(path))
        .build()
        .and_then(|brief| brief.try_deserialize())
        .map_err(|e| {
            tracing::error!("Failed to load brief from {}: {:?}", path.display(), e);
            BizErrorEnum::LoadBriefError(e)
        })
}

/// The possible runtime environment for our application.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => LOCAL_ENVIRONMENT,
            Environment::Production => PRODUCTION_ENVIRONMENT,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            LOCAL_ENVIRONMENT => Ok(Self::Local),
            PRODUCTION_ENVIRONMENT => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'local' or 'production'.",
                other
            )),
        }
    }
}
