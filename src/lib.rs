pub mod configuration;
pub mod constant;
pub mod domain;
pub mod error;
pub mod generation_client;
pub mod request;
pub mod session;
pub mod telemetry;
