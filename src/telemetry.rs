use crate::constant::{APP_NAME, DEFAULT_LOG_LEVEL, QUIET_LOG_TARGETS};
use crate::error::BizErrorEnum;
use tracing::{subscriber, Subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Bunyan JSON subscriber writing to `sink`.
///
/// `RUST_LOG` wins when set. Otherwise events at `level` and above are kept,
/// except the http stack's own chatter which is held back to warnings, so a
/// long generation call logs our spans and not every pooled connection.
pub fn get_subscriber<Sink>(
    name: String,
    level: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&level));
    compose(name, env_filter, sink)
}

/// Logging for the command line: stdout only carries the generated
/// markdown, so every log line goes to stderr.
pub fn init_cli_subscriber() -> Result<(), BizErrorEnum> {
    let subscriber = get_subscriber(APP_NAME.into(), DEFAULT_LOG_LEVEL.into(), std::io::stderr);
    init_subscriber(subscriber)
}

/// Register a subscriber as global default to process span data.
///
/// It should only be called once!
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), BizErrorEnum> {
    // reqwest and hyper still log through `log` for some events
    LogTracer::init().map_err(|e| {
        tracing::error!("Failed to set logger");
        BizErrorEnum::SetLoggerError(e)
    })?;
    subscriber::set_global_default(subscriber).map_err(|e| {
        tracing::error!("Failed to set subscriber");
        BizErrorEnum::SetSubscriberError(e)
    })
}

fn default_filter(level: &str) -> EnvFilter {
    let directives = QUIET_LOG_TARGETS
        .iter()
        .map(|target| format!("{}=warn", target))
        .collect::<Vec<String>>()
        .join(",");
    EnvFilter::new(format!("{},{}", level, directives))
}

fn compose<Sink>(name: String, env_filter: EnvFilter, sink: Sink) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let formatting_layer = BunyanFormattingLayer::new(name, sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}
