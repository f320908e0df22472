//! Tracing subscriber setup.

use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;
use crate::error::AppError;

/// Filter used when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "info,tower_http=debug";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Build the subscriber for `format` without installing it
pub fn subscriber(service_name: &str, format: LogFormat) -> Box<dyn Subscriber + Send + Sync> {
    let registry = tracing_subscriber::registry().with(env_filter());

    match format {
        LogFormat::Pretty => Box::new(registry.with(fmt::layer().with_target(true))),
        LogFormat::Json => Box::new(registry.with(fmt::layer().json())),
        LogFormat::Bunyan => Box::new(
            registry
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(service_name.to_string(), std::io::stdout)),
        ),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(service_name: &str, format: LogFormat) -> Result<(), AppError> {
    tracing::subscriber::set_global_default(subscriber(service_name, format))
        .map_err(|e| AppError::Config(format!("Failed to install tracing subscriber: {}", e)))
}
