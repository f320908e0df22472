// Grievance Bot Entry Point
// Loads configuration, installs tracing and serves the grievance API

use anyhow::Context;
use grievance_core::api::{self, health::SERVICE_NAME, AppState};
use grievance_core::config::AppConfig;
use grievance_core::grievance::GrievanceService;
use grievance_core::telemetry;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()
        .context("Failed to load configuration")?;
    telemetry::init(SERVICE_NAME, config.log_format)?;

    let state = AppState::new(GrievanceService::default());
    let app = api::router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, version = env!("CARGO_PKG_VERSION"), "Grievance Bot listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Grievance Bot stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
