use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod error;
mod middleware;
mod routes;
mod state;

#[cfg(test)]
mod tests;

use config::ServiceConfig;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServiceConfig::from_env();
    tracing::info!(
        service = %config.service_name,
        cors_origin = %config.cors_origin,
        "starting screening service"
    );

    let app = app::build_router(AppState {
        config: Arc::new(config),
    })?;

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
