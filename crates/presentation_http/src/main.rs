//! GDPR review HTTP server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use anyhow::Context;
use infrastructure::{AppConfig, build_review_components, default_secret_store, init_tracing};
use presentation_http::{AppState, create_app, error::set_expose_internal_errors, server};
use tokio::net::TcpListener;
use tracing::{error, info};

const DEFAULT_LOG_FILTER: &str =
    "gdpr_review_server=debug,presentation_http=debug,application=info,infrastructure=info,ai_core=info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = AppConfig::load();
    let log_format = loaded
        .as_ref()
        .map(|config| config.server.log_format)
        .unwrap_or_default();
    init_tracing(log_format, DEFAULT_LOG_FILTER);

    info!("GDPR review server v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.context("Failed to load configuration")?;
    config
        .resolve_secrets(&default_secret_store())
        .await
        .context("Failed to resolve secrets")?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        environment = %config.environment(),
        provider = %config.inference.provider,
        model = %config.inference.default_model,
        rule = %config.analysis.verdict_rule,
        "Configuration loaded"
    );

    set_expose_internal_errors(!config.is_production());

    let components = match build_review_components(&config) {
        Ok(components) => components,
        Err(e) => {
            error!(error = %e, "Model initialisation failed");
            anyhow::bail!("Failed to initialize the GDPR analysis model");
        },
    };

    let state = AppState::new(&components, config.clone());
    let app = create_app(state);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    server::serve(listener, app, server::shutdown_signal(), shutdown_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}
