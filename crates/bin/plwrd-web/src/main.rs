//! # plwrd-web
//!
//! Composition root that loads configuration and serves the host pages.
//!
//! ## Responsibilities
//! - Parse configuration (`plwrd.toml`, env vars)
//! - Initialize `tracing` output
//! - Build the axum router with the front-end settings and asset directory
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl+C)
//!
//! ## Dependency rule
//! This is the wiring layer — no domain logic belongs here.

mod config;

use plwrd_adapter_http_axum::router;
use plwrd_adapter_http_axum::state::AppState;
use tracing_subscriber::EnvFilter;

use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let state = AppState::new(config.site());
    let app = router::build(state, &config.server.assets_dir);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(
        %bind_addr,
        assets_dir = %config.server.assets_dir,
        admin_endpoint = %config.site.admin_endpoint,
        paste_action = %config.site.paste_action,
        "plwrd-web listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("plwrd-web stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
