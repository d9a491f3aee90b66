//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the host pages, the compiled front-end from `assets_dir` under
/// `/pkg`, and `/health`. Includes a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest_service("/pkg", ServeDir::new(assets_dir.as_ref()))
        .merge(crate::pages::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
