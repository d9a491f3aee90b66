//! Host pages booting the WASM front-end.

use askama::Template;
use axum::Router;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

use crate::state::AppState;

/// Admin panel host page.
#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    title: String,
    endpoint: String,
}

/// Paste host page. `paste_id` is set when an existing paste is opened.
#[derive(Template)]
#[template(path = "paste.html")]
pub struct PasteTemplate {
    title: String,
    action: String,
    paste_id: Option<String>,
}

impl IntoResponse for AdminTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

impl IntoResponse for PasteTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /admin`
pub async fn admin(State(state): State<AppState>) -> AdminTemplate {
    AdminTemplate {
        title: state.site.title.clone(),
        endpoint: state.site.admin_endpoint.clone(),
    }
}

/// `GET /` — empty editor.
pub async fn new_paste(State(state): State<AppState>) -> PasteTemplate {
    paste_page(&state, None)
}

/// `GET /{paste_id}` — editor loaded with an existing paste.
pub async fn open_paste(
    State(state): State<AppState>,
    Path(paste_id): Path<String>,
) -> PasteTemplate {
    tracing::debug!(%paste_id, "serving paste page");
    paste_page(&state, Some(paste_id))
}

fn paste_page(state: &AppState, paste_id: Option<String>) -> PasteTemplate {
    PasteTemplate {
        title: state.site.title.clone(),
        action: state.site.paste_action.clone(),
        paste_id,
    }
}

/// Build the sub-router for the host pages.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin))
        .route("/", get(new_paste))
        .route("/{paste_id}", get(open_paste))
}
