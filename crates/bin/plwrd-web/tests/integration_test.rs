//! End-to-end smoke tests for the plwrd-web stack.
//!
//! Each test builds the real router with real page templates and a real
//! asset directory, and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use plwrd_adapter_http_axum::router;
use plwrd_adapter_http_axum::state::{AppState, SiteConfig};
use tower::ServiceExt;

/// Directory standing in for the compiled front-end bundle.
fn assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests")
}

fn app() -> axum::Router {
    router::build(AppState::new(SiteConfig::default()), assets_dir())
}

async fn body_text(resp: axum::response::Response) -> String {
    String::from_utf8(resp.into_body().collect().await.unwrap().to_bytes().to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "OK");
}

// ---------------------------------------------------------------------------
// Host pages
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_admin_page_pointing_at_admin_endpoint() {
    let resp = app()
        .oneshot(Request::builder().uri("/admin").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = body_text(resp).await;
    assert!(body.contains(r#"data-page="admin""#));
    assert!(body.contains(r#"data-endpoint="/plwrd""#));
}

#[tokio::test]
async fn should_render_paste_page_with_configured_action() {
    let state = AppState::new(SiteConfig {
        paste_action: "/p".to_string(),
        ..SiteConfig::default()
    });
    let resp = router::build(state, assets_dir())
        .oneshot(Request::builder().uri("/x7Yz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(r#"data-page="paste""#));
    assert!(body.contains(r#"action="/p""#));
    assert!(body.contains("x7Yz"));
}

#[tokio::test]
async fn should_not_accept_posts_on_host_pages() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::from("data=hello"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Front-end assets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_front_end_assets() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/pkg/integration_test.rs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("End-to-end smoke tests"));
}

#[tokio::test]
async fn should_return_not_found_for_unknown_asset() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/pkg/plwrd_dashboard_bg.wasm")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
