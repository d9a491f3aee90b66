//! Shared application state for axum handlers.

use std::sync::Arc;

use plwrd_domain::action::ADMIN_ENDPOINT;

/// Where the front-end finds its back-ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Title shown in the browser tab.
    pub title: String,
    /// URL of the admin action endpoint.
    pub admin_endpoint: String,
    /// URL the paste form posts to and loads pastes from.
    pub paste_action: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "plwrd".to_string(),
            admin_endpoint: ADMIN_ENDPOINT.to_string(),
            paste_action: "/paste".to_string(),
        }
    }
}

/// Application state shared across all axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site: Arc::new(site),
        }
    }
}
