//! Browser front-end for plwrd, compiled to WASM.
//!
//! The host page picks what gets mounted through attributes on `<body>`:
//!
//! - `data-page="admin"` (default) mounts the admin panel, talking to
//!   `data-endpoint` (default `/plwrd`).
//! - `data-page="paste"` mounts the paste page, posting to `data-endpoint`.

use leptos::prelude::*;
use plwrd_domain::action::ADMIN_ENDPOINT;
use wasm_bindgen::prelude::*;

pub mod api;
mod components;
mod hash;
mod pages;
mod presenter;

use pages::{AdminPage, PastePage};

/// Which page the host document asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mount {
    Admin { endpoint: String },
    Paste { endpoint: String, origin: String },
}

/// Read the mount target from the `<body>` dataset.
fn mount_target() -> Option<Mount> {
    let window = web_sys::window()?;
    let body = window.document()?.body()?;
    let dataset = body.dataset();
    let endpoint = dataset.get("endpoint").filter(|e| !e.is_empty());

    match dataset.get("page").as_deref() {
        Some("paste") => Some(Mount::Paste {
            endpoint: endpoint.unwrap_or_else(|| "/".to_string()),
            origin: window.location().origin().unwrap_or_default(),
        }),
        _ => Some(Mount::Admin {
            endpoint: endpoint.unwrap_or_else(|| ADMIN_ENDPOINT.to_string()),
        }),
    }
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    match mount_target() {
        Some(Mount::Admin { endpoint }) => {
            leptos::mount::mount_to_body(move || view! { <AdminPage endpoint/> });
        }
        Some(Mount::Paste { endpoint, origin }) => {
            leptos::mount::mount_to_body(move || view! { <PastePage endpoint origin/> });
        }
        None => leptos::logging::warn!("no document body to mount on"),
    }
}
