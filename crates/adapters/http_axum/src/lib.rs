//! # plwrd-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Render the **host pages** that boot the WASM front-end: the admin
//!   panel at `/admin` and the paste page at `/` and `/{paste_id}`
//! - Serve the compiled front-end bundle under `/pkg`
//! - Answer `/health` for liveness probes
//!
//! The admin action endpoint and the paste endpoint live elsewhere; the
//! host pages only tell the front-end where to find them.
//!
//! ## Dependency rule
//! Depends on `plwrd-domain` for shared constants only. Never leaks axum
//! types into the domain.

pub mod pages;
pub mod router;
pub mod state;
