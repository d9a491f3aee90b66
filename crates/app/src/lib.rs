//! # plwrd-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AdminEndpoint` — sends an action to the remote admin endpoint
//!   - `PasteEndpoint` — fetches and submits pastes
//!   - `AdminPresenter` / `PastePresenter` — receive view events and
//!     perform navigation
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AdminPanel` — route dispatch and app CRUD
//!   - `PastePage` — paste loading and submission
//! - Orchestrate domain objects without knowing *how* requests travel or how
//!   views are rendered
//!
//! ## Dependency rule
//! Depends on `plwrd-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
