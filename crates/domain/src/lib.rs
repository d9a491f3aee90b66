//! # plwrd-domain
//!
//! Pure domain model for the plwrd admin panel and paste page.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, the server error-code table
//! - Define **Apps** (named, shell-command-backed managed processes) and their
//!   validation rules
//! - Define **Routes** (hash fragments mapped to admin panel screens)
//! - Define the **wire format** of the remote action endpoint
//! - Define **view state** for both pages, folded from events
//! - Simulate the paste page **progress bar**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod html;

pub mod action;
pub mod admin_view;
pub mod app;
pub mod logs;
pub mod paste;
pub mod progress;
pub mod route;
