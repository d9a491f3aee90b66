//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! The front-end runs on a single-threaded event loop, so the returned
//! futures are not required to be `Send`.

pub mod endpoint;
pub mod presenter;

pub use endpoint::{AdminEndpoint, PasteEndpoint, RawResponse};
pub use presenter::{AdminPresenter, PastePresenter};
