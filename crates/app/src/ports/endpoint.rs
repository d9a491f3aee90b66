//! Endpoint ports — transport to the remote admin and paste services.
//!
//! Adapters only move bytes. Decoding and error-code handling stay in the
//! services so every transport behaves the same.

use std::future::Future;

use plwrd_domain::action::Action;
use plwrd_domain::error::TransportError;

/// A 2xx response together with its status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    /// `200 OK` carrying `body`.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }
}

/// Sends actions to the remote admin endpoint.
pub trait AdminEndpoint {
    /// Perform `action` and return the raw response body.
    ///
    /// Only transport failures are errors here: a body carrying an `err`
    /// field is still a successful exchange.
    fn send(&self, action: Action) -> impl Future<Output = Result<String, TransportError>>;
}

/// Fetches and stores pastes.
pub trait PasteEndpoint {
    /// `GET ?json=<id>` and return the response.
    ///
    /// The status line is kept so an undecodable body can be reported
    /// the same way as a failed request.
    fn fetch(&self, id: &str) -> impl Future<Output = Result<RawResponse, TransportError>>;

    /// `POST` the form-encoded paste body and return the raw response body.
    fn submit(&self, content: &str) -> impl Future<Output = Result<String, TransportError>>;
}

impl<T: AdminEndpoint + ?Sized> AdminEndpoint for &T {
    fn send(&self, action: Action) -> impl Future<Output = Result<String, TransportError>> {
        (**self).send(action)
    }
}

impl<T: PasteEndpoint + ?Sized> PasteEndpoint for &T {
    fn fetch(&self, id: &str) -> impl Future<Output = Result<RawResponse, TransportError>> {
        (**self).fetch(id)
    }

    fn submit(&self, content: &str) -> impl Future<Output = Result<String, TransportError>> {
        (**self).submit(content)
    }
}
