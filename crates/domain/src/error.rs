//! Common error types used across the workspace.
//!
//! Each failure class has its own type. [`PlwrdError`] joins them with
//! `#[from]` conversions so services can use `?` throughout.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Messages shown for the error codes returned by the admin endpoint.
pub const ERROR_MESSAGES: [&str; 6] = [
    "Connection error",
    "Bad request",
    "Not implemented",
    "Internal error",
    "Duplicate entry in a database",
    "Not found",
];

/// Numeric error code returned in the `err` field of an admin response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub i64);

impl ErrorCode {
    /// User-facing message for this code.
    ///
    /// Codes outside the fixed table get a generic message that still carries
    /// the number.
    #[must_use]
    pub fn message(self) -> Cow<'static, str> {
        usize::try_from(self.0)
            .ok()
            .and_then(|idx| ERROR_MESSAGES.get(idx))
            .map_or_else(
                || Cow::Owned(format!("Unknown error (code {})", self.0)),
                |msg| Cow::Borrowed(*msg),
            )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A form field failed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Length of {field} must be between {min} and {max}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{field} contains invalid characters")]
    InvalidCharacters { field: &'static str },
}

/// The remote endpoint answered with a non-null `err` field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    /// Numeric code, shown through the message table.
    #[error("{}", .0.message())]
    Code(ErrorCode),

    /// Message sent by the server, shown as-is.
    #[error("{0}")]
    Message(String),
}

impl RemoteError {
    /// Interpret the value of an `err` field.
    ///
    /// Integers are table codes and strings are shown verbatim. Any other
    /// value is shown as its JSON text.
    #[must_use]
    pub fn from_value(err: &serde_json::Value) -> Self {
        match err {
            serde_json::Value::String(text) => Self::Message(text.clone()),
            other => other.as_i64().map_or_else(
                || Self::Message(other.to_string()),
                |code| Self::Code(ErrorCode(code)),
            ),
        }
    }
}

impl From<ErrorCode> for RemoteError {
    fn from(code: ErrorCode) -> Self {
        Self::Code(code)
    }
}

/// The request never produced a usable response: network failure, non-2xx
/// status, or a body that is not the expected JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct TransportError {
    /// HTTP status, `0` when no response was received.
    pub status: u16,
    /// Status text or a description of the failure.
    pub reason: String,
}

impl TransportError {
    /// Failure without an HTTP response (network error, aborted request).
    #[must_use]
    pub fn network(reason: impl Into<String>) -> Self {
        Self {
            status: 0,
            reason: reason.into(),
        }
    }

    /// Non-2xx HTTP response.
    #[must_use]
    pub fn http(status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }

    /// The body could not be decoded.
    #[must_use]
    pub fn decode(err: &serde_json::Error) -> Self {
        Self {
            status: 0,
            reason: format!("Invalid response: {err}"),
        }
    }

    /// Render as `"<reason> (<status>)"`.
    #[must_use]
    pub fn with_status(&self) -> String {
        format!("{} ({})", self.reason, self.status)
    }
}

/// Umbrella error for application use-cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlwrdError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl From<ErrorCode> for PlwrdError {
    fn from(code: ErrorCode) -> Self {
        Self::Remote(RemoteError::Code(code))
    }
}
