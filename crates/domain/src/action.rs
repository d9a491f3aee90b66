//! Wire format of the remote admin endpoint.
//!
//! Every request names an [`Action`]. Reads are `GET` requests with the
//! action in the query string; writes are form-encoded `POST` bodies.
//! Every response is JSON; failures are signalled by an `err` field rather
//! than by HTTP status.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{PlwrdError, RemoteError, TransportError};

/// Default path of the admin endpoint, relative to the page origin.
pub const ADMIN_ENDPOINT: &str = "/plwrd";

/// HTTP method used for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An operation understood by the admin endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListApps,
    GetApp { name: String },
    GetLogs { name: String },
    RunApp { name: String },
    AddApp { name: String, cmd: String },
    EditApp { name: String, cmd: String },
    DelApp { name: String },
    WipeApps,
}

impl Action {
    /// Keyword sent in the `action` parameter.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::ListApps => "listApps",
            Self::GetApp { .. } => "getApp",
            Self::GetLogs { .. } => "getLogs",
            Self::RunApp { .. } => "runApp",
            Self::AddApp { .. } => "addApp",
            Self::EditApp { .. } => "editApp",
            Self::DelApp { .. } => "delApp",
            Self::WipeApps => "wipeApps",
        }
    }

    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::ListApps | Self::GetApp { .. } | Self::GetLogs { .. } | Self::RunApp { .. } => {
                Method::Get
            }
            Self::AddApp { .. } | Self::EditApp { .. } | Self::DelApp { .. } | Self::WipeApps => {
                Method::Post
            }
        }
    }

    /// Request parameters, `action` first.
    ///
    /// Sent as the query string for [`Method::Get`] and as the form body for
    /// [`Method::Post`].
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![("action", self.keyword())];
        match self {
            Self::ListApps | Self::WipeApps => {}
            Self::GetApp { name }
            | Self::GetLogs { name }
            | Self::RunApp { name }
            | Self::DelApp { name } => params.push(("name", name)),
            Self::AddApp { name, cmd } | Self::EditApp { name, cmd } => {
                params.push(("name", name));
                params.push(("cmd", cmd));
            }
        }
        params
    }
}

/// Body of a successful write: an empty object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {}

/// Body of a successful `runApp`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RunOutcome {
    #[serde(default)]
    result: i64,
}

impl RunOutcome {
    /// `result` is `1` when the command succeeded and `0` otherwise.
    #[must_use]
    pub fn succeeded(self) -> bool {
        self.result != 0
    }
}

/// Decode a response body into the expected payload.
///
/// Any non-null `err` field wins over the payload, whether it holds a code
/// or a message. A body that is neither an error nor a valid payload is
/// reported as a transport failure.
///
/// # Errors
///
/// Returns [`PlwrdError::Remote`] when the server signalled an error and
/// [`PlwrdError::Transport`] when the body cannot be decoded.
pub fn decode_reply<T: DeserializeOwned>(body: &str) -> Result<T, PlwrdError> {
    let reply: Value =
        serde_json::from_str(body).map_err(|err| TransportError::decode(&err))?;
    if let Some(err) = reply.get("err").filter(|err| !err.is_null()) {
        return Err(RemoteError::from_value(err).into());
    }
    serde_json::from_value(reply).map_err(|err| TransportError::decode(&err).into())
}
