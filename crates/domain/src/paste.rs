//! Paste page — wire format and view state.

use serde::Deserialize;
use serde_json::Value;

use crate::error::TransportError;
use crate::html;
use crate::progress::{ProgressBar, Step};

/// Form field carrying the paste body in a submission.
pub const CONTENT_FIELD: &str = "data";

/// Query parameter used to fetch a paste as JSON.
pub const JSON_QUERY: &str = "json";

/// Message shown when a submission cannot reach the server.
pub const CONNECTION_ERROR: &str = "connection error";

/// A stored paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paste {
    pub id: String,
    pub data: String,
}

/// The paste endpoint answered with an `err` field, or with nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct PasteError(pub String);

/// Raw response of the paste endpoint.
///
/// Fetching returns `{id, data}` and submitting returns `{id}`; either may
/// instead carry `{err}`, where the error is a string or a number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PasteReply {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    data: Option<String>,
    #[serde(default)]
    err: Option<Value>,
}

impl PasteReply {
    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when the body is not a JSON object.
    pub fn decode(body: &str) -> Result<Self, TransportError> {
        serde_json::from_str(body).map_err(|err| TransportError::decode(&err))
    }

    /// Interpret the reply. A usable `id` means success.
    ///
    /// # Errors
    ///
    /// Returns the server's `err` as a [`PasteError`] when there is no id.
    pub fn into_paste(self) -> Result<Paste, PasteError> {
        match self.id.as_ref().and_then(id_text) {
            Some(id) => Ok(Paste {
                id,
                data: self.data.unwrap_or_default(),
            }),
            None => Err(PasteError(match self.err {
                Some(Value::String(message)) => message,
                Some(other) if !other.is_null() => other.to_string(),
                _ => "Unexpected response".to_string(),
            })),
        }
    }
}

/// Ids may be strings or numbers; empty strings and zero are not ids.
fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) if id.as_i64() != Some(0) => Some(id.to_string()),
        _ => None,
    }
}

/// Strip the leading slash of a page path to obtain the paste id.
///
/// Returns `None` for the root page, which shows an empty editor.
#[must_use]
pub fn id_from_path(path: &str) -> Option<&str> {
    path.strip_prefix('/')
        .unwrap_or(path)
        .split(['?', '#'])
        .next()
        .filter(|id| !id.is_empty())
}

/// Public link to a newly created paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteLink {
    pub url: String,
    pub title: String,
}

impl PasteLink {
    /// Build `<origin>/<id>` with a `post id: <id>` tooltip.
    #[must_use]
    pub fn new(origin: &str, id: &str) -> Self {
        Self {
            url: format!("{}/{id}", origin.trim_end_matches('/')),
            title: format!("post id: {id}"),
        }
    }
}

/// Something that happened on the paste page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteEvent {
    /// The root page opened: empty editor, send enabled.
    EditorReady,
    /// Fetching an existing paste began.
    LoadStarted,
    /// A submission began.
    SubmitStarted,
    ContentChanged(String),
    /// An existing paste arrived (still HTML-escaped).
    Loaded(String),
    Created(PasteLink),
    Failed(String),
}

/// Snapshot of everything the paste page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteView {
    pub content: String,
    pub link: Option<PasteLink>,
    pub error: Option<String>,
    pub progress: ProgressBar,
    pub send_enabled: bool,
    pub editor_visible: bool,
}

impl PasteView {
    /// Fold one event into the view.
    pub fn apply(&mut self, event: PasteEvent) {
        match event {
            PasteEvent::EditorReady => {
                self.editor_visible = true;
                self.send_enabled = true;
            }
            PasteEvent::LoadStarted => {
                self.reset();
                self.editor_visible = false;
            }
            PasteEvent::SubmitStarted => {
                self.reset();
                self.send_enabled = false;
            }
            PasteEvent::ContentChanged(content) => self.content = content,
            PasteEvent::Loaded(data) => {
                self.content = html::to_text(&data);
                self.editor_visible = true;
                self.finish();
            }
            PasteEvent::Created(link) => {
                self.link = Some(link);
                self.finish();
            }
            PasteEvent::Failed(message) => {
                self.error = Some(message);
                self.finish();
            }
        }
    }

    /// Advance the progress bar if `run` is still the current one.
    pub fn tick(&mut self, run: u64, step: Step) -> Option<Step> {
        if run == self.progress.run() {
            self.progress.step(step)
        } else {
            None
        }
    }

    /// Whether a submission may be sent now.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.send_enabled && !self.progress.is_visible()
    }

    fn reset(&mut self) {
        self.error = None;
        self.link = None;
        self.progress.start();
    }

    fn finish(&mut self) {
        self.progress.complete();
        self.send_enabled = true;
    }
}
