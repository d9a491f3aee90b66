//! Paste page service — loading and submitting pastes.

use plwrd_domain::error::TransportError;
use plwrd_domain::paste::{CONNECTION_ERROR, PasteEvent, PasteLink, PasteReply, id_from_path};

use crate::ports::{PasteEndpoint, PastePresenter};

/// Application service behind the paste page.
pub struct PastePage<E, P> {
    endpoint: E,
    presenter: P,
    origin: String,
}

impl<E: PasteEndpoint, P: PastePresenter> PastePage<E, P> {
    /// Create a page whose paste links are built on `origin`
    /// (scheme and host, e.g. `https://paste.example`).
    pub fn new(endpoint: E, presenter: P, origin: impl Into<String>) -> Self {
        Self {
            endpoint,
            presenter,
            origin: origin.into(),
        }
    }

    /// Open the page at `path`.
    ///
    /// The root path shows an empty editor. Any other path names a paste,
    /// which is fetched and shown in the editor.
    pub async fn open(&self, path: &str) {
        let Some(id) = id_from_path(path) else {
            self.presenter.present(PasteEvent::EditorReady);
            return;
        };

        tracing::debug!(%id, "loading paste");
        self.presenter.present(PasteEvent::LoadStarted);
        let event = match self.endpoint.fetch(id).await {
            Ok(resp) => match PasteReply::decode(&resp.body).map(PasteReply::into_paste) {
                Ok(Ok(paste)) => PasteEvent::Loaded(paste.data),
                Ok(Err(err)) => PasteEvent::Failed(err.to_string()),
                Err(err) => {
                    tracing::warn!(%id, status = resp.status, error = %err, "paste body undecodable");
                    let failed = TransportError::http(resp.status, resp.status_text);
                    PasteEvent::Failed(failed.with_status())
                }
            },
            Err(err) => {
                tracing::warn!(%id, status = err.status, error = %err, "paste fetch failed");
                PasteEvent::Failed(err.with_status())
            }
        };
        self.presenter.present(event);
    }

    /// Submit `content` as a new paste and show its link.
    pub async fn submit(&self, content: &str) {
        self.presenter.present(PasteEvent::SubmitStarted);
        let reply = self
            .endpoint
            .submit(content)
            .await
            .and_then(|body| PasteReply::decode(&body));

        let event = match reply.map(PasteReply::into_paste) {
            Ok(Ok(paste)) => {
                tracing::info!(id = %paste.id, "paste created");
                PasteEvent::Created(PasteLink::new(&self.origin, &paste.id))
            }
            Ok(Err(err)) => PasteEvent::Failed(err.to_string()),
            Err(err) => {
                tracing::warn!(status = err.status, error = %err, "paste submission failed");
                PasteEvent::Failed(CONNECTION_ERROR.to_string())
            }
        };
        self.presenter.present(event);
    }
}
