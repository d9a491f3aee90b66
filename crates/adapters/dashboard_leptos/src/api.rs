//! HTTP endpoints wrapping `gloo-net`.

use gloo_net::http::{Request, Response};
use plwrd_app::ports::{AdminEndpoint, PasteEndpoint, RawResponse};
use plwrd_domain::action::{Action, Method};
use plwrd_domain::error::TransportError;
use plwrd_domain::paste::{CONTENT_FIELD, JSON_QUERY};
use web_sys::UrlSearchParams;

/// Query parameter defeating browser caches on GET requests.
const CACHE_BUSTER: &str = "_";

fn network(err: gloo_net::Error) -> TransportError {
    TransportError::network(err.to_string())
}

/// Reject non-2xx responses, then read the body as text.
async fn read_body(resp: Response) -> Result<String, TransportError> {
    read_response(resp).await.map(|raw| raw.body)
}

/// Like [`read_body`], keeping the status line.
async fn read_response(resp: Response) -> Result<RawResponse, TransportError> {
    let status = resp.status();
    let status_text = resp.status_text();
    if !resp.ok() {
        return Err(TransportError::http(status, status_text));
    }
    let body = resp.text().await.map_err(network)?;
    Ok(RawResponse {
        status,
        status_text,
        body,
    })
}

/// Encode `params` as an `application/x-www-form-urlencoded` body.
fn form_body<'k, 'v>(
    params: impl IntoIterator<Item = (&'k str, &'v str)>,
) -> Result<UrlSearchParams, TransportError> {
    let form = UrlSearchParams::new()
        .map_err(|err| TransportError::network(format!("cannot build form: {err:?}")))?;
    for (key, value) in params {
        form.append(key, value);
    }
    Ok(form)
}

/// Millisecond timestamp used as a cache buster.
fn timestamp() -> String {
    format!("{:.0}", js_sys::Date::now())
}

/// Admin endpoint reached over `fetch`.
#[derive(Debug, Clone)]
pub struct GlooAdminEndpoint {
    url: String,
}

impl GlooAdminEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl AdminEndpoint for GlooAdminEndpoint {
    async fn send(&self, action: Action) -> Result<String, TransportError> {
        let params = action.params();
        let resp = match action.method() {
            Method::Get => {
                let nonce = timestamp();
                Request::get(&self.url)
                    .query(params.iter().copied().chain([(CACHE_BUSTER, nonce.as_str())]))
                    .send()
                    .await
                    .map_err(network)?
            }
            Method::Post => Request::post(&self.url)
                .body(form_body(params.iter().copied())?)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?,
        };
        read_body(resp).await
    }
}

/// Paste endpoint reached over `fetch`.
#[derive(Debug, Clone)]
pub struct GlooPasteEndpoint {
    url: String,
}

impl GlooPasteEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl PasteEndpoint for GlooPasteEndpoint {
    async fn fetch(&self, id: &str) -> Result<RawResponse, TransportError> {
        let nonce = timestamp();
        let resp = Request::get(&self.url)
            .query([(JSON_QUERY, id), (CACHE_BUSTER, nonce.as_str())])
            .send()
            .await
            .map_err(network)?;
        read_response(resp).await
    }

    async fn submit(&self, content: &str) -> Result<String, TransportError> {
        let resp = Request::post(&self.url)
            .body(form_body([(CONTENT_FIELD, content)])?)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_body(resp).await
    }
}
