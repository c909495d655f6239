//! Browser transport for the records REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every request fails with a transport error, since the
//! pages only load data after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Network failures map to `ApiError::Transport`; non-2xx responses keep the
//! status and the backend's `detail` so pages can surface it in a notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use records::api::{Request, RestClient, Transport};
use records::error::ApiError;

/// `RestClient` bound to the browser transport.
pub type HttpApi = RestClient<HttpTransport>;

/// Sends [`Request`]s to the configured backend base URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

/// Client every page uses to reach the backend.
#[must_use]
pub fn records_api() -> HttpApi {
    RestClient::new(HttpTransport)
}

#[cfg(any(test, feature = "hydrate"))]
fn request_url(request: &Request) -> String {
    records::endpoints::url(&request.path_and_query())
}

#[cfg(any(test, feature = "hydrate"))]
fn unreachable_message(url: &str, error: &str) -> String {
    format!("request to {url} failed: {error}")
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request as HttpRequest;
            use records::api::Method;

            let url = request_url(&request);
            let transport = |e: gloo_net::Error| ApiError::Transport(unreachable_message(&url, &e.to_string()));

            let builder = match request.method {
                Method::Get => HttpRequest::get(&url),
                Method::Post => HttpRequest::post(&url),
                Method::Put => HttpRequest::put(&url),
                Method::Delete => HttpRequest::delete(&url),
            };
            let pending = match &request.body {
                Some(body) => builder.json(body).map_err(transport)?,
                None => builder.build().map_err(transport)?,
            };
            let resp = pending.send().await.map_err(transport)?;
            let ok = resp.ok();
            let status = resp.status();
            let text = resp.text().await.map_err(transport)?;
            if !ok {
                tracing::debug!(%url, status, "backend rejected request");
                return Err(ApiError::from_status(status, &text));
            }
            Ok(text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("records API is only reachable from the browser".to_owned()))
        }
    }
}
