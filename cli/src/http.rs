//! `reqwest`-backed transport for the records REST API.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use records::api::{Method, Request, RestClient, Transport};
use records::endpoints;
use records::error::ApiError;

pub type HttpApi = RestClient<ReqwestTransport>;

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, request: &Request) -> String {
        endpoints::join(&self.base_url, &request.path_and_query())
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<String, ApiError> {
        let url = self.url(&request);
        tracing::debug!(method = request.method.as_str(), %url, "sending request");

        let builder = self.client.request(http_method(request.method), &url);
        let builder = if let Some(body) = &request.body { builder.json(body) } else { builder };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), &text));
        }
        Ok(text)
    }
}
