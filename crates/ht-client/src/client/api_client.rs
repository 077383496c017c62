use crate::{ClientError, ClientResult};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Shared HTTP plumbing for the health API.
///
/// One request per call: no retries, no caching.
#[derive(Clone)]
pub struct ApiClient {
    pub base_url: String,
    bearer_token: Option<String>,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://localhost:8080/api")
    /// * `timeout` - Whole-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: None,
            client,
        })
    }

    /// Same connection pool, with an `Authorization: Bearer` header on every request.
    pub fn with_bearer_token(&self, token: Option<String>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            bearer_token: token,
            client: self.client.clone(),
        }
    }

    pub fn has_bearer_token(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// Build a request with optional bearer token
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.bearer_token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and decode a typed success body
    pub(crate) async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let body = self.send(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Execute request whose success body carries nothing we need
    pub(crate) async fn execute_empty(&self, req: RequestBuilder) -> ClientResult<()> {
        self.send(req).await.map(|_| ())
    }

    async fn send(&self, req: RequestBuilder) -> ClientResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("{} <- {} bytes", status, body.len());

        if !status.is_success() {
            let message = server_message(&body).unwrap_or_else(|| reason(status));
            return Err(ClientError::from_status(status.as_u16(), message));
        }

        Ok(body)
    }
}

/// Pull a human message out of an error body.
///
/// Accepts `{"message": ..}`, `{"error": ".."}`, `{"error": {"message": ..}}`
/// or a short plain-text body.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| value.get("error").and_then(Value::as_str))
            .or_else(|| {
                value
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
            })
            .map(String::from),
        Err(_) if !trimmed.starts_with('<') => Some(trimmed.to_string()),
        Err(_) => None,
    }
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(String::from)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
