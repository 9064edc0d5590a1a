//! HTTP client for communicating with calcd.
//!
//! Pages talk to the service through the `Transport` trait so that tests can
//! count (or forbid) network calls. `HttpTransport` is the reqwest-backed
//! implementation used by the binary.

use calc_common::{Endpoint, HealthResponse, Outcome};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Cannot reach calculation server: {0}")]
    Transport(String),

    #[error("Unreadable response (HTTP {status}): {detail}")]
    InvalidResponse { status: u16, detail: String },
}

/// Status code and JSON body of one response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

/// One request/response round trip to the calculation service
pub trait Transport {
    fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> impl Future<Output = Result<RawResponse, ClientError>> + Send;
}

/// Classify a response: an `error` field wins regardless of status, any
/// other 2xx body must decode as `R`.
pub fn interpret<R: DeserializeOwned>(response: RawResponse) -> Outcome<R> {
    if let Some(message) = response.body.get("error").and_then(Value::as_str) {
        return Outcome::Rejected(message.to_string());
    }

    if !(200..300).contains(&response.status) {
        return Outcome::Unreachable(format!("HTTP {}", response.status));
    }

    match serde_json::from_value(response.body) {
        Ok(result) => Outcome::Success(result),
        Err(e) => Outcome::Unreachable(format!("Unexpected result shape: {}", e)),
    }
}

/// Send one calculation request and classify what came back
pub async fn submit<T, B, R>(transport: &T, endpoint: Endpoint, body: &B) -> Outcome<R>
where
    T: Transport,
    B: Serialize + Sync,
    R: DeserializeOwned,
{
    debug!("Sending request to {}", endpoint.path());
    match transport.post_json(endpoint.path(), body).await {
        Ok(response) => {
            debug!("Got response from {}: HTTP {}", endpoint.path(), response.status);
            interpret(response)
        }
        Err(e) => {
            debug!("Request to {} failed: {}", endpoint.path(), e);
            Outcome::Unreachable(e.to_string())
        }
    }
}

/// reqwest-backed transport against a base URL such as `http://127.0.0.1:8000`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("calcctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse, ClientError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let body = serde_json::from_str(&text).map_err(|e| ClientError::InvalidResponse {
            status,
            detail: e.to_string(),
        })?;
        Ok(RawResponse { status, body })
    }

    /// Query `GET /api/health`
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let response = self
            .client
            .get(self.url("/api/health"))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        let raw = Self::read(response).await?;
        serde_json::from_value(raw.body).map_err(|e| ClientError::InvalidResponse {
            status: raw.status,
            detail: e.to_string(),
        })
    }
}

impl Transport for HttpTransport {
    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse, ClientError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Self::read(response).await
    }
}
