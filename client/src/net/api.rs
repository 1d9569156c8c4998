//! HTTP client for the Janus API.
//!
//! Only two endpoints are used: `GET /health` at startup and
//! `POST /test/capture` when the user submits content. Both responses are
//! logged by the controller and never rendered.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies all surface
//! as [`ClientError`] so the controller can turn them into a toast.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::types::{CaptureReceipt, CaptureRequest, ClientError, HealthStatus};
use crate::config::ClientConfig;

fn health_endpoint(base_url: &str) -> String {
    format!("{base_url}/health")
}

fn capture_endpoint(base_url: &str) -> String {
    format!("{base_url}/test/capture")
}

/// The network calls the controller makes directly.
#[async_trait(?Send)]
pub trait Backend {
    /// `GET /health`.
    async fn health(&self) -> Result<HealthStatus, ClientError>;

    /// `POST /test/capture`.
    async fn capture(&self, request: &CaptureRequest) -> Result<CaptureReceipt, ClientError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against `config.api_base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout());
        let http = builder
            .build()
            .map_err(|e| ClientError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.api_base_url.clone() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl Backend for ApiClient {
    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self
            .http
            .get(health_endpoint(&self.base_url))
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        decode_json(response).await
    }

    async fn capture(&self, request: &CaptureRequest) -> Result<CaptureReceipt, ClientError> {
        let response = self
            .http
            .post(capture_endpoint(&self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;
        decode_json(response).await
    }
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status.as_u16()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}
