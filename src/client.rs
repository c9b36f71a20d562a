//! Bedrock-style inference client.
//!
//! This is the crate's single external collaborator: a thin HTTP client over
//! the runtime endpoints `POST /model/{id}/invoke` (single-shot structured
//! inference) and `POST /model/{id}/converse` (multi-part conversational
//! inference). Transport, auth, and endpoint concerns live here; the
//! generator and validator only depend on these two operation shapes.
//!
//! NOTE: Bedrock normally requires AWS SigV4 signing (or bearer token auth).
//! This client keeps auth lightweight: a bearer token when configured, and
//! caller-injected extra headers for anything else (e.g. pre-signed values
//! or a gateway key).

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderValue};

use crate::error::{Error, Result};

/// Immutable client configuration plus a shared `reqwest` client.
///
/// Cloning is cheap; `reqwest::Client` is internally reference-counted.
#[derive(Debug, Clone)]
pub struct BedrockClient {
    http_client: reqwest::Client,
    region: String,
    base_url: String,
    /// Whether `base_url` was supplied explicitly rather than derived from
    /// the region. Explicit URLs survive region scoping.
    custom_base_url: bool,
    api_key: Option<String>,
    extra_headers: HashMap<String, String>,
}

impl BedrockClient {
    /// Create a client for the given region, with the endpoint derived as
    /// `https://bedrock-runtime.{region}.amazonaws.com`.
    pub fn new(region: impl Into<String>) -> Self {
        let region = region.into();
        let base_url = Self::endpoint_for_region(&region);
        Self {
            http_client: reqwest::Client::new(),
            region,
            base_url,
            custom_base_url: false,
            api_key: None,
            extra_headers: HashMap::new(),
        }
    }

    fn endpoint_for_region(region: &str) -> String {
        format!("https://bedrock-runtime.{region}.amazonaws.com")
    }

    /// Override the endpoint base URL (used by tests and gateways).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.custom_base_url = true;
        self
    }

    /// Set a bearer token for the `Authorization` header.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Inject an extra header on every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// Supply a preconfigured `reqwest` client (timeouts, proxies, ...).
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// The region this client targets.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The endpoint base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A clone of this client re-pointed at another region's endpoint,
    /// intended for a single call. A custom base URL is kept as-is, since
    /// the test or gateway endpoint is region-agnostic.
    pub fn scoped_to_region(&self, region: impl Into<String>) -> Self {
        let mut scoped = self.clone();
        scoped.region = region.into();
        if !scoped.custom_base_url {
            scoped.base_url = Self::endpoint_for_region(&scoped.region);
        }
        scoped
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        if let Some(api_key) = self.api_key.as_deref().filter(|v| !v.trim().is_empty()) {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {api_key}"))
                    .map_err(|e| Error::InvalidInput(format!("invalid bearer token: {e}")))?,
            );
        }

        for (k, v) in &self.extra_headers {
            if let (Ok(name), Ok(value)) = (
                reqwest::header::HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                headers.insert(name, value);
            }
        }

        Ok(headers)
    }

    fn model_url(&self, model_id: &str, suffix: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let model = urlencoding::encode(model_id);
        format!("{base}/model/{model}/{suffix}")
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<serde_json::Value> {
        let headers = self.build_headers()?;
        tracing::debug!(url = %url, "sending inference request");

        let response = self
            .http_client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %text, "inference request failed");
            return Err(Error::api(status.as_u16(), text));
        }

        let value: serde_json::Value = response.json().await?;
        Ok(value)
    }

    /// Single-shot structured inference: send a provider-specific payload to
    /// the model and return the parsed response body.
    pub async fn invoke(
        &self,
        model_id: &str,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.post_json(&self.model_url(model_id, "invoke"), payload)
            .await
    }

    /// Multi-part conversational inference: send messages (text and image
    /// parts) with inference parameters and return the structured reply.
    pub async fn converse(
        &self,
        model_id: &str,
        messages: Vec<serde_json::Value>,
        inference_config: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let body = serde_json::json!({
            "messages": messages,
            "inferenceConfig": inference_config,
        });
        self.post_json(&self.model_url(model_id, "converse"), &body)
            .await
    }
}
