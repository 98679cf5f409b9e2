//! ITB SHACL validator HTTP client
//!
//! Talks to the `api/validate` operation of the EU Interoperability Test Bed
//! SHACL validator. Each domain is deployed under its own path:
//! `{base_url}/{domain}/api/validate`.
//!
//! Exactly one POST per call. No retries; a request that fails at the
//! transport level or answers with a non-2xx status is returned as
//! [`ValidationError::Transport`].

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::error::{Result, ValidationError};
use crate::profile::Domain;
use crate::validation::{ValidationOutcome, ValidationRequest};

/// Public ITB deployment of the SHACL validator
pub const DEFAULT_BASE_URL: &str = "https://www.itb.ec.europa.eu/shacl";

const APPLICATION_JSON: &str = "application/json";

/// Configuration for the ITB client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItbClientConfig {
    /// Base URL the domain path is appended to
    pub base_url: String,

    /// Request timeout; `None` waits for as long as the transport does
    pub timeout: Option<Duration>,
}

impl Default for ItbClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// HTTP client for the SHACL validator
#[derive(Debug)]
pub struct ItbClient {
    client: Client,
    config: ItbClientConfig,
}

impl ItbClient {
    /// Create a client for the public ITB deployment
    pub fn new() -> Result<Self> {
        Self::with_config(ItbClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(mut config: ItbClientConfig) -> Result<Self> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ValidationError::ClientSetup(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Endpoint validating content for `domain`
    pub fn endpoint(&self, domain: Domain) -> String {
        format!("{}/{}/api/validate", self.config.base_url, domain.as_str())
    }

    /// Submit content for validation and classify the verdict
    pub async fn validate(
        &self,
        domain: Domain,
        request: &ValidationRequest,
    ) -> Result<ValidationOutcome> {
        let url = self.endpoint(domain);

        tracing::debug!(
            url = %url,
            validation_type = %request.validation_type,
            bytes = request.content_to_validate.len(),
            "Submitting metadata for validation"
        );

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Validation request failed");
                ValidationError::transport(e.to_string())
            })?;

        let status = response.status();
        tracing::debug!(status = %status, "Validation service responded");

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %error_text, "Validation service returned an error status");
            return Err(ValidationError::transport(format!(
                "{} returned {}",
                url, status
            )));
        }

        let raw = response.text().await?;
        let body: Value = serde_json::from_str(&raw)?;
        Ok(ValidationOutcome::from_response(&body, &raw))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the request timeout
    pub fn timeout(&self) -> Option<Duration> {
        self.config.timeout
    }
}

/// Builder for ItbClient
pub struct ItbClientBuilder {
    config: ItbClientConfig,
}

impl ItbClientBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: ItbClientConfig::default(),
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ItbClient> {
        ItbClient::with_config(self.config)
    }
}

impl Default for ItbClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
